use std::env;
use url::Url;

use crate::constants::SANDBOX_BASE_URL;
use crate::error::MomoError;

/// Connection settings shared by every call. Immutable once built.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    subscription_key: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("subscription_key", &"[REDACTED]")
            .finish()
    }
}

impl ClientConfig {
    /// Validate and normalize the connection settings.
    ///
    /// Trailing slashes are stripped from `base_url` so paths can be joined
    /// with a single `/`.
    pub fn new(base_url: &str, subscription_key: &str) -> Result<Self, MomoError> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(MomoError::Config("base URL is required".to_string()));
        }
        if subscription_key.trim().is_empty() {
            return Err(MomoError::Config("subscription key is required".to_string()));
        }

        let parsed = Url::parse(base_url)
            .map_err(|e| MomoError::Config(format!("invalid base URL {base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(MomoError::Config(format!(
                "invalid base URL {base_url}: expected an http or https URL with a host"
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            subscription_key: subscription_key.to_string(),
        })
    }

    /// Load settings from the environment (and `.env` if present).
    ///
    /// - `MOMO_BASE_URL`: optional, defaults to the developer sandbox
    /// - `MOMO_SUBSCRIPTION_KEY`: required
    pub fn from_env() -> Result<Self, MomoError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("MOMO_BASE_URL").unwrap_or_else(|_| SANDBOX_BASE_URL.to_string());
        let subscription_key = env::var("MOMO_SUBSCRIPTION_KEY")
            .map_err(|_| MomoError::Config("MOMO_SUBSCRIPTION_KEY must be set".to_string()))?;

        Self::new(&base_url, &subscription_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }

    /// Join a path (with leading slash) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
