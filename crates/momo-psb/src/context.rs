//! Per-call authentication and creation context.

use crate::constants::DEFAULT_TARGET_ENVIRONMENT;

/// Bearer token and target environment for one collection call.
///
/// Contexts are cheap values built by the caller for each call (or reused
/// while a token stays valid). The client never stores them.
#[derive(Clone, PartialEq, Eq)]
pub struct CallContext {
    access_token: Option<String>,
    target_environment: String,
}

impl std::fmt::Debug for CallContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallContext")
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("target_environment", &self.target_environment)
            .finish()
    }
}

impl CallContext {
    /// Context carrying `access_token`, targeting the sandbox environment.
    /// An empty token is treated as no token.
    pub fn new(access_token: impl Into<String>) -> Self {
        let token = access_token.into();
        Self {
            access_token: (!token.trim().is_empty()).then_some(token),
            target_environment: DEFAULT_TARGET_ENVIRONMENT.to_string(),
        }
    }

    /// Context without a bearer token. Requests go out without an
    /// `Authorization` header and the provider decides what to do with them.
    pub fn anonymous() -> Self {
        Self {
            access_token: None,
            target_environment: DEFAULT_TARGET_ENVIRONMENT.to_string(),
        }
    }

    /// Override the target environment (e.g. `mtnuganda`).
    pub fn with_environment(mut self, target_environment: impl Into<String>) -> Self {
        self.target_environment = target_environment.into();
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn target_environment(&self) -> &str {
        &self.target_environment
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Identity of a resource being created: the caller-generated reference id
/// and the callback URL the provider notifies.
///
/// Keep the reference id: it is the path key for every later status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    reference_id: String,
    callback_url: String,
}

impl NewResource {
    pub fn new(reference_id: impl Into<String>, callback_url: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
            callback_url: callback_url.into(),
        }
    }

    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}
