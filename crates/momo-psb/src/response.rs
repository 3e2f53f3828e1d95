//! Response envelopes and per-operation response handling.
//!
//! Each operation is bound to one [`ResponsePolicy`]:
//!
//! - [`Raw`]: the envelope is returned untouched, whatever the status
//! - [`Validated`]: status must be in [`SUCCESS_STATUSES`], then the body is
//!   decoded as JSON; anything else is [`MomoError::Remote`]
//!
//! Validation is status-based only. A decoded body is returned as the
//! provider sent it, with no schema checks.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::error::MomoError;

/// Statuses a validated operation accepts.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 202];

/// Status, body and headers of a provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
    headers: BTreeMap<String, String>,
}

impl ApiResponse {
    /// Header names are stored lowercase.
    pub fn new(status: u16, body: impl Into<String>, headers: BTreeMap<String, String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw body text. Empty for the usual 202 Accepted.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, MomoError> {
        serde_json::from_str(&self.body).map_err(|e| {
            MomoError::Decode(format!("invalid JSON in HTTP {} response: {e}", self.status))
        })
    }
}

/// How an operation turns an [`ApiResponse`] into its result.
pub trait ResponsePolicy {
    type Output;

    fn apply(response: ApiResponse) -> Result<Self::Output, MomoError>;
}

/// Pass-through: the caller inspects status and body.
#[derive(Debug)]
pub enum Raw {}

impl ResponsePolicy for Raw {
    type Output = ApiResponse;

    fn apply(response: ApiResponse) -> Result<ApiResponse, MomoError> {
        Ok(response)
    }
}

/// Status check, then JSON decode into `T` (a `serde_json::Value` by default).
#[derive(Debug)]
pub struct Validated<T = serde_json::Value>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned> ResponsePolicy for Validated<T> {
    type Output = T;

    fn apply(response: ApiResponse) -> Result<T, MomoError> {
        if !SUCCESS_STATUSES.contains(&response.status) {
            tracing::warn!(status = response.status, "provider rejected request");
            return Err(MomoError::Remote {
                status: response.status,
                body: response.body,
            });
        }
        response.json()
    }
}

/// Body of a successful `POST /v1_0/apiuser/{id}/apikey`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: String,
}

/// Body of a successful `POST /collection/token/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}
