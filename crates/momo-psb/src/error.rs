use thiserror::Error;

/// Errors returned by MoMo client operations.
#[derive(Debug, Error)]
pub enum MomoError {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success status from a validated operation. Carries the provider's
    /// error payload verbatim.
    #[error("remote error: HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),
}

impl MomoError {
    /// HTTP status of a [`MomoError::Remote`], `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            MomoError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
