use momo_psb::MomoError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Momo(#[from] MomoError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// An HTTP response was received but rejected. The exchange itself worked.
    pub fn is_remote(&self) -> bool {
        matches!(self, CliError::Momo(MomoError::Remote { .. }))
    }
}
