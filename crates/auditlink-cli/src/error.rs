//! CLI error handling.

use auditlink_client::DeliveryOutcome;
use auditlink_common_config::ConfigError;
use auditlink_common_http::HttpError;
use thiserror::Error;

use crate::Exit;

/// Errors surfaced by the `auditlink` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] HttpError),

    #[error("event not delivered: {0}")]
    NotDelivered(DeliveryOutcome),

    #[error("failed to render envelope: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Config(_) => Exit::ConfigError,
            Self::NotDelivered(_) => Exit::NetworkError,
            Self::Client(_) | Self::Render(_) | Self::Other(_) => Exit::GeneralError,
        }
    }
}
