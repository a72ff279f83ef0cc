//! Unified error handling for the client.

use crate::config::ConfigError;
use crate::source::SourceError;
use crate::storage::StorageError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Could not fetch jokes: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Engine(#[from] jokebox_engine::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Whether the user should be interrupted about this error.
    ///
    /// Fetch failures are shown; everything else is only logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::Source(_)
                | AppError::Engine(jokebox_engine::Error::AttemptsExhausted { .. })
                | AppError::Engine(jokebox_engine::Error::FetchInProgress)
        )
    }
}

/// Result type alias for the client.
pub type Result<T> = std::result::Result<T, AppError>;
