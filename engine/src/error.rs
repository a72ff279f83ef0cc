//! Error types for the Jokebox engine.

use thiserror::Error;

/// All possible errors from the Jokebox engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Fetch cycle errors
    #[error("joke count must be positive")]
    InvalidCount,

    #[error("a fetch is already in progress")]
    FetchInProgress,

    #[error(
        "gave up after {attempts} attempts: collected {collected} of {requested} unique jokes"
    )]
    AttemptsExhausted {
        requested: usize,
        collected: usize,
        attempts: usize,
    },

    #[error("fetch cycle incomplete: collected {collected} of {requested} jokes")]
    IncompleteCycle { requested: usize, collected: usize },

    #[error("fetch cycle does not belong to this store")]
    ForeignCycle,

    // State errors
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::InvalidCount;
        assert_eq!(err.to_string(), "joke count must be positive");

        let err = Error::AttemptsExhausted {
            requested: 10,
            collected: 4,
            attempts: 100,
        };
        assert_eq!(
            err.to_string(),
            "gave up after 100 attempts: collected 4 of 10 unique jokes"
        );

        let err = Error::InvalidSnapshot("expected value at line 1 column 1".into());
        assert_eq!(
            err.to_string(),
            "invalid snapshot: expected value at line 1 column 1"
        );
    }
}
