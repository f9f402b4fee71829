use thiserror::Error;

/// Message carried by every empty or unmatched lookup.
pub const NO_RESULTS: &str = "no results found";

/// Errors returned by every MealDB operation
#[derive(Error, Debug)]
pub enum MealDbError {
    /// The request could not be completed; carries the transport diagnostic verbatim
    #[error("{0}")]
    Transport(String),

    /// Empty body, undecodable body, or missing/empty payload key
    #[error("no results found")]
    NoResults,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Failure reported by a [`Transport`](crate::transport::Transport) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<TransportError> for MealDbError {
    fn from(err: TransportError) -> Self {
        MealDbError::Transport(err.message)
    }
}
