//! Error types for the Bid actor.

use thiserror::Error;

/// Errors that can occur during bid operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BidError {
    #[error("Bid not found: {0}")]
    NotFound(String),

    /// The bid payload was rejected (e.g., a non-positive amount).
    #[error("Bid validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BidError {
    fn from(msg: String) -> Self {
        BidError::ActorCommunicationError(msg)
    }
}
