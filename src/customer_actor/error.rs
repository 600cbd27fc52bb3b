//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer and cart operations.
///
/// Cart validation problems are not errors; they come back as
/// [`CartWarning`](crate::model::CartWarning)s.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Customer validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CustomerError {
    fn from(msg: String) -> Self {
        CustomerError::ActorCommunicationError(msg)
    }
}
