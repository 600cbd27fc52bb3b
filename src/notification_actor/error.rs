//! Error types for notifications.

use crate::customer_actor::CustomerError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    /// The bidder to notify does not exist.
    #[error("Recipient not found: {0}")]
    RecipientNotFound(String),

    #[error("Recipient lookup failed: {0}")]
    Customer(#[from] CustomerError),

    #[error("Email rejected: {0}")]
    Rejected(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for NotificationError {
    fn from(msg: String) -> Self {
        NotificationError::ActorCommunicationError(msg)
    }
}
