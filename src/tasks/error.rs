use crate::auction_actor::AuctionError;
use crate::customer_actor::CustomerError;
use crate::log_actor::LogError;
use crate::model::CustomerId;
use crate::notification_actor::NotificationError;
use thiserror::Error;

/// Failure of a scheduled task run.
///
/// Cart warnings are not failures; they are reported through the activity log.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskError {
    #[error("Auction store error: {0}")]
    Auction(#[from] AuctionError),

    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("Activity log error: {0}")]
    Log(#[from] LogError),

    /// The winning bid points at a customer that does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),
}
