//! Error types for the Auction actor.

use crate::bid_actor::BidError;
use thiserror::Error;

/// Errors that can occur during auction-store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuctionError {
    /// The requested auction was not found.
    #[error("Auction not found: {0}")]
    NotFound(String),

    /// The auction has fewer units left than requested.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// A bid operation behind the auction store failed.
    #[error(transparent)]
    Bid(#[from] BidError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AuctionError {
    fn from(msg: String) -> Self {
        AuctionError::ActorCommunicationError(msg)
    }
}
