//! The capabilities the end-auctions task is built against.
//!
//! Every trait has an actor-backed implementation in [`crate::clients`]; tests
//! may supply their own.

use crate::auction_actor::AuctionError;
use crate::customer_actor::CustomerError;
use crate::log_actor::LogError;
use crate::model::{
    AddToCartRequest, Auction, AuctionId, Bid, CartWarning, Customer, CustomerId, LogLevel, QueuedEmailId,
};
use crate::notification_actor::NotificationError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read and write access to auctions and their bids.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// Open auctions whose end time is at or before `now`.
    async fn auctions_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Auction>, AuctionError>;

    /// Bids on one auction, in the order they were placed.
    async fn bids_for_auction(&self, auction_id: AuctionId) -> Result<Vec<Bid>, AuctionError>;

    async fn update_auction_ended(&self, auction: &Auction, ended: bool) -> Result<(), AuctionError>;

    /// Persists the bid's current win flag.
    async fn update_bid(&self, bid: &Bid) -> Result<(), AuctionError>;
}

#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;
}

#[async_trait]
pub trait ShoppingCart: Send + Sync {
    /// Adds a line to the customer's cart. An empty result means it was added.
    async fn add_to_cart(&self, customer: &Customer, request: AddToCartRequest) -> Result<Vec<CartWarning>, CustomerError>;
}

/// Templated emails sent when auctions end.
#[async_trait]
pub trait WorkflowMessages: Send + Sync {
    /// `bid` is `None` when the auction ended without any bid.
    async fn send_auction_ended_store_owner_notification(
        &self,
        auction: &Auction,
        language_id: &str,
        bid: Option<&Bid>,
    ) -> Result<QueuedEmailId, NotificationError>;

    /// `language_id: None` uses the bidder's own language.
    async fn send_auction_ended_customer_notification_win(
        &self,
        auction: &Auction,
        language_id: Option<&str>,
        bid: &Bid,
    ) -> Result<QueuedEmailId, NotificationError>;

    async fn send_auction_ended_customer_notification_lost(
        &self,
        auction: &Auction,
        language_id: Option<&str>,
        bid: &Bid,
    ) -> Result<QueuedEmailId, NotificationError>;
}

#[async_trait]
pub trait EventLog: Send + Sync {
    async fn insert_log(&self, level: LogLevel, short_message: &str, full_message: &str) -> Result<(), LogError>;
}
