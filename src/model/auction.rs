//! Auctioned catalog items.
//!
//! Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
//! [`crate::auction_actor`] for the entity implementation and the stock actions
//! used when a winning bid becomes a cart line.

use super::StoreId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for Auctions. Bids and cart lines reference it as
    /// their product.
    AuctionId,
    "auction"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub id: AuctionId,
    pub name: String,
    pub store_id: StoreId,
    pub ends_at: DateTime<Utc>,
    pub ended: bool,
    pub published: bool,
    pub stock_quantity: u32,
}

impl Auction {
    /// Whether the auction is still open but past its end time.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.ended && self.ends_at <= now
    }
}

/// Payload for creating a new auction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionCreate {
    pub name: String,
    pub store_id: StoreId,
    pub ends_at: DateTime<Utc>,
    pub published: bool,
    pub stock_quantity: u32,
}

/// Payload for updating an auction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuctionUpdate {
    pub ended: Option<bool>,
    pub published: Option<bool>,
    pub ends_at: Option<DateTime<Utc>>,
}
