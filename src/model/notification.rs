use super::{AuctionId, BidId, LanguageId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

entity_id!(QueuedEmailId, "email");

/// The message templates the auction workflow can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageTemplate {
    /// Store owner: auction ended with a winner.
    AuctionEndedStoreOwner,
    /// Store owner: auction ended without any bid.
    AuctionExpiredStoreOwner,
    AuctionEndedCustomerWin,
    AuctionEndedCustomerLost,
}

impl MessageTemplate {
    /// Template system name as stored in the message-template catalog.
    pub fn system_name(&self) -> &'static str {
        match self {
            MessageTemplate::AuctionEndedStoreOwner => "AuctionEnded.StoreOwnerNotification",
            MessageTemplate::AuctionExpiredStoreOwner => "AuctionExpired.StoreOwnerNotification",
            MessageTemplate::AuctionEndedCustomerWin => "AuctionEnded.CustomerNotificationWin",
            MessageTemplate::AuctionEndedCustomerLost => "AuctionEnded.CustomerNotificationLost",
        }
    }

    pub fn subject(&self, store_name: &str, auction_name: &str) -> String {
        match self {
            MessageTemplate::AuctionEndedStoreOwner => {
                format!("{}. Auction \"{}\" has ended", store_name, auction_name)
            }
            MessageTemplate::AuctionExpiredStoreOwner => {
                format!("{}. Auction \"{}\" has expired without bids", store_name, auction_name)
            }
            MessageTemplate::AuctionEndedCustomerWin => {
                format!("{}. You won the auction \"{}\"", store_name, auction_name)
            }
            MessageTemplate::AuctionEndedCustomerLost => {
                format!("{}. Auction \"{}\" has ended", store_name, auction_name)
            }
        }
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.system_name())
    }
}

/// An email waiting in the outbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedEmail {
    pub id: QueuedEmailId,
    pub template: MessageTemplate,
    pub to: String,
    pub language_id: LanguageId,
    pub subject: String,
    pub auction_id: AuctionId,
    pub bid_id: Option<BidId>,
    pub amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedEmailCreate {
    pub template: MessageTemplate,
    pub to: String,
    pub language_id: LanguageId,
    pub subject: String,
    pub auction_id: AuctionId,
    pub bid_id: Option<BidId>,
    pub amount: Option<Decimal>,
}
