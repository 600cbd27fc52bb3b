use super::{AuctionId, CustomerId, StoreId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(BidId, "bid");

/// A customer's offer on an auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: BidId,
    pub auction_id: AuctionId,
    pub customer_id: CustomerId,
    pub store_id: StoreId,
    pub amount: Decimal,
    pub placed_at: DateTime<Utc>,
    pub win: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidCreate {
    pub auction_id: AuctionId,
    pub customer_id: CustomerId,
    pub store_id: StoreId,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BidUpdate {
    pub win: Option<bool>,
}

/// Picks the highest bid. On equal amounts the earliest one in `bids` wins.
pub fn highest_bid(bids: &[Bid]) -> Option<&Bid> {
    bids.iter().fold(None, |best: Option<&Bid>, bid| match best {
        Some(current) if current.amount >= bid.amount => Some(current),
        _ => Some(bid),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bid(id: u32, amount: Decimal) -> Bid {
        Bid {
            id: BidId(id),
            auction_id: AuctionId(1),
            customer_id: CustomerId(id),
            store_id: "store_1".into(),
            amount,
            placed_at: Utc::now(),
            win: false,
        }
    }

    #[test]
    fn test_highest_bid_picks_maximum() {
        let bids = vec![bid(1, dec!(10)), bid(2, dec!(25)), bid(3, dec!(15))];
        assert_eq!(highest_bid(&bids).map(|b| b.id), Some(BidId(2)));
    }

    #[test]
    fn test_highest_bid_tie_keeps_first() {
        let bids = vec![bid(1, dec!(5)), bid(2, dec!(30.50)), bid(3, dec!(30.5))];
        assert_eq!(highest_bid(&bids).map(|b| b.id), Some(BidId(2)));
    }

    #[test]
    fn test_highest_bid_empty() {
        assert!(highest_bid(&[]).is_none());
    }
}
