//! [`ActorEntity`] implementation for [`Bid`].
//!
//! Bids are append-only apart from the win flag; there are no custom actions.

use crate::framework::ActorEntity;
use crate::model::{Bid, BidCreate, BidId, BidUpdate};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Bid {
    type Id = BidId;
    type CreateParams = BidCreate;
    type UpdateParams = BidUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: BidId, params: BidCreate) -> Result<Self, String> {
        if params.amount <= Decimal::ZERO {
            return Err(format!("Bid amount must be positive, got {}", params.amount));
        }
        Ok(Self {
            id,
            auction_id: params.auction_id,
            customer_id: params.customer_id,
            store_id: params.store_id,
            amount: params.amount,
            placed_at: Utc::now(),
            win: false,
        })
    }

    async fn on_update(&mut self, update: BidUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(win) = update.win {
            self.win = win;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
