//! [`ActorEntity`] implementation for [`Auction`].

use super::actions::{AuctionAction, AuctionActionResult};
use crate::framework::ActorEntity;
use crate::model::{Auction, AuctionCreate, AuctionId, AuctionUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Auction {
    type Id = AuctionId;
    type CreateParams = AuctionCreate;
    type UpdateParams = AuctionUpdate;
    type Action = AuctionAction;
    type ActionResult = AuctionActionResult;
    type Context = ();

    fn from_create_params(id: AuctionId, params: AuctionCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Auction name is required".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
            store_id: params.store_id,
            ends_at: params.ends_at,
            ended: false,
            published: params.published,
            stock_quantity: params.stock_quantity,
        })
    }

    async fn on_update(&mut self, update: AuctionUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(ended) = update.ended {
            self.ended = ended;
        }
        if let Some(published) = update.published {
            self.published = published;
        }
        if let Some(ends_at) = update.ends_at {
            self.ends_at = ends_at;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: AuctionAction, _ctx: &()) -> Result<AuctionActionResult, String> {
        match action {
            AuctionAction::CheckStock => Ok(AuctionActionResult::CheckStock(self.stock_quantity)),
            AuctionAction::ReserveStock(quantity) => {
                if self.stock_quantity < quantity {
                    return Err(format!(
                        "requested {}, available {}",
                        quantity, self.stock_quantity
                    ));
                }
                self.stock_quantity -= quantity;
                Ok(AuctionActionResult::ReserveStock(()))
            }
        }
    }
}
