//! # Auction Client
//!
//! High-level API over the Auction actor. It also holds a [`BidClient`] so it
//! can serve as the complete [`AuctionStore`] for the end-auctions task.

use crate::auction_actor::{AuctionAction, AuctionActionResult, AuctionError};
use crate::clients::actor_client::ActorClient;
use crate::clients::BidClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Auction, AuctionCreate, AuctionId, AuctionUpdate, Bid};
use crate::tasks::collaborators::AuctionStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Auction actor.
#[derive(Clone)]
pub struct AuctionClient {
    inner: ResourceClient<Auction>,
    bids: BidClient,
}

impl AuctionClient {
    pub fn new(inner: ResourceClient<Auction>, bids: BidClient) -> Self {
        Self { inner, bids }
    }

    #[instrument(skip(self))]
    pub async fn create_auction(&self, params: AuctionCreate) -> Result<AuctionId, AuctionError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_auction(&self, id: AuctionId, update: AuctionUpdate) -> Result<Auction, AuctionError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Auctions still open past their end time.
    #[instrument(skip(self))]
    pub async fn list_auctions_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Auction>, AuctionError> {
        debug!("Listing due auctions");
        self.inner
            .list(move |auction: &Auction| auction.is_due(now))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: AuctionId) -> Result<u32, AuctionError> {
        debug!("Checking stock for auction {}", id);
        match self.inner.perform_action(id, AuctionAction::CheckStock).await {
            Ok(AuctionActionResult::CheckStock(level)) => Ok(level),
            Ok(other) => Err(AuctionError::ActorCommunicationError(format!(
                "CheckStock answered with {:?}",
                other
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Takes `quantity` units out of stock.
    ///
    /// A rejected reservation comes back as [`AuctionError::InsufficientStock`].
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: AuctionId, quantity: u32) -> Result<(), AuctionError> {
        debug!("Reserving {} units for auction {}", quantity, id);
        match self.inner.perform_action(id, AuctionAction::ReserveStock(quantity)).await {
            Ok(AuctionActionResult::ReserveStock(())) => Ok(()),
            Ok(other) => Err(AuctionError::ActorCommunicationError(format!(
                "ReserveStock answered with {:?}",
                other
            ))),
            Err(FrameworkError::Custom(msg)) => Err(AuctionError::InsufficientStock(msg)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Auction> for AuctionClient {
    type Error = AuctionError;

    fn inner(&self) -> &ResourceClient<Auction> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => AuctionError::NotFound(id),
            other => AuctionError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl AuctionStore for AuctionClient {
    async fn auctions_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Auction>, AuctionError> {
        self.list_auctions_to_end(now).await
    }

    async fn bids_for_auction(&self, auction_id: AuctionId) -> Result<Vec<Bid>, AuctionError> {
        Ok(self.bids.bids_for_auction(auction_id).await?)
    }

    async fn update_auction_ended(&self, auction: &Auction, ended: bool) -> Result<(), AuctionError> {
        let update = AuctionUpdate {
            ended: Some(ended),
            ..AuctionUpdate::default()
        };
        self.update_auction(auction.id, update).await?;
        Ok(())
    }

    async fn update_bid(&self, bid: &Bid) -> Result<(), AuctionError> {
        self.bids.set_win(bid.id, bid.win).await?;
        Ok(())
    }
}
