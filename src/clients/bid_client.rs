use crate::bid_actor::BidError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{AuctionId, Bid, BidCreate, BidId, BidUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Bid actor.
#[derive(Clone)]
pub struct BidClient {
    inner: ResourceClient<Bid>,
}

impl BidClient {
    pub fn new(inner: ResourceClient<Bid>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn place_bid(&self, params: BidCreate) -> Result<BidId, BidError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => BidError::ValidationError(msg),
            other => Self::map_error(other),
        })
    }

    /// All bids on `auction_id`, oldest first.
    #[instrument(skip(self))]
    pub async fn bids_for_auction(&self, auction_id: AuctionId) -> Result<Vec<Bid>, BidError> {
        debug!("Listing bids");
        self.inner
            .list(move |bid: &Bid| bid.auction_id == auction_id)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_win(&self, id: BidId, win: bool) -> Result<Bid, BidError> {
        debug!("Updating win flag");
        self.inner
            .update(id, BidUpdate { win: Some(win) })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Bid> for BidClient {
    type Error = BidError;

    fn inner(&self) -> &ResourceClient<Bid> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => BidError::NotFound(id),
            other => BidError::ActorCommunicationError(other.to_string()),
        }
    }
}
