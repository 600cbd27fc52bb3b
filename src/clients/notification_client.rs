//! # Notification Client
//!
//! Renders the auction workflow emails and queues them in the outbox actor.
//! Store-owner emails go to the configured owner address; customer emails are
//! addressed to the bidder, looked up through the [`CustomerClient`].

use crate::clients::actor_client::ActorClient;
use crate::clients::CustomerClient;
use crate::config::MessageSettings;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Auction, Bid, MessageTemplate, QueuedEmail, QueuedEmailCreate, QueuedEmailId};
use crate::notification_actor::NotificationError;
use crate::tasks::collaborators::WorkflowMessages;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct NotificationClient {
    inner: ResourceClient<QueuedEmail>,
    customers: CustomerClient,
    settings: MessageSettings,
}

impl NotificationClient {
    pub fn new(inner: ResourceClient<QueuedEmail>, customers: CustomerClient, settings: MessageSettings) -> Self {
        Self {
            inner,
            customers,
            settings,
        }
    }

    /// Everything queued so far, oldest first.
    pub async fn queued_emails(&self) -> Result<Vec<QueuedEmail>, NotificationError> {
        self.inner.list(|_: &QueuedEmail| true).await.map_err(Self::map_error)
    }

    async fn queue(
        &self,
        template: MessageTemplate,
        to: String,
        language_id: String,
        auction: &Auction,
        bid: Option<&Bid>,
    ) -> Result<QueuedEmailId, NotificationError> {
        let params = QueuedEmailCreate {
            template,
            subject: template.subject(&self.settings.store_name, &auction.name),
            to,
            language_id,
            auction_id: auction.id,
            bid_id: bid.map(|b| b.id),
            amount: bid.map(|b| b.amount),
        };
        let id = self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => NotificationError::Rejected(msg),
            other => Self::map_error(other),
        })?;
        info!(email_id = %id, template = %template, "Queued email");
        Ok(id)
    }

    async fn notify_bidder(
        &self,
        template: MessageTemplate,
        auction: &Auction,
        language_id: Option<&str>,
        bid: &Bid,
    ) -> Result<QueuedEmailId, NotificationError> {
        let customer = self
            .customers
            .get(bid.customer_id)
            .await?
            .ok_or_else(|| NotificationError::RecipientNotFound(bid.customer_id.to_string()))?;

        let language_id = language_id
            .map(str::to_string)
            .or(customer.language_id)
            .unwrap_or_else(|| self.settings.default_language_id.clone());

        self.queue(template, customer.email, language_id, auction, Some(bid))
            .await
    }
}

#[async_trait]
impl ActorClient<QueuedEmail> for NotificationClient {
    type Error = NotificationError;

    fn inner(&self) -> &ResourceClient<QueuedEmail> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        NotificationError::ActorCommunicationError(e.to_string())
    }
}

#[async_trait]
impl WorkflowMessages for NotificationClient {
    #[instrument(skip(self, auction, bid), fields(auction_id = %auction.id))]
    async fn send_auction_ended_store_owner_notification(
        &self,
        auction: &Auction,
        language_id: &str,
        bid: Option<&Bid>,
    ) -> Result<QueuedEmailId, NotificationError> {
        debug!("Notifying store owner");
        let template = match bid {
            Some(_) => MessageTemplate::AuctionEndedStoreOwner,
            None => MessageTemplate::AuctionExpiredStoreOwner,
        };
        self.queue(
            template,
            self.settings.store_owner_email.clone(),
            language_id.to_string(),
            auction,
            bid,
        )
        .await
    }

    #[instrument(skip(self, auction, bid), fields(auction_id = %auction.id, bid_id = %bid.id))]
    async fn send_auction_ended_customer_notification_win(
        &self,
        auction: &Auction,
        language_id: Option<&str>,
        bid: &Bid,
    ) -> Result<QueuedEmailId, NotificationError> {
        self.notify_bidder(MessageTemplate::AuctionEndedCustomerWin, auction, language_id, bid)
            .await
    }

    #[instrument(skip(self, auction, bid), fields(auction_id = %auction.id, bid_id = %bid.id))]
    async fn send_auction_ended_customer_notification_lost(
        &self,
        auction: &Auction,
        language_id: Option<&str>,
        bid: &Bid,
    ) -> Result<QueuedEmailId, NotificationError> {
        self.notify_bidder(MessageTemplate::AuctionEndedCustomerLost, auction, language_id, bid)
            .await
    }
}
