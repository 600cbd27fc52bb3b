use crate::clients::{AuctionClient, BidClient, CustomerClient, LogClient, NotificationClient};
use crate::config::{AppConfig, SchedulerConfig};
use crate::tasks::{EndAuctionsTask, TaskScheduler};
use std::sync::Arc;
use tracing::{error, info};

/// Starts and owns every actor of the auction back office.
///
/// # Wiring
///
/// - **Bid actor**: no dependencies
/// - **Auction actor**: no context; its client wraps the [`BidClient`]
/// - **Customer actor**: context is the [`AuctionClient`], used to validate
///   cart lines and reserve stock
/// - **Queued-email actor**: its client resolves bidders through the [`CustomerClient`]
/// - **Log actor**: no dependencies
///
/// The [`EndAuctionsTask`] receives the clients as its collaborators.
///
/// ```ignore
/// let system = AuctionSystem::new(&AppConfig::load()?);
/// let summary = system.end_auctions_task.run().await?;
/// system.shutdown().await?;
/// ```
pub struct AuctionSystem {
    pub auction_client: AuctionClient,
    pub bid_client: BidClient,
    pub customer_client: CustomerClient,
    pub notification_client: NotificationClient,
    pub log_client: LogClient,
    pub end_auctions_task: Arc<EndAuctionsTask>,
    scheduler_config: SchedulerConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AuctionSystem {
    /// Spawns all actors. Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let (bid_actor, bid_client) = crate::bid_actor::new();
        let (auction_actor, auction_client) = crate::auction_actor::new(bid_client.clone());
        let (customer_actor, customer_client) = crate::customer_actor::new();
        let (email_actor, notification_client) =
            crate::notification_actor::new(customer_client.clone(), config.messages.clone());
        let (log_actor, log_client) = crate::log_actor::new();

        let handles = vec![
            tokio::spawn(bid_actor.run(())),
            tokio::spawn(auction_actor.run(())),
            tokio::spawn(customer_actor.run(auction_client.clone())),
            tokio::spawn(email_actor.run(())),
            tokio::spawn(log_actor.run(())),
        ];

        let end_auctions_task = Arc::new(EndAuctionsTask::new(
            Arc::new(auction_client.clone()),
            Arc::new(customer_client.clone()),
            Arc::new(customer_client.clone()),
            Arc::new(notification_client.clone()),
            Arc::new(log_client.clone()),
            config.messages.default_admin_language_id.clone(),
        ));

        info!("Auction system started");
        Self {
            auction_client,
            bid_client,
            customer_client,
            notification_client,
            log_client,
            end_auctions_task,
            scheduler_config: config.scheduler.clone(),
            handles,
        }
    }

    /// A scheduler for the end-auctions task using the configured interval.
    ///
    /// Stop it and drop it before calling [`shutdown`](Self::shutdown); it
    /// keeps the actors' clients alive.
    pub fn scheduler(&self) -> TaskScheduler {
        TaskScheduler::new(self.end_auctions_task.clone(), self.scheduler_config.clone())
    }

    /// Drops every client and waits for the actors to drain.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down auction system...");

        drop(self.end_auctions_task);
        drop(self.notification_client);
        drop(self.customer_client);
        drop(self.auction_client);
        drop(self.bid_client);
        drop(self.log_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Auction system shutdown complete.");
        Ok(())
    }
}
