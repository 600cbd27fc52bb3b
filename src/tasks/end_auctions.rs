//! # End Auctions Task
//!
//! Closes every open auction whose end time has passed.
//!
//! For each due auction, in the order the store returns them:
//!
//! 1. No bids: the auction is marked ended and the store owner is told it
//!    expired.
//! 2. Otherwise the highest bid (first one on ties) is added to the bidder's
//!    cart as an `Auctions` line at the bid amount.
//!    - Added: the bid is marked as the winner, the store owner and the bidder
//!      are notified, and the auction is marked ended.
//!    - Rejected with warnings: an error entry is written to the activity log
//!      and the auction stays open, so the next run tries again.
//!
//! Any collaborator failure stops the run. Auctions already handled keep their
//! new state; the rest wait for the next run.

use super::collaborators::{AuctionStore, CustomerLookup, EventLog, ShoppingCart, WorkflowMessages};
use super::{ScheduleTask, TaskError};
use crate::model::{highest_bid, AddToCartRequest, Auction, CartWarning, LanguageId, LogLevel, ShoppingCartType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Counts of what one run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndAuctionsSummary {
    pub ended_without_bids: usize,
    pub won: usize,
    pub blocked_by_warnings: usize,
}

enum AuctionOutcome {
    EndedWithoutBids,
    Won,
    Blocked,
}

pub struct EndAuctionsTask {
    auctions: Arc<dyn AuctionStore>,
    customers: Arc<dyn CustomerLookup>,
    cart: Arc<dyn ShoppingCart>,
    messages: Arc<dyn WorkflowMessages>,
    log: Arc<dyn EventLog>,
    admin_language_id: LanguageId,
}

impl EndAuctionsTask {
    pub fn new(
        auctions: Arc<dyn AuctionStore>,
        customers: Arc<dyn CustomerLookup>,
        cart: Arc<dyn ShoppingCart>,
        messages: Arc<dyn WorkflowMessages>,
        log: Arc<dyn EventLog>,
        admin_language_id: impl Into<LanguageId>,
    ) -> Self {
        Self {
            auctions,
            customers,
            cart,
            messages,
            log,
            admin_language_id: admin_language_id.into(),
        }
    }

    pub async fn run(&self) -> Result<EndAuctionsSummary, TaskError> {
        self.run_at(Utc::now()).await
    }

    /// Ends the auctions that are due at `now`.
    #[instrument(skip(self))]
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<EndAuctionsSummary, TaskError> {
        let due = self.auctions.auctions_to_end(now).await?;
        debug!(count = due.len(), "Auctions to end");

        let mut summary = EndAuctionsSummary::default();
        for auction in &due {
            match self.end_auction(auction).await? {
                AuctionOutcome::EndedWithoutBids => summary.ended_without_bids += 1,
                AuctionOutcome::Won => summary.won += 1,
                AuctionOutcome::Blocked => summary.blocked_by_warnings += 1,
            }
        }
        Ok(summary)
    }

    #[instrument(skip(self, auction), fields(auction_id = %auction.id))]
    async fn end_auction(&self, auction: &Auction) -> Result<AuctionOutcome, TaskError> {
        let bids = self.auctions.bids_for_auction(auction.id).await?;

        let Some(highest) = highest_bid(&bids) else {
            self.auctions.update_auction_ended(auction, true).await?;
            self.messages
                .send_auction_ended_store_owner_notification(auction, &self.admin_language_id, None)
                .await?;
            info!("Auction ended without bids");
            return Ok(AuctionOutcome::EndedWithoutBids);
        };

        let customer = self
            .customers
            .customer_by_id(highest.customer_id)
            .await?
            .ok_or(TaskError::CustomerNotFound(highest.customer_id))?;

        let request = AddToCartRequest {
            product_id: auction.id,
            cart_type: ShoppingCartType::Auctions,
            store_id: highest.store_id.clone(),
            customer_entered_price: highest.amount,
            quantity: 1,
        };
        let warnings = self.cart.add_to_cart(&customer, request).await?;

        if !warnings.is_empty() {
            warn!(bid_id = %highest.id, count = warnings.len(), "Winning bid rejected by cart");
            self.log
                .insert_log(
                    LogLevel::Error,
                    &format!("EndAuctionTask - Product {}", auction.name),
                    &join_warnings(&warnings),
                )
                .await?;
            return Ok(AuctionOutcome::Blocked);
        }

        let mut winner = highest.clone();
        winner.win = true;
        self.auctions.update_bid(&winner).await?;

        self.messages
            .send_auction_ended_store_owner_notification(auction, &self.admin_language_id, Some(&winner))
            .await?;
        self.messages
            .send_auction_ended_customer_notification_win(auction, None, &winner)
            .await?;
        self.messages
            .send_auction_ended_customer_notification_lost(auction, None, &winner)
            .await?;

        self.auctions.update_auction_ended(auction, true).await?;
        info!(bid_id = %winner.id, amount = %winner.amount, "Auction won");
        Ok(AuctionOutcome::Won)
    }
}

fn join_warnings(warnings: &[CartWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl ScheduleTask for EndAuctionsTask {
    fn name(&self) -> &str {
        "EndAuctionsTask"
    }

    async fn execute(&self) -> Result<(), TaskError> {
        let summary = self.run().await?;
        info!(
            ended_without_bids = summary.ended_without_bids,
            won = summary.won,
            blocked_by_warnings = summary.blocked_by_warnings,
            "End auctions run finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction_actor::AuctionError;
    use crate::customer_actor::CustomerError;
    use crate::log_actor::LogError;
    use crate::model::{AuctionId, Bid, BidId, Customer, CustomerId, QueuedEmailId};
    use crate::notification_actor::NotificationError;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// In-memory stand-in for every collaborator; records calls in order.
    #[derive(Default)]
    struct World {
        auctions: Vec<Auction>,
        bids: Vec<Bid>,
        customers: Vec<Customer>,
        cart_warnings: Vec<CartWarning>,
        offline_bids_for: Option<AuctionId>,
        lost_notice_fails: bool,
        calls: Vec<String>,
        cart_requests: Vec<AddToCartRequest>,
        logs: Vec<(LogLevel, String, String)>,
    }

    #[derive(Default)]
    struct Fake(Mutex<World>);

    impl Fake {
        fn world(&self) -> std::sync::MutexGuard<'_, World> {
            self.0.lock().unwrap()
        }

        fn record(&self, call: String) {
            self.world().calls.push(call);
        }
    }

    #[async_trait]
    impl AuctionStore for Fake {
        async fn auctions_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Auction>, AuctionError> {
            Ok(self.world().auctions.iter().filter(|a| a.is_due(now)).cloned().collect())
        }

        async fn bids_for_auction(&self, auction_id: AuctionId) -> Result<Vec<Bid>, AuctionError> {
            let world = self.world();
            if world.offline_bids_for == Some(auction_id) {
                return Err(AuctionError::ActorCommunicationError("bid store offline".into()));
            }
            Ok(world.bids.iter().filter(|b| b.auction_id == auction_id).cloned().collect())
        }

        async fn update_auction_ended(&self, auction: &Auction, ended: bool) -> Result<(), AuctionError> {
            let mut world = self.world();
            world.calls.push(format!("ended:{}", auction.id));
            if let Some(stored) = world.auctions.iter_mut().find(|a| a.id == auction.id) {
                stored.ended = ended;
            }
            Ok(())
        }

        async fn update_bid(&self, bid: &Bid) -> Result<(), AuctionError> {
            let mut world = self.world();
            world.calls.push(format!("update_bid:{}:{}", bid.id, bid.win));
            if let Some(stored) = world.bids.iter_mut().find(|b| b.id == bid.id) {
                stored.win = bid.win;
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CustomerLookup for Fake {
        async fn customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
            Ok(self.world().customers.iter().find(|c| c.id == id).cloned())
        }
    }

    #[async_trait]
    impl ShoppingCart for Fake {
        async fn add_to_cart(&self, customer: &Customer, request: AddToCartRequest) -> Result<Vec<CartWarning>, CustomerError> {
            let mut world = self.world();
            world.calls.push(format!("cart:{}", customer.id));
            world.cart_requests.push(request);
            Ok(world.cart_warnings.clone())
        }
    }

    #[async_trait]
    impl WorkflowMessages for Fake {
        async fn send_auction_ended_store_owner_notification(
            &self,
            auction: &Auction,
            language_id: &str,
            bid: Option<&Bid>,
        ) -> Result<QueuedEmailId, NotificationError> {
            let bid = bid.map(|b| b.id.to_string()).unwrap_or_else(|| "none".into());
            self.record(format!("owner:{}:{}:{}", auction.id, language_id, bid));
            Ok(QueuedEmailId(1))
        }

        async fn send_auction_ended_customer_notification_win(
            &self,
            _auction: &Auction,
            language_id: Option<&str>,
            bid: &Bid,
        ) -> Result<QueuedEmailId, NotificationError> {
            self.record(format!("win:{}:{:?}", bid.id, language_id));
            Ok(QueuedEmailId(2))
        }

        async fn send_auction_ended_customer_notification_lost(
            &self,
            _auction: &Auction,
            language_id: Option<&str>,
            bid: &Bid,
        ) -> Result<QueuedEmailId, NotificationError> {
            if self.world().lost_notice_fails {
                return Err(NotificationError::Rejected("mail queue full".into()));
            }
            self.record(format!("lost:{}:{:?}", bid.id, language_id));
            Ok(QueuedEmailId(3))
        }
    }

    #[async_trait]
    impl EventLog for Fake {
        async fn insert_log(&self, level: LogLevel, short_message: &str, full_message: &str) -> Result<(), LogError> {
            self.world()
                .logs
                .push((level, short_message.to_string(), full_message.to_string()));
            Ok(())
        }
    }

    fn task(fake: &Arc<Fake>) -> EndAuctionsTask {
        EndAuctionsTask::new(fake.clone(), fake.clone(), fake.clone(), fake.clone(), fake.clone(), "en")
    }

    fn auction(id: u32, name: &str) -> Auction {
        Auction {
            id: AuctionId(id),
            name: name.into(),
            store_id: "store_1".into(),
            ends_at: Utc::now() - Duration::minutes(5),
            ended: false,
            published: true,
            stock_quantity: 1,
        }
    }

    fn bid(id: u32, auction: u32, customer: u32, amount: Decimal) -> Bid {
        Bid {
            id: BidId(id),
            auction_id: AuctionId(auction),
            customer_id: CustomerId(customer),
            store_id: "store_1".into(),
            amount,
            placed_at: Utc::now(),
            win: false,
        }
    }

    fn customer(id: u32) -> Customer {
        Customer {
            id: CustomerId(id),
            email: format!("bidder{}@example.com", id),
            username: format!("bidder{}", id),
            active: true,
            deleted: false,
            language_id: None,
            shopping_cart_items: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_highest_bid_wins_and_everyone_is_notified() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions.push(auction(1, "Brass lamp"));
            world.bids = vec![
                bid(1, 1, 10, dec!(10)),
                bid(2, 1, 20, dec!(25)),
                bid(3, 1, 30, dec!(15)),
            ];
            world.customers = vec![customer(10), customer(20), customer(30)];
        }

        let summary = task(&fake).run().await.unwrap();
        assert_eq!(summary, EndAuctionsSummary { won: 1, ..Default::default() });

        let world = fake.world();
        assert_eq!(
            world.calls,
            vec![
                "cart:customer_20",
                "update_bid:bid_2:true",
                "owner:auction_1:en:bid_2",
                "win:bid_2:None",
                "lost:bid_2:None",
                "ended:auction_1",
            ]
        );
        assert_eq!(
            world.cart_requests,
            vec![AddToCartRequest {
                product_id: AuctionId(1),
                cart_type: ShoppingCartType::Auctions,
                store_id: "store_1".into(),
                customer_entered_price: dec!(25),
                quantity: 1,
            }]
        );
        assert!(world.bids.iter().find(|b| b.id == BidId(2)).unwrap().win);
        assert!(world.auctions[0].ended);
        assert!(world.logs.is_empty());
    }

    #[tokio::test]
    async fn test_auction_without_bids_ends_with_owner_notice() {
        let fake = Arc::new(Fake::default());
        fake.world().auctions.push(auction(1, "Brass lamp"));

        let summary = task(&fake).run().await.unwrap();
        assert_eq!(summary.ended_without_bids, 1);

        let world = fake.world();
        assert_eq!(world.calls, vec!["ended:auction_1", "owner:auction_1:en:none"]);
        assert!(world.cart_requests.is_empty());
        assert!(world.auctions[0].ended);
    }

    #[tokio::test]
    async fn test_cart_warnings_leave_auction_open_and_log_error() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions.push(auction(1, "Brass lamp"));
            world.bids.push(bid(1, 1, 10, dec!(40)));
            world.customers.push(customer(10));
            world.cart_warnings = vec![CartWarning::OutOfStock];
        }

        let summary = task(&fake).run().await.unwrap();
        assert_eq!(summary.blocked_by_warnings, 1);

        let world = fake.world();
        assert_eq!(world.calls, vec!["cart:customer_10"]);
        assert!(!world.auctions[0].ended);
        assert!(!world.bids[0].win);
        assert_eq!(
            world.logs,
            vec![(
                LogLevel::Error,
                "EndAuctionTask - Product Brass lamp".to_string(),
                "Out of stock".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_all_warning_texts_are_joined_with_commas() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions.push(auction(1, "Brass lamp"));
            world.bids.push(bid(1, 1, 10, dec!(40)));
            world.customers.push(customer(10));
            world.cart_warnings = vec![CartWarning::CustomerInactive, CartWarning::OutOfStock];
        }

        task(&fake).run().await.unwrap();

        let world = fake.world();
        assert_eq!(world.logs[0].2, "Customer is not active,Out of stock");
    }

    #[tokio::test]
    async fn test_tied_bids_pick_the_first() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions.push(auction(1, "Brass lamp"));
            world.bids = vec![bid(1, 1, 10, dec!(30)), bid(2, 1, 20, dec!(30))];
            world.customers = vec![customer(10), customer(20)];
        }

        task(&fake).run().await.unwrap();

        let world = fake.world();
        assert_eq!(world.calls[0], "cart:customer_10");
        assert_eq!(world.calls[1], "update_bid:bid_1:true");
    }

    #[tokio::test]
    async fn test_second_run_finds_nothing_to_end() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions = vec![auction(1, "Brass lamp"), auction(2, "Oak chair")];
            world.bids.push(bid(1, 2, 10, dec!(12)));
            world.customers.push(customer(10));
        }
        let task = task(&fake);

        task.run().await.unwrap();
        let calls_after_first = fake.world().calls.len();

        let summary = task.run().await.unwrap();
        assert_eq!(summary, EndAuctionsSummary::default());
        assert_eq!(fake.world().calls.len(), calls_after_first);
    }

    #[tokio::test]
    async fn test_future_auctions_are_not_touched() {
        let fake = Arc::new(Fake::default());
        let mut later = auction(1, "Brass lamp");
        later.ends_at = Utc::now() + Duration::hours(1);
        fake.world().auctions.push(later);

        let summary = task(&fake).run().await.unwrap();
        assert_eq!(summary, EndAuctionsSummary::default());
        assert!(fake.world().calls.is_empty());
    }

    #[tokio::test]
    async fn test_missing_bidder_is_an_error() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions.push(auction(1, "Brass lamp"));
            world.bids.push(bid(1, 1, 99, dec!(5)));
        }

        let result = task(&fake).run().await;
        assert_eq!(result, Err(TaskError::CustomerNotFound(CustomerId(99))));
        assert!(!fake.world().auctions[0].ended);
    }

    #[tokio::test]
    async fn test_failure_mid_batch_keeps_earlier_work() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions = vec![auction(1, "Brass lamp"), auction(2, "Oak chair"), auction(3, "Tin drum")];
            world.offline_bids_for = Some(AuctionId(2));
        }

        let result = task(&fake).run().await;
        assert!(matches!(result, Err(TaskError::Auction(AuctionError::ActorCommunicationError(_)))));

        let world = fake.world();
        let ended: Vec<bool> = world.auctions.iter().map(|a| a.ended).collect();
        assert_eq!(ended, vec![true, false, false]);
    }

    #[tokio::test]
    async fn test_failure_inside_win_path_keeps_committed_writes() {
        let fake = Arc::new(Fake::default());
        {
            let mut world = fake.world();
            world.auctions = vec![auction(1, "Brass lamp"), auction(2, "Oak chair")];
            world.bids.push(bid(1, 1, 10, dec!(40)));
            world.customers.push(customer(10));
            world.lost_notice_fails = true;
        }

        let result = task(&fake).run().await;
        assert_eq!(
            result,
            Err(TaskError::Notification(NotificationError::Rejected("mail queue full".into())))
        );

        let world = fake.world();
        assert!(world.bids[0].win);
        assert!(!world.auctions[0].ended);
        assert!(!world.auctions[1].ended);
        assert_eq!(
            world.calls,
            vec![
                "cart:customer_10",
                "update_bid:bid_1:true",
                "owner:auction_1:en:bid_1",
                "win:bid_1:None",
            ]
        );
    }

    #[tokio::test]
    async fn test_execute_reports_success() {
        let fake = Arc::new(Fake::default());
        fake.world().auctions.push(auction(1, "Brass lamp"));
        let task = task(&fake);

        assert_eq!(task.name(), "EndAuctionsTask");
        assert_eq!(task.execute().await, Ok(()));
    }
}
