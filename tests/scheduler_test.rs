use chrono::{Duration, Utc};
use end_auctions::clients::ActorClient;
use end_auctions::config::AppConfig;
use end_auctions::lifecycle::AuctionSystem;
use end_auctions::model::AuctionCreate;
use end_auctions::tasks::RunOutcome;
use tokio::sync::watch;

#[tokio::test]
async fn test_scheduler_runs_end_auctions_task() {
    let system = AuctionSystem::new(&AppConfig::default());
    let lamp = system
        .auction_client
        .create_auction(AuctionCreate {
            name: "Brass lamp".into(),
            store_id: "store_1".into(),
            ends_at: Utc::now() - Duration::seconds(1),
            published: true,
            stock_quantity: 1,
        })
        .await
        .unwrap();

    let scheduler = system.scheduler();
    assert_eq!(scheduler.run_once().await, RunOutcome::Completed);

    let state = scheduler.state().await;
    assert!(state.last_success.is_some());
    assert!(state.last_error.is_none());
    assert!(system.auction_client.get(lamp).await.unwrap().unwrap().ended);

    drop(scheduler);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_recurring_scheduler_stops_on_signal() {
    let system = AuctionSystem::new(&AppConfig::default());
    system
        .auction_client
        .create_auction(AuctionCreate {
            name: "Brass lamp".into(),
            store_id: "store_1".into(),
            ends_at: Utc::now() - Duration::seconds(1),
            published: true,
            stock_quantity: 1,
        })
        .await
        .unwrap();

    let (stop, shutdown) = watch::channel(false);
    let scheduler = system.scheduler();
    let handle = scheduler.clone().spawn(shutdown);

    // The first tick fires immediately
    for _ in 0..50 {
        if scheduler.state().await.last_success.is_some() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert!(scheduler.state().await.last_success.is_some());

    stop.send(true).unwrap();
    handle.await.unwrap();
    drop(scheduler);

    let emails = system.notification_client.queued_emails().await.unwrap();
    assert_eq!(emails.len(), 1);

    system.shutdown().await.expect("Shutdown failed");
}
