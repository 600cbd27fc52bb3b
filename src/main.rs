//! Demo: seeds a small catalog with three expired auctions and runs one
//! end-auctions pass.
//!
//! - "Brass lamp" has no bids and expires
//! - "Oak chair" is won by the higher of two bids
//! - "Tin drum" is out of stock, so the win is blocked and logged

use chrono::{Duration, Utc};
use end_auctions::clients::ActorClient;
use end_auctions::config::AppConfig;
use end_auctions::lifecycle::{setup_tracing, AuctionSystem};
use end_auctions::model::{AuctionCreate, BidCreate, CustomerCreate, ShoppingCartType};
use end_auctions::tasks::RunOutcome;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting end-auctions demo");

    let system = AuctionSystem::new(&config);

    let span = tracing::info_span!("seeding");
    let bidders = async {
        let ended_at = Utc::now() - Duration::minutes(1);
        let store_id = "store_1".to_string();

        let auction = |name: &str, stock_quantity: u32| AuctionCreate {
            name: name.to_string(),
            store_id: store_id.clone(),
            ends_at: ended_at,
            published: true,
            stock_quantity,
        };
        system
            .auction_client
            .create_auction(auction("Brass lamp", 1))
            .await
            .map_err(|e| e.to_string())?;
        let chair = system
            .auction_client
            .create_auction(auction("Oak chair", 1))
            .await
            .map_err(|e| e.to_string())?;
        let drum = system
            .auction_client
            .create_auction(auction("Tin drum", 0))
            .await
            .map_err(|e| e.to_string())?;

        let alice = system
            .customer_client
            .register(CustomerCreate {
                email: "alice@example.com".to_string(),
                username: "alice".to_string(),
                language_id: Some("en".to_string()),
            })
            .await
            .map_err(|e| e.to_string())?;
        let bob = system
            .customer_client
            .register(CustomerCreate {
                email: "bob@example.com".to_string(),
                username: "bob".to_string(),
                language_id: None,
            })
            .await
            .map_err(|e| e.to_string())?;

        for (auction_id, customer_id, amount) in [
            (chair, alice, Decimal::new(4500, 2)),
            (chair, bob, Decimal::new(5250, 2)),
            (drum, alice, Decimal::new(1200, 2)),
        ] {
            system
                .bid_client
                .place_bid(BidCreate {
                    auction_id,
                    customer_id,
                    store_id: store_id.clone(),
                    amount,
                })
                .await
                .map_err(|e| e.to_string())?;
        }
        info!("Catalog seeded");
        Ok::<_, String>([alice, bob])
    }
    .instrument(span)
    .await?;

    let scheduler = system.scheduler();
    match scheduler.run_once().await {
        RunOutcome::Completed => info!("End-auctions pass completed"),
        RunOutcome::Failed(e) => error!(error = %e, "End-auctions pass failed"),
        RunOutcome::Skipped => info!("End-auctions pass skipped"),
    }
    drop(scheduler);

    let emails = system
        .notification_client
        .queued_emails()
        .await
        .map_err(|e| e.to_string())?;
    for email in &emails {
        info!(to = %email.to, template = %email.template, subject = %email.subject, "Outbox");
    }
    for customer_id in bidders {
        let Some(customer) = system.customer_client.get(customer_id).await.map_err(|e| e.to_string())? else {
            continue;
        };
        for line in customer.cart_items(ShoppingCartType::Auctions, "store_1") {
            info!(customer = %customer.username, product_id = %line.product_id, price = %line.customer_entered_price, "Won auction in cart");
        }
    }
    let entries = system.log_client.entries().await.map_err(|e| e.to_string())?;
    for entry in &entries {
        info!(level = %entry.level, short = %entry.short_message, full = %entry.full_message, "Activity log");
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
