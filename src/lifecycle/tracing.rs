//! # Observability
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per auction outcome and queued email
//! RUST_LOG=debug cargo run    # plus every actor request with its payload
//! ```
//!
//! A run at `info` level looks like:
//!
//! ```text
//! INFO Task started task="EndAuctionsTask"
//! INFO run_at:end_auction: Auction ended without bids auction_id=auction_1
//! INFO run_at:end_auction:send_auction_ended_store_owner_notification: Queued email email_id=email_1 template=AuctionEnded.StoreOwnerNotification
//! ERROR run_at:end_auction:insert: EndAuctionTask - Product Oak chair full_message="Out of stock"
//! INFO End auctions run finished ended_without_bids=1 won=1 blocked_by_warnings=1
//! ```
//!
//! Activity-log entries written by the tasks are echoed here at the matching
//! level, so cart warnings show up as `ERROR` lines.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
