//! # End Auctions
//!
//! Back-office service that closes out expired auctions: it picks the winning
//! bid, turns it into a cart line for the bidder, notifies the store owner and
//! the bidder, and records anything that blocked the win in the activity log.
//!
//! State lives in resource-oriented actors (one Tokio task per resource, each
//! draining its own mailbox). The end-auctions task only sees those actors
//! through the async traits in [`tasks::collaborators`], so it can be driven
//! by fakes in tests.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) message loop, the
//! [`ActorEntity`](framework::ActorEntity) trait and the
//! [`MockClient`](framework::mock::MockClient) test harness.
//!
//! ### 2. The Data ([`model`])
//! Auctions, bids, customers with their cart lines, queued emails and
//! activity-log entries.
//!
//! ### 3. The Actors ([`auction_actor`], [`bid_actor`], [`customer_actor`], [`notification_actor`], [`log_actor`])
//! `ActorEntity` implementations plus one error type per actor. The customer
//! actor validates cart lines against the auction actor, its injected context.
//!
//! ### 4. The Interface ([`clients`])
//! Typed clients over each actor. They implement the collaborator traits.
//!
//! ### 5. The Work ([`tasks`])
//! [`EndAuctionsTask`](tasks::EndAuctionsTask) and the single-flight
//! [`TaskScheduler`](tasks::TaskScheduler).
//!
//! ### 6. The Orchestrator ([`lifecycle`]) and [`config`]
//! [`AuctionSystem`](lifecycle::AuctionSystem) starts and wires the actors;
//! [`AppConfig`](config::AppConfig) reads TOML and `END_AUCTIONS_*` variables.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod auction_actor;
pub mod bid_actor;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod log_actor;
pub mod model;
pub mod notification_actor;
pub mod tasks;
