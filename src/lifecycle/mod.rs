//! Runtime orchestration and lifecycle management.
//!
//! - [`AuctionSystem`] - starts every actor, wires their dependencies and builds
//!   the [`EndAuctionsTask`](crate::tasks::EndAuctionsTask)
//! - [`setup_tracing`] - initializes the tracing subscriber

pub mod auction_system;
pub mod tracing;

pub use auction_system::*;
pub use tracing::*;
