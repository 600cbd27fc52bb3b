//! # Scheduled Tasks
//!
//! - [`collaborators`] - the async traits the tasks are written against
//! - [`end_auctions`] - [`EndAuctionsTask`], which closes out expired auctions
//! - [`scheduler`] - [`TaskScheduler`], the single-flight recurring runner
//!
//! Tasks never talk to actors directly. [`AuctionSystem`](crate::lifecycle::AuctionSystem)
//! hands them the actor clients as `Arc<dyn Trait>` collaborators.

pub mod collaborators;
pub mod end_auctions;
pub mod error;
pub mod scheduler;

pub use collaborators::*;
pub use end_auctions::*;
pub use error::*;
pub use scheduler::*;

use async_trait::async_trait;

/// A unit of work the [`TaskScheduler`] can run on an interval.
#[async_trait]
pub trait ScheduleTask: Send + Sync {
    fn name(&self) -> &str;

    async fn execute(&self) -> Result<(), TaskError>;
}
