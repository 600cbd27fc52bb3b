//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client also implements the collaborator trait(s) from
//! [`crate::tasks::collaborators`] that it backs.

pub mod actor_client;
pub mod auction_client;
pub mod bid_client;
pub mod customer_client;
pub mod log_client;
pub mod notification_client;

pub use actor_client::*;
pub use auction_client::*;
pub use bid_client::*;
pub use customer_client::*;
pub use log_client::*;
pub use notification_client::*;
