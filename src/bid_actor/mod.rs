//! Bid-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BidClient;
use crate::framework::{sequential_ids, ResourceActor};
use crate::model::{Bid, BidId};

/// Creates a new Bid actor and its client.
pub fn new() -> (ResourceActor<Bid>, BidClient) {
    let (actor, generic_client) = ResourceActor::new(32, sequential_ids::<BidId>());
    (actor, BidClient::new(generic_client))
}
