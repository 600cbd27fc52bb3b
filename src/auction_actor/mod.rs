//! # Auction Actor
//!
//! Owns the auction catalog: end times, the `ended` flag, publication state and
//! the stock a winner's cart line draws from.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Auction`]
//! - [`error`] - [`AuctionError`]
//! - [`actions`] - [`AuctionAction`] / [`AuctionActionResult`] for stock checks and reservations
//! - [`new()`] - Factory that creates the actor and its [`AuctionClient`]
//!
//! The client also fronts the bid actor, so one handle covers every
//! auction-store operation the end-auctions task needs.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{AuctionClient, BidClient};
use crate::framework::{sequential_ids, ResourceActor};
use crate::model::{Auction, AuctionId};

/// Creates a new Auction actor and its client.
pub fn new(bids: BidClient) -> (ResourceActor<Auction>, AuctionClient) {
    let (actor, generic_client) = ResourceActor::new(32, sequential_ids::<AuctionId>());
    (actor, AuctionClient::new(generic_client, bids))
}
