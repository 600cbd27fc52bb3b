//! # Customer Actor
//!
//! Customers own their shopping-cart lines. Adding a line is the
//! [`CustomerAction::AddToCart`] action, which validates the request against
//! the auction catalog and reserves stock before the line is stored.
//!
//! The catalog is the actor's injected context:
//!
//! ```rust,ignore
//! let (customer_actor, customer_client) = customer_actor::new();
//! tokio::spawn(customer_actor.run(auction_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::{sequential_ids, ResourceActor};
use crate::model::{Customer, CustomerId};

/// Creates a new Customer actor and its client.
pub fn new() -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(32, sequential_ids::<CustomerId>());
    (actor, CustomerClient::new(generic_client))
}
