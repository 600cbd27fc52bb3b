//! Outbox for templated emails.
//!
//! Queued emails are immutable once created; a delivery worker (out of scope
//! here) would drain them.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{CustomerClient, NotificationClient};
use crate::config::MessageSettings;
use crate::framework::{sequential_ids, ResourceActor};
use crate::model::{QueuedEmail, QueuedEmailId};

/// Creates a new queued-email actor and the notification client in front of it.
pub fn new(customers: CustomerClient, settings: MessageSettings) -> (ResourceActor<QueuedEmail>, NotificationClient) {
    let (actor, generic_client) = ResourceActor::new(64, sequential_ids::<QueuedEmailId>());
    (actor, NotificationClient::new(generic_client, customers, settings))
}
