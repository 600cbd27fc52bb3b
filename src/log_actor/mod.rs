//! Persistent activity log.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::LogClient;
use crate::framework::{sequential_ids, ResourceActor};
use crate::model::{LogEntry, LogEntryId};

/// Creates a new log actor and its client.
pub fn new() -> (ResourceActor<LogEntry>, LogClient) {
    let (actor, generic_client) = ResourceActor::new(64, sequential_ids::<LogEntryId>());
    (actor, LogClient::new(generic_client))
}
