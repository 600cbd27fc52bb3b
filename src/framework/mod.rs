//! Generic actor framework for the in-memory collaborators.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns entities of one type
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`FrameworkError`] - Transport-level errors
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Returns an id generator yielding 1, 2, 3, ... converted into `I`.
pub fn sequential_ids<I: From<u32>>() -> impl Fn() -> I + Send + Sync + 'static {
    let counter = Arc::new(AtomicU32::new(1));
    move || I::from(counter.fetch_add(1, Ordering::SeqCst))
}
