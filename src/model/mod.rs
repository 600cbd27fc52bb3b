//! Pure data structures managed by the actors.
//!
//! Each entity implements [`ActorEntity`](crate::framework::ActorEntity) in its
//! `*_actor` module; this module only holds the data and the DTOs.

/// Declares a counter-backed, type-safe identifier that displays as `prefix_n`.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod auction;
pub mod bid;
pub mod customer;
pub mod log_entry;
pub mod notification;

pub use auction::*;
pub use bid::*;
pub use customer::*;
pub use log_entry::*;
pub use notification::*;

/// Identifier of the store a bid or cart line belongs to.
pub type StoreId = String;

/// Identifier of a language used to pick message templates.
pub type LanguageId = String;
