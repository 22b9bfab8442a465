//! Core data model definitions shared across nextreel crates.
#![allow(missing_docs)]

pub mod collection;
pub mod error;
pub mod ids;
pub mod media;
pub mod watch;

// Intentionally curated re-exports for downstream consumers.
pub use collection::Collection;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CollectionID, ItemID, MovieID, UserID};
pub use media::{MediaItem, MediaKind, Movie};
pub use watch::{
    QUEUED_POSITION_TICKS, UserDataSaveReason, UserItemData,
};
