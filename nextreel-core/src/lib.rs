//! Continue-watching automation for movie collections.
//!
//! When a user finishes a movie that belongs to a multi-movie collection,
//! this engine locates the next unwatched movie in that collection and marks
//! it as started so it surfaces in the user's continue-watching list. It is
//! a reactive decision engine driven by playback-stop events; it plays no
//! media and owns no storage of its own.
//!
//! ## Pipeline
//!
//! 1. [`gate::evaluate`] filters playback-stop events: non-movies, disabled
//!    configuration, and under-watched items are dropped.
//! 2. [`AutoQueueService::find_next`] scans movie collections for the
//!    finished item and inspects the immediate successor under the derived
//!    `(sort title, premiere date)` ordering.
//! 3. [`AutoQueueService::queue`] commits a "just started" marker to the
//!    user-data store.
//!
//! The host's session, library, and user-data subsystems are reached through
//! the ports in [`ports`]; wiring happens in [`handler`].

pub mod config;
pub mod error;
pub mod events;
pub mod gate;
pub mod handler;
pub mod ports;
pub mod selector;

pub use config::{AutoQueueConfig, ConfigSource, ConfigWatch};
pub use error::{AutoQueueError, Result};
pub use events::{PlaybackEventBus, PlaybackEventPublisher, PlaybackStopped};
pub use gate::{DropReason, GateOutcome};
pub use handler::{HandlerGuard, PlaybackEventHandler};
pub use ports::{CollectionRepository, UserDataRepository};
pub use selector::AutoQueueService;
