//! Playback-stop notifications and the in-process bus carrying them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use nextreel_model::{MediaItem, UserID};

use crate::error::Result;

/// Notification that a playback session ended.
///
/// Emitted by the host session layer once per stop; the engine consumes it
/// exactly once and never mutates it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaybackStopped {
    /// The item that was playing. Any library kind; the gate keeps movies.
    pub item: MediaItem,
    pub user_id: UserID,
    pub session_id: String,
    /// How much of the item the user got through, 0-100. `None` when the
    /// session layer could not tell.
    pub played_percentage: Option<f64>,
}

impl PlaybackStopped {
    /// Watched percentage with the unknown case pinned to zero.
    pub fn watched_percentage(&self) -> f64 {
        self.played_percentage.unwrap_or(0.0)
    }
}

#[async_trait]
pub trait PlaybackEventPublisher: Send + Sync {
    async fn publish(&self, event: PlaybackStopped) -> Result<()>;
}

/// Lightweight in-process event bus standing in for the host session
/// manager. Fans playback stops out to however many handlers subscribed;
/// publishing with no live subscriber is not an error.
#[derive(Debug)]
pub struct PlaybackEventBus {
    sender: broadcast::Sender<PlaybackStopped>,
}

impl PlaybackEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackStopped> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl PlaybackEventPublisher for PlaybackEventBus {
    async fn publish(&self, event: PlaybackStopped) -> Result<()> {
        let _ = self.sender.send(event);
        Ok(())
    }
}
