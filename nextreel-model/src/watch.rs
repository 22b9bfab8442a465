use chrono::{DateTime, Utc};

/// Sentinel playback position representing "just started, zero real
/// progress". One tick is enough to surface an item in continue-watching
/// without overwriting genuine resume points with anything meaningful.
pub const QUEUED_POSITION_TICKS: i64 = 1;

/// Why a user-data save happened. Lets downstream auditing tell genuine
/// playback progress apart from system-driven updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UserDataSaveReason {
    PlaybackProgress,
    PlaybackFinished,
    UpdateUserData,
}

/// Per-user watch state for a single library item.
///
/// Keyed by `(UserID, MovieID)` in the user-data store. The engine mutates
/// this only through [`UserItemData::mark_queued`]; everything else belongs
/// to the host.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserItemData {
    /// Fraction of the item watched, 0-100. Unknown for never-touched items.
    pub played_percentage: Option<f64>,
    /// Whether the item counts as fully watched.
    pub played: bool,
    /// Resume position in ticks.
    pub playback_position_ticks: i64,
    pub last_played: Option<DateTime<Utc>>,
}

impl UserItemData {
    /// Stamp this record as "started" so it surfaces in continue-watching.
    ///
    /// Idempotent: applying it twice yields the same position sentinel and
    /// a refreshed timestamp.
    pub fn mark_queued(&mut self, at: DateTime<Utc>) {
        self.playback_position_ticks = QUEUED_POSITION_TICKS;
        self.last_played = Some(at);
    }
}
