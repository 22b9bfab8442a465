use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ids::{ItemID, MovieID};

/// Simple enum for library item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaKind {
    /// Movie media kind
    Movie = 0,
    /// Series media kind
    Series = 1,
    /// Season media kind
    Season = 2,
    /// Episode media kind
    Episode = 3,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Series => write!(f, "Series"),
            MediaKind::Season => write!(f, "Season"),
            MediaKind::Episode => write!(f, "Episode"),
        }
    }
}

/// Movie metadata as read from the library index.
///
/// Read-only from the engine's perspective: the engine never creates or
/// deletes movies, it only orders them and inspects their identity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    pub id: MovieID,
    pub name: String,
    /// Library-provided sort title; falls back to `name` when absent.
    pub sort_name: Option<String>,
    /// Release date; falls back to the epoch floor when absent.
    pub premiere_date: Option<DateTime<Utc>>,
}

impl Movie {
    pub fn new(id: MovieID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sort_name: None,
            premiere_date: None,
        }
    }

    /// Ordering key, first component: sort name or plain name.
    ///
    /// The fallback lives here, not at the comparison sites, so every
    /// consumer orders movies the same way.
    pub fn sort_key(&self) -> &str {
        self.sort_name.as_deref().unwrap_or(&self.name)
    }

    /// Ordering key, second component: premiere date or the earliest
    /// representable instant.
    pub fn premiere_or_epoch(&self) -> DateTime<Utc> {
        self.premiere_date.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A library item as reported by the session source or listed as a
/// collection member. Only the `Movie` variant carries full metadata;
/// everything else is opaque to the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaItem {
    Movie(Movie),
    Other { id: ItemID, kind: MediaKind },
}

impl MediaItem {
    /// Raw identity of the underlying item, regardless of kind.
    pub fn item_uuid(&self) -> Uuid {
        match self {
            MediaItem::Movie(movie) => movie.id.to_uuid(),
            MediaItem::Other { id, .. } => id.to_uuid(),
        }
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            MediaItem::Movie(movie) => Some(movie),
            MediaItem::Other { .. } => None,
        }
    }
}
