use uuid::Uuid;

use crate::ids::CollectionID;
use crate::media::{MediaItem, Movie};

/// A movie collection (box set) as returned by the library index.
///
/// Membership is an unordered set of mixed item kinds; ordering over the
/// movie members is always derived via [`Collection::sorted_movies`], never
/// stored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collection {
    pub id: CollectionID,
    pub name: String,
    pub children: Vec<MediaItem>,
}

impl Collection {
    pub fn new(id: CollectionID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Whether any child (of any kind) carries the given identity.
    pub fn contains(&self, item: Uuid) -> bool {
        self.children.iter().any(|child| child.item_uuid() == item)
    }

    /// Movie members only, in stored (arbitrary) order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.children.iter().filter_map(MediaItem::as_movie)
    }

    /// Movie members ordered by `(sort_key, premiere_or_epoch)` ascending.
    ///
    /// This is the canonical "next in series" ordering; both components use
    /// the explicit fallbacks defined on [`Movie`].
    pub fn sorted_movies(&self) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self.movies().collect();
        movies.sort_by(|a, b| {
            a.sort_key()
                .cmp(b.sort_key())
                .then_with(|| a.premiere_or_epoch().cmp(&b.premiere_or_epoch()))
        });
        movies
    }
}
