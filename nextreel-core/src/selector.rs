//! Next-item selector & queuer: the only part of the engine that decides
//! and commits anything.
//!
//! Selection is strict "next in series": per collection, only the immediate
//! successor of the finished movie is considered. An already-watched
//! successor means the collection yields nothing, even if later members are
//! unwatched.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use nextreel_model::{Movie, MovieID, UserDataSaveReason, UserID};

use crate::error::Result;
use crate::ports::{CollectionRepository, UserDataRepository};

/// Finds and queues the next unwatched movie after a finished one.
#[derive(Clone)]
pub struct AutoQueueService {
    collections: Arc<dyn CollectionRepository>,
    user_data: Arc<dyn UserDataRepository>,
}

impl fmt::Debug for AutoQueueService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoQueueService").finish_non_exhaustive()
    }
}

impl AutoQueueService {
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        user_data: Arc<dyn UserDataRepository>,
    ) -> Self {
        Self {
            collections,
            user_data,
        }
    }

    /// Full pipeline behind the gate: find the successor, commit the marker.
    ///
    /// Returns the queued movie's ID so the caller can log it, or `None`
    /// when no collection yields an unwatched successor.
    pub async fn find_and_queue_next(
        &self,
        current: &Movie,
        user_id: UserID,
    ) -> Result<Option<MovieID>> {
        let Some(next) = self.find_next(current, user_id).await? else {
            return Ok(None);
        };
        self.queue(&next, user_id).await?;
        Ok(Some(next.id))
    }

    /// Locate the next unwatched movie after `current` across all of its
    /// collections.
    ///
    /// Collections are scanned in the order the library returns them; the
    /// first one whose immediate successor is unwatched wins and scanning
    /// stops there.
    pub async fn find_next(
        &self,
        current: &Movie,
        user_id: UserID,
    ) -> Result<Option<Movie>> {
        let collections = self.collections.movie_collections().await?;

        let current_uuid = current.id.to_uuid();
        for collection in
            collections.iter().filter(|c| c.contains(current_uuid))
        {
            debug!(collection = %collection.name, "checking collection");

            let ordered = collection.sorted_movies();
            let Some(position) =
                ordered.iter().position(|m| m.id == current.id)
            else {
                // Member by raw identity but not as a movie; nothing to walk.
                continue;
            };
            let Some(successor) = ordered.get(position + 1) else {
                continue;
            };

            let user_data =
                self.user_data.get_user_data(user_id, successor.id).await?;
            if !user_data.played {
                info!(
                    collection = %collection.name,
                    next = %successor.name,
                    "found next movie in collection"
                );
                return Ok(Some((*successor).clone()));
            }
        }

        debug!(
            movie = %current.name,
            "no next unwatched movie found in any collection"
        );
        Ok(None)
    }

    /// Commit the "started" marker: sentinel position plus a fresh
    /// timestamp, saved with a reason tag that marks it system-driven.
    ///
    /// The sole state mutation in the engine. Read-then-write without a
    /// transaction; concurrent commits for the same pair overwrite each
    /// other with equivalent data.
    pub async fn queue(&self, next: &Movie, user_id: UserID) -> Result<()> {
        let mut user_data =
            self.user_data.get_user_data(user_id, next.id).await?;
        user_data.mark_queued(Utc::now());
        self.user_data
            .save_user_data(
                user_id,
                next.id,
                user_data,
                UserDataSaveReason::UpdateUserData,
            )
            .await?;

        info!(
            movie = %next.name,
            user = %user_id,
            "added movie to continue watching"
        );
        Ok(())
    }
}
