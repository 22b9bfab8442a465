//! Ports onto the host's library and user-data subsystems.
//!
//! The engine never talks to storage directly; the host wires concrete
//! adapters behind these traits. Tests use in-memory implementations.

use async_trait::async_trait;

use nextreel_model::{
    Collection, MovieID, UserDataSaveReason, UserID, UserItemData,
};

use crate::error::Result;

/// Read access to the library's collection index.
///
/// No reverse index is assumed: the engine enumerates every movie collection
/// and filters by membership itself.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn movie_collections(&self) -> Result<Vec<Collection>>;
}

/// Read/write access to per-user watch state.
#[async_trait]
pub trait UserDataRepository: Send + Sync {
    /// Watch state for one `(user, item)` pair. Items the user never touched
    /// yield a default record, not an error.
    async fn get_user_data(
        &self,
        user_id: UserID,
        item: MovieID,
    ) -> Result<UserItemData>;

    /// Persist watch state, tagged with the reason for the write.
    async fn save_user_data(
        &self,
        user_id: UserID,
        item: MovieID,
        data: UserItemData,
        reason: UserDataSaveReason,
    ) -> Result<()>;
}
