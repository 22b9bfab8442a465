#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use nextreel_core::{
    AutoQueueError, CollectionRepository, Result, UserDataRepository,
};
use nextreel_model::{
    Collection, CollectionID, MediaItem, Movie, MovieID, UserDataSaveReason,
    UserID, UserItemData,
};

/// In-memory collection index that counts how often it is scanned.
pub struct InMemoryLibrary {
    collections: Vec<Collection>,
    queries: AtomicUsize,
}

impl InMemoryLibrary {
    pub fn new(collections: Vec<Collection>) -> Self {
        Self {
            collections,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CollectionRepository for InMemoryLibrary {
    async fn movie_collections(&self) -> Result<Vec<Collection>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.collections.clone())
    }
}

/// Collection index that is always down, for error-absorption tests.
pub struct FailingLibrary;

#[async_trait]
impl CollectionRepository for FailingLibrary {
    async fn movie_collections(&self) -> Result<Vec<Collection>> {
        Err(AutoQueueError::Library("collection index offline".into()))
    }
}

/// In-memory user-data store tracking reads, saves, and save reasons.
#[derive(Default)]
pub struct InMemoryUserData {
    records: Mutex<HashMap<(Uuid, Uuid), UserItemData>>,
    reads: AtomicUsize,
    saves: Mutex<Vec<(Uuid, Uuid, UserDataSaveReason)>>,
}

impl InMemoryUserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_played(&self, user: UserID, item: MovieID) {
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry((user.to_uuid(), item.to_uuid()))
            .or_default();
        record.played = true;
        record.played_percentage = Some(100.0);
    }

    pub fn record(&self, user: UserID, item: MovieID) -> Option<UserItemData> {
        self.records
            .lock()
            .unwrap()
            .get(&(user.to_uuid(), item.to_uuid()))
            .cloned()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn saved_reasons(&self) -> Vec<UserDataSaveReason> {
        self.saves
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, reason)| *reason)
            .collect()
    }
}

#[async_trait]
impl UserDataRepository for InMemoryUserData {
    async fn get_user_data(
        &self,
        user_id: UserID,
        item: MovieID,
    ) -> Result<UserItemData> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(&(user_id.to_uuid(), item.to_uuid()))
            .cloned()
            .unwrap_or_default())
    }

    async fn save_user_data(
        &self,
        user_id: UserID,
        item: MovieID,
        data: UserItemData,
        reason: UserDataSaveReason,
    ) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert((user_id.to_uuid(), item.to_uuid()), data);
        self.saves.lock().unwrap().push((
            user_id.to_uuid(),
            item.to_uuid(),
            reason,
        ));
        Ok(())
    }
}

pub fn movie(name: &str, sort_name: &str) -> Movie {
    let mut movie = Movie::new(MovieID::new(), name);
    movie.sort_name = Some(sort_name.to_string());
    movie
}

pub fn collection_of(name: &str, movies: &[&Movie]) -> Collection {
    let mut collection = Collection::new(CollectionID::new(), name);
    collection.children = movies
        .iter()
        .map(|m| MediaItem::Movie((*m).clone()))
        .collect();
    collection
}
