//! Compute-once record cache.

use crate::{Artifact, CacheError, CacheKey, CacheRecord, CacheResult, DocumentStore, InsertOutcome, RecordQuery};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// Cache over a [`DocumentStore`].
///
/// [`GeometryCache::get_or_create`] computes a missing record at most once
/// per process: concurrent callers for the same key queue on a per-key
/// guard and re-check the store once they hold it. Across processes the
/// store's insert-if-absent decides, and the loser adopts the stored
/// record, so every caller ends up with the same data.
#[derive(Debug)]
pub struct GeometryCache<S> {
    store: S,
    in_flight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<S: DocumentStore> GeometryCache<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored record for `key`, if any.
    ///
    /// # Errors
    ///
    /// Store failures.
    pub async fn get(&self, key: &CacheKey) -> CacheResult<Option<CacheRecord>> {
        self.store.find_one(&RecordQuery::exact(key)).await
    }

    /// Returns the record for `key`, computing and storing it on a miss.
    ///
    /// # Errors
    ///
    /// Store failures and whatever `compute` returns. A failed computation
    /// stores nothing.
    pub async fn get_or_create<F, Fut>(&self, key: CacheKey, compute: F) -> CacheResult<CacheRecord>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CacheResult<Artifact>>,
    {
        let key = key.normalized();
        if let Some(hit) = self.get(&key).await? {
            trace!(key = %key, "Cache hit");
            return Ok(hit);
        }

        let id = key.id();
        let guard = self.guard(&id);
        let result = {
            let _held = guard.lock().await;
            self.create(key, compute).await
        };
        drop(guard);
        self.release(&id);
        result
    }

    async fn create<F, Fut>(&self, key: CacheKey, compute: F) -> CacheResult<CacheRecord>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = CacheResult<Artifact>>,
    {
        // Another caller may have finished while we waited.
        if let Some(hit) = self.get(&key).await? {
            trace!(key = %key, "Cache hit after wait");
            return Ok(hit);
        }

        debug!(key = %key, "Cache miss, computing");
        let record = CacheRecord::new(key, compute().await?);
        match self.store.insert_one(record.clone()).await? {
            InsertOutcome::Inserted => Ok(record),
            InsertOutcome::AlreadyExists => {
                debug!(key = %key, "Lost insert race, adopting stored record");
                self.get(&key)
                    .await?
                    .ok_or_else(|| CacheError::corrupt(key.id(), "vanished after duplicate insert"))
            }
        }
    }

    fn guard(&self, id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(map.entry(id.to_string()).or_default())
    }

    /// Drops the guard entry once no caller holds it.
    fn release(&self, id: &str) {
        let mut map = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if map.get(id).is_some_and(|g| Arc::strong_count(g) == 1) {
            map.remove(id);
        }
    }

    /// Number of keys currently being computed or waited on.
    pub fn in_flight(&self) -> usize {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
