//! Document stores.
//!
//! The cache talks to its backend through [`DocumentStore`], a small
//! document-database surface: find one, insert one, delete many, count.
//! Inserts are insert-if-absent on the record's natural key; a second
//! insert for the same key reports [`InsertOutcome::AlreadyExists`] and
//! leaves the stored record untouched.
//!
//! - [`MemoryStore`] - process-local map
//! - [`FileStore`] - one JSON document per key in a directory
//! - [`AnyStore`] - runtime choice between the two, from configuration

use crate::{CacheError, CacheRecord, CacheResult, RecordQuery, StoreConfig};
use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, trace};

/// Result of an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored.
    Inserted,
    /// A record with this key was already present; nothing changed.
    AlreadyExists,
}

/// Async document store keyed by [`crate::CacheKey`].
pub trait DocumentStore: Send + Sync {
    /// First record matching `query`.
    fn find_one(&self, query: &RecordQuery) -> impl Future<Output = CacheResult<Option<CacheRecord>>> + Send;

    /// Stores `record` unless its key is taken.
    fn insert_one(&self, record: CacheRecord) -> impl Future<Output = CacheResult<InsertOutcome>> + Send;

    /// Removes every matching record; returns how many.
    fn delete_many(&self, query: &RecordQuery) -> impl Future<Output = CacheResult<usize>> + Send;

    /// Counts matching records.
    fn count(&self, query: &RecordQuery) -> impl Future<Output = CacheResult<usize>> + Send;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, CacheRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    async fn find_one(&self, query: &RecordQuery) -> CacheResult<Option<CacheRecord>> {
        let records = self.records.read().await;
        if let Some(key) = query.as_key() {
            return Ok(records.get(&key.id()).cloned());
        }
        Ok(records.values().find(|r| query.matches(&r.key)).cloned())
    }

    async fn insert_one(&self, record: CacheRecord) -> CacheResult<InsertOutcome> {
        let mut records = self.records.write().await;
        let id = record.key.id();
        if records.contains_key(&id) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        records.insert(id, record);
        Ok(InsertOutcome::Inserted)
    }

    async fn delete_many(&self, query: &RecordQuery) -> CacheResult<usize> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| !query.matches(&r.key));
        Ok(before - records.len())
    }

    async fn count(&self, query: &RecordQuery) -> CacheResult<usize> {
        let records = self.records.read().await;
        Ok(records.values().filter(|r| query.matches(&r.key)).count())
    }
}

const RECORD_EXT: &str = "json";

/// Shared by every [`FileStore`] in the process so temp names never collide.
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Directory of JSON documents, one file per key.
///
/// Inserts write a private temp file and hard-link it to the record's
/// name. Linking fails if the name exists, which makes the insert atomic
/// across threads and processes sharing the directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// [`CacheError::StoreUnavailable`] if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> CacheResult<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| CacheError::store("open", e))?;
        debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{RECORD_EXT}"))
    }

    fn tmp_path(&self, id: &str) -> PathBuf {
        let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!(".{id}.{}.{n}.tmp", std::process::id()))
    }

    async fn read_record(&self, path: &Path) -> CacheResult<Option<CacheRecord>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::store("read", e)),
        };
        let record = serde_json::from_slice(&bytes).map_err(|e| CacheError::corrupt(path.display().to_string(), e))?;
        Ok(Some(record))
    }

    /// Every stored record with its path.
    async fn scan(&self) -> CacheResult<Vec<(PathBuf, CacheRecord)>> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| CacheError::store("scan", e))?;
        let mut out = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| CacheError::store("scan", e))? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != RECORD_EXT) {
                continue;
            }
            if let Some(record) = self.read_record(&path).await? {
                out.push((path, record));
            }
        }
        Ok(out)
    }
}

impl DocumentStore for FileStore {
    async fn find_one(&self, query: &RecordQuery) -> CacheResult<Option<CacheRecord>> {
        if let Some(key) = query.as_key() {
            return self.read_record(&self.record_path(&key.id())).await;
        }
        Ok(self
            .scan()
            .await?
            .into_iter()
            .map(|(_, r)| r)
            .find(|r| query.matches(&r.key)))
    }

    async fn insert_one(&self, record: CacheRecord) -> CacheResult<InsertOutcome> {
        let id = record.key.id();
        let json = serde_json::to_vec(&record).map_err(|e| CacheError::corrupt(id.clone(), e))?;

        let tmp = self.tmp_path(&id);
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| CacheError::store("insert", e))?;
        let linked = tokio::fs::hard_link(&tmp, self.record_path(&id)).await;
        // The temp name is private; failing to remove it only leaves litter.
        if let Err(e) = tokio::fs::remove_file(&tmp).await {
            trace!(path = %tmp.display(), error = %e, "Temp file not removed");
        }

        match linked {
            Ok(()) => Ok(InsertOutcome::Inserted),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(InsertOutcome::AlreadyExists),
            Err(e) => Err(CacheError::store("insert", e)),
        }
    }

    async fn delete_many(&self, query: &RecordQuery) -> CacheResult<usize> {
        let mut removed = 0;
        for (path, record) in self.scan().await? {
            if !query.matches(&record.key) {
                continue;
            }
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(CacheError::store("delete", e)),
            }
        }
        Ok(removed)
    }

    async fn count(&self, query: &RecordQuery) -> CacheResult<usize> {
        Ok(self.scan().await?.iter().filter(|(_, r)| query.matches(&r.key)).count())
    }
}

/// Store selected at runtime.
#[derive(Debug)]
pub enum AnyStore {
    /// In-memory.
    Memory(MemoryStore),
    /// On disk.
    File(FileStore),
}

impl AnyStore {
    /// Builds the store described by `config`.
    ///
    /// # Errors
    ///
    /// [`CacheError::StoreUnavailable`] if a file store cannot be opened.
    pub async fn from_config(config: &StoreConfig) -> CacheResult<Self> {
        Ok(match config {
            StoreConfig::Memory => Self::Memory(MemoryStore::new()),
            StoreConfig::File { path } => Self::File(FileStore::open(path).await?),
        })
    }
}

impl DocumentStore for AnyStore {
    async fn find_one(&self, query: &RecordQuery) -> CacheResult<Option<CacheRecord>> {
        match self {
            Self::Memory(s) => s.find_one(query).await,
            Self::File(s) => s.find_one(query).await,
        }
    }

    async fn insert_one(&self, record: CacheRecord) -> CacheResult<InsertOutcome> {
        match self {
            Self::Memory(s) => s.insert_one(record).await,
            Self::File(s) => s.insert_one(record).await,
        }
    }

    async fn delete_many(&self, query: &RecordQuery) -> CacheResult<usize> {
        match self {
            Self::Memory(s) => s.delete_many(query).await,
            Self::File(s) => s.delete_many(query).await,
        }
    }

    async fn count(&self, query: &RecordQuery) -> CacheResult<usize> {
        match self {
            Self::Memory(s) => s.count(query).await,
            Self::File(s) => s.count(query).await,
        }
    }
}
