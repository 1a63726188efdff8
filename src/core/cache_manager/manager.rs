//! Label cache implementation

use super::types::{AtomicCacheStats, CacheEntry, CacheStats};
use crate::utils::error::{EngineError, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use tracing::{debug, info, warn};

/// Key -> label cache with optional file persistence.
///
/// Last writer wins for a key. Durable writes only happen through [`LabelCache::save`].
#[derive(Debug)]
pub struct LabelCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    path: Option<PathBuf>,
    /// Serializes concurrent saves and clears of the backing file
    io_lock: tokio::sync::Mutex<()>,
    stats: AtomicCacheStats,
}

impl LabelCache {
    /// A cache that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::with_entries(None, HashMap::new())
    }

    /// Open a file-backed cache, loading whatever the file holds.
    ///
    /// A missing or unreadable store yields an empty cache.
    pub async fn open<P: AsRef<Path>>(path: P) -> Self {
        let cache = Self::with_entries(Some(path.as_ref().to_path_buf()), HashMap::new());
        cache.load().await;
        cache
    }

    fn with_entries(path: Option<PathBuf>, entries: HashMap<String, CacheEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            path,
            io_lock: tokio::sync::Mutex::new(()),
            stats: AtomicCacheStats::default(),
        }
    }

    /// Location of the durable store, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the in-memory entries with the durable store's content.
    ///
    /// Returns the number of entries loaded. Failures are logged and leave an empty cache.
    pub async fn load(&self) -> usize {
        let Some(path) = self.path.as_deref() else {
            return 0;
        };

        let loaded = match Self::read_store(path).await {
            Ok(entries) => entries,
            Err(e) if e.is_io() && !path.exists() => {
                debug!("No label cache at {:?}, starting empty", path);
                HashMap::new()
            }
            Err(e) => {
                warn!("Failed to load label cache from {:?}: {}", path, e);
                HashMap::new()
            }
        };

        let count = loaded.len();
        *self.entries.write() = loaded;
        info!("Label cache loaded with {} entries", count);
        count
    }

    async fn read_store(path: &Path) -> Result<HashMap<String, CacheEntry>> {
        let content = tokio::fs::read_to_string(path).await?;
        let entries = serde_json::from_str(&content)?;
        Ok(entries)
    }

    /// Cached label for a key. A stored empty label counts as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        let label = self
            .entries
            .read()
            .get(key)
            .filter(|entry| !entry.label.is_empty())
            .map(|entry| entry.label.clone());

        let counter = if label.is_some() {
            &self.stats.hits
        } else {
            &self.stats.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        label
    }

    /// Insert or overwrite the label for a key
    pub fn set(&self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        self.entries.write().insert(key, CacheEntry::new(label));
        self.stats.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Get cache statistics (lock-free snapshot)
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Write the current entries to the durable store.
    ///
    /// In-memory state is kept whether or not the write succeeds.
    pub async fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let _guard = self.io_lock.lock().await;

        // Sorted keys keep the file diffable
        let snapshot: BTreeMap<String, CacheEntry> = self
            .entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let result = Self::write_store(path, &snapshot).await;
        match &result {
            Ok(()) => debug!("Saved {} cache entries to {:?}", snapshot.len(), path),
            Err(e) => warn!("Failed to save label cache to {:?}: {}", path, e),
        }
        result
    }

    async fn write_store(path: &Path, snapshot: &BTreeMap<String, CacheEntry>) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, path).await.map_err(|e| {
            EngineError::cache(format!("Failed to move {:?} into place: {}", tmp, e))
        })?;
        Ok(())
    }

    /// Drop every entry and delete the durable store
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.io_lock.lock().await;

        let removed = {
            let mut entries = self.entries.write();
            let count = entries.len();
            entries.clear();
            count
        };
        self.stats.reset();

        if let Some(path) = self.path.as_deref() {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(EngineError::cache(format!(
                        "Failed to remove {:?}: {}",
                        path, e
                    )));
                }
            }
        }

        info!("Label cache cleared ({} entries removed)", removed);
        Ok(())
    }
}
