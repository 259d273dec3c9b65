//! Aggregation result caching using Moka.
//!
//! Keyed on the identity and version of the entry list, so a dashboard that
//! re-renders without new data does not regroup the same rows.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use cashflow_shared::config::CacheConfig;
use cashflow_shared::types::UserId;
use moka::sync::Cache;
use tracing::debug;

use super::aggregate::aggregate;
use super::types::{CategoryMatrix, Entry};

/// Identity of a fetched entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetKey {
    /// Owner of the entries.
    pub user_id: UserId,
    /// Year the entries were filtered by.
    pub year: i32,
    /// Version of the list, bumped by the data layer on change.
    pub version: u64,
}

impl DatasetKey {
    /// Creates a key with an explicit version.
    #[must_use]
    pub const fn new(user_id: UserId, year: i32, version: u64) -> Self {
        Self {
            user_id,
            year,
            version,
        }
    }

    /// Creates a key whose version is a content hash of the entries.
    ///
    /// Stable for the life of the process only.
    #[must_use]
    pub fn from_entries(user_id: UserId, year: i32, entries: &[Entry]) -> Self {
        let mut hasher = DefaultHasher::new();
        entries.hash(&mut hasher);
        Self::new(user_id, year, hasher.finish())
    }
}

/// Cache for aggregation results.
///
/// Thread-safe and cheap to clone; clones share the same storage.
#[derive(Clone)]
pub struct AggregationCache {
    cache: Cache<DatasetKey, Arc<CategoryMatrix>>,
}

impl AggregationCache {
    /// Creates a cache with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    /// Creates a cache with the given capacity and time-to-live.
    #[must_use]
    pub fn with_config(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();

        Self { cache }
    }

    /// Returns the aggregation of `entries`, computing it only on a miss.
    ///
    /// The caller guarantees that `entries` is the list identified by `key`.
    pub fn aggregate_cached(&self, key: DatasetKey, entries: &[Entry]) -> Arc<CategoryMatrix> {
        if let Some(hit) = self.cache.get(&key) {
            debug!(year = key.year, version = key.version, "Aggregation cache hit");
            return hit;
        }

        debug!(
            year = key.year,
            version = key.version,
            entries = entries.len(),
            "Aggregation cache miss"
        );
        let matrix = Arc::new(aggregate(entries));
        self.cache.insert(key, Arc::clone(&matrix));
        matrix
    }

    /// Invalidates a single dataset.
    pub fn invalidate(&self, key: &DatasetKey) {
        self.cache.invalidate(key);
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    ///
    /// Approximate until [`run_pending_tasks`](Self::run_pending_tasks) runs.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for AggregationCache {
    fn default() -> Self {
        Self::new()
    }
}
