//! In-memory TTL memoizing cache wrapping the page-fetch delegate.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use metapeek_core::error::Result;
use metapeek_core::traits::PageFetcher;
use metapeek_core::types::PageMetadata;

/// Cached result of one successful fetch.
#[derive(Clone)]
struct CacheEntry {
    value: PageMetadata,
    /// Captured when the fetch *result* was stored, not when the fetch started.
    recorded_at: Instant,
}

/// Expiration policy: an absent entry is stale, and an entry whose age has
/// reached the TTL is stale. Pure function of its inputs.
fn is_stale(entry: Option<&CacheEntry>, now: Instant, ttl: Duration) -> bool {
    match entry {
        None => true,
        Some(e) => now.duration_since(e.recorded_at) >= ttl,
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for each entry, in seconds.
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        // The reference service memoized for 15 minutes.
        Self { ttl_seconds: 900 }
    }
}

impl CacheConfig {
    /// The entry TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// Memoizing TTL cache in front of a [`PageFetcher`].
///
/// Keys are URL strings used verbatim — no normalization, so keys differing
/// only in casing or a trailing slash are distinct entries. Growth is
/// unbounded: a stale entry is only ever replaced by the next successful
/// fetch for its key, never deleted.
///
/// Thread-safe; the lock is never held across the fetch await, so two
/// concurrent lookups for one absent/stale key both invoke the delegate and
/// the last successful store wins.
pub struct MetadataCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    fetcher: Arc<dyn PageFetcher>,
}

impl MetadataCache {
    /// Creates a cache with the default configuration around `fetcher`.
    ///
    /// The delegate is supplied exactly once and never replaced.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_config(fetcher, CacheConfig::default())
    }

    /// Creates a cache with a custom configuration.
    pub fn with_config(fetcher: Arc<dyn PageFetcher>, config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: config.ttl(),
            fetcher,
        }
    }

    /// Returns the metadata for `key`, fetching it if absent or stale.
    ///
    /// On a fresh hit the stored value is returned and the delegate is not
    /// invoked. On a miss (or a stale entry) the delegate runs; a successful
    /// result is stored with the completion timestamp and returned, a failure
    /// is propagated as `Err` and nothing is stored.
    pub async fn get_data(&self, key: &str) -> Result<PageMetadata> {
        if let Some(value) = self.lookup(key) {
            debug!(key, "cache hit");
            return Ok(value);
        }
        debug!(key, "cache miss, fetching");

        let value = self.fetcher.fetch(key).await?;
        self.store(key, value.clone());
        Ok(value)
    }

    /// Returns the number of entries, fresh and stale alike.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let entries = self.entries.read();
        let stale = entries
            .values()
            .filter(|e| is_stale(Some(e), now, self.ttl))
            .count();
        CacheStats {
            total_entries: entries.len(),
            stale_entries: stale,
            fresh_entries: entries.len().saturating_sub(stale),
        }
    }

    fn lookup(&self, key: &str) -> Option<PageMetadata> {
        let entries = self.entries.read();
        let entry = entries.get(key);
        if is_stale(entry, Instant::now(), self.ttl) {
            None
        } else {
            entry.map(|e| e.value.clone())
        }
    }

    fn store(&self, key: &str, value: PageMetadata) {
        // Unconditional overwrite: with concurrent fetches for one key, the
        // last completed fetch wins.
        self.entries.write().insert(
            key.to_string(),
            CacheEntry {
                value,
                recorded_at: Instant::now(),
            },
        );
    }
}

/// Cache statistics.
#[derive(Clone, Debug)]
pub struct CacheStats {
    /// Entries currently held, fresh and stale.
    pub total_entries: usize,
    /// Entries within their TTL window.
    pub fresh_entries: usize,
    /// Entries past their TTL, awaiting overwrite on next lookup.
    pub stale_entries: usize,
}
