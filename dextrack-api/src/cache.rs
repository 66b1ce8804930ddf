//! Time-bounded response cache persisted as a single storage record.
//!
//! Every cached response lives in one map under [`CACHE_KEY`]. The map is
//! loaded on each read and rewritten in full on each write, so the store's
//! single-key atomicity covers the whole cache.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use dextrack_core::{KeyValueStore, StorageError, load_json_or_default, save_json};

/// Storage key holding the whole cache map.
pub const CACHE_KEY: &str = "dextrack_cache";

/// Records older than this are treated as absent.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// One cached response body and when it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub data: Value,
    pub fetched_at_ms: i64,
}

impl CacheRecord {
    pub fn is_fresh_at(&self, now_ms: i64) -> bool {
        now_ms - self.fetched_at_ms < window_ms()
    }
}

/// Record counts reported by [`ResponseCache::summary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheSummary {
    pub total: usize,
    pub fresh: usize,
}

impl CacheSummary {
    pub fn stale(&self) -> usize {
        self.total - self.fresh
    }
}

type CacheMap = HashMap<String, CacheRecord>;

fn window_ms() -> i64 {
    FRESHNESS_WINDOW.as_millis() as i64
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Derive a cache key from a full request URL, query string included.
///
/// ASCII letters and digits pass through; every other byte becomes `_xx`
/// (lowercase hex). Since `_` itself is escaped, distinct URLs always
/// produce distinct keys.
pub fn cache_key(url: &str) -> String {
    let mut key = String::with_capacity(url.len() + 8);
    for byte in url.bytes() {
        if byte.is_ascii_alphanumeric() {
            key.push(byte as char);
        } else {
            let _ = write!(key, "_{byte:02x}");
        }
    }
    key
}

/// Response cache over any [`KeyValueStore`].
#[derive(Debug)]
pub struct ResponseCache<S> {
    store: S,
}

impl<S: KeyValueStore> ResponseCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load(&self) -> CacheMap {
        load_json_or_default(&self.store, CACHE_KEY)
    }

    /// Fresh cached value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_at(key, now_ms())
    }

    /// [`get`](Self::get) against an explicit clock. Stale records read as
    /// absent but are left in place.
    pub fn get_at(&self, key: &str, now_ms: i64) -> Option<Value> {
        let mut map = self.load();
        match map.remove(key) {
            Some(record) if record.is_fresh_at(now_ms) => {
                log::debug!("Cache hit: {key}");
                Some(record.data)
            }
            Some(_) => {
                log::debug!("Cache stale: {key}");
                None
            }
            None => {
                log::debug!("Cache miss: {key}");
                None
            }
        }
    }

    /// Store `value` under `key`, stamped with the current time.
    pub fn put(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.put_at(key, value, now_ms())
    }

    /// [`put`](Self::put) against an explicit clock. Stale records are
    /// pruned before the map is rewritten.
    pub fn put_at(&self, key: &str, value: Value, now_ms: i64) -> Result<(), StorageError> {
        let mut map = self.load();
        let before = map.len();
        map.retain(|_, record| record.is_fresh_at(now_ms));
        let pruned = before - map.len();
        if pruned > 0 {
            log::debug!("Pruned {pruned} stale cache record(s)");
        }
        map.insert(
            key.to_string(),
            CacheRecord {
                data: value,
                fetched_at_ms: now_ms,
            },
        );
        save_json(&self.store, CACHE_KEY, &map)
    }

    /// Drop every cached response.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(CACHE_KEY)
    }

    pub fn summary(&self) -> CacheSummary {
        self.summary_at(now_ms())
    }

    pub fn summary_at(&self, now_ms: i64) -> CacheSummary {
        let map = self.load();
        CacheSummary {
            total: map.len(),
            fresh: map.values().filter(|r| r.is_fresh_at(now_ms)).count(),
        }
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
