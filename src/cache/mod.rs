//! Time-expiring key-value cache.
//!
//! Maps an entity identifier to a cached value plus a capture timestamp.
//! Reads honor a fixed TTL: an entry at or past its TTL behaves as absent
//! but is only removed by an overwrite or explicit invalidation. All
//! operations are serialized through one mutex so concurrent feature
//! instances sharing the cache never observe torn state.
//!
//! The cache is an explicitly constructed instance: the composition root
//! creates one and hands out `Arc` clones to whoever needs it.

mod clock;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

pub use clock::{Clock, ManualClock, SystemClock};

/// One cached value plus the moment it was captured.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    captured_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_valid(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.captured_at) < ttl
    }
}

/// Key-value store with time-based expiry.
///
/// Unbounded in entry count; staleness is the only eviction signal.
/// Operations are infallible, a miss is a normal silent outcome.
pub struct ExpiringCache<K, V> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Cache backed by the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Cache with an injected clock, for tests simulating expiry.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value only while the entry is younger than the
    /// TTL. A stale entry is treated as absent, not deleted.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| entry.is_valid(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Inserts or overwrites, stamping the entry with the current time.
    pub fn put(&self, key: K, value: V) {
        let captured_at = self.clock.now();
        let mut entries = self.entries.lock();
        entries.insert(key, CacheEntry { value, captured_at });
    }

    /// Removes the entry for one key.
    pub fn invalidate(&self, key: &K) {
        let mut entries = self.entries.lock();
        entries.remove(key);
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.clear();
    }

    /// Existence check honoring the TTL, without cloning the value.
    pub fn has_valid(&self, key: &K) -> bool {
        let now = self.clock.now();
        let entries = self.entries.lock();
        entries
            .get(key)
            .is_some_and(|entry| entry.is_valid(now, self.ttl))
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
