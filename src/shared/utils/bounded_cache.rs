//! Bounded first-in-first-out store.
//!
//! Entries leave in insertion order once the capacity is exceeded. Reads never
//! reorder entries, so this is deliberately not an LRU.

use super::clock::{Clock, SystemClock};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FifoCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expired: u64,
    pub entries_count: usize,
    pub capacity: usize,
}

impl FifoCacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

#[derive(Debug)]
pub struct BoundedFifoCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    order: VecDeque<K>,
    capacity: usize,
    ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
    hits: u64,
    misses: u64,
    evictions: u64,
    expired: u64,
}

impl<K, V> BoundedFifoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, None, Arc::new(SystemClock))
    }

    /// Create a cache whose entries also expire `ttl` after insertion
    pub fn with_ttl(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, Some(ttl), Arc::new(SystemClock))
    }

    pub fn with_clock(capacity: usize, ttl: Option<Duration>, clock: Arc<dyn Clock>) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity + 1),
            order: VecDeque::with_capacity(capacity + 1),
            capacity,
            ttl,
            clock,
            hits: 0,
            misses: 0,
            evictions: 0,
            expired: 0,
        }
    }

    /// Look up a key. Counts a hit or a miss; expired entries are dropped and count as misses.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let expired = match self.entries.get(key) {
            Some(entry) => self.is_expired(entry, now),
            None => {
                self.misses += 1;
                return None;
            }
        };

        if expired {
            self.remove(key);
            self.expired += 1;
            self.misses += 1;
            return None;
        }

        self.hits += 1;
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Check presence without touching statistics
    pub fn contains(&self, key: &K) -> bool {
        let now = self.clock.now();
        self.entries
            .get(key)
            .map(|entry| !self.is_expired(entry, now))
            .unwrap_or(false)
    }

    /// Insert a value. Returns the evicted key if the insert pushed the cache over capacity.
    ///
    /// Replacing an existing key keeps its original queue position.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        let entry = CacheEntry {
            value,
            inserted_at: self.clock.now(),
        };

        if self.entries.insert(key.clone(), entry).is_none() {
            self.order.push_back(key);
        }

        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                self.evictions += 1;
                return Some(oldest);
            }
        }

        None
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from oldest to newest insertion
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn stats(&self) -> FifoCacheStats {
        FifoCacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            expired: self.expired,
            entries_count: self.entries.len(),
            capacity: self.capacity,
        }
    }

    fn is_expired(&self, entry: &CacheEntry<V>, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.saturating_duration_since(entry.inserted_at) > ttl,
            None => false,
        }
    }
}
