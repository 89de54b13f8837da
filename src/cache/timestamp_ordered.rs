//! Timestamp Ordered Cache Module
//!
//! LRU cache that stamps every entry on access and, when full, rebuilds a
//! complete oldest-first ordering of the live entries to pick a victim.
//!
//! Lookups and overwrites are O(1); an eviction costs O(n log n).

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::entry::{TimestampedEntry, TouchClock};
use crate::cache::LruCache;
use crate::config::validate_capacity;
use crate::error::Result;

// == Timestamp Ordered Cache ==
/// LRU cache that evicts the entry with the oldest `Touch` stamp.
#[derive(Debug)]
pub struct TimestampOrderedCache<K, V> {
    /// Key-value storage with access stamps
    entries: HashMap<K, TimestampedEntry<V>>,
    /// Stamp source, private to this instance
    clock: TouchClock,
    capacity: usize,
}

impl<K, V> TimestampOrderedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Returns `CacheError::InvalidArgument` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        debug!("Created timestamp ordered cache with capacity {}", capacity);

        Ok(Self {
            entries: HashMap::new(),
            clock: TouchClock::new(),
            capacity,
        })
    }

    // == Ordering ==
    /// Returns every live key ordered from least to most recently touched.
    ///
    /// Stamps are unique, so the order is total and deterministic.
    pub fn keys_oldest_first(&self) -> Vec<&K> {
        let mut ordered: Vec<(&K, &TimestampedEntry<V>)> = self.entries.iter().collect();
        ordered.sort_unstable_by_key(|(_, entry)| entry.last_touched);
        ordered.into_iter().map(|(key, _)| key).collect()
    }

    // == Evict Oldest ==
    /// Removes the least recently touched entry.
    fn evict_oldest(&mut self) {
        let victim = match self.keys_oldest_first().first() {
            Some(key) => (*key).clone(),
            None => return,
        };

        if let Some(entry) = self.entries.remove(&victim) {
            debug!(
                "Evicted oldest entry touched at seq {} (capacity {})",
                entry.last_touched.seq, self.capacity
            );
        }
    }
}

impl<K, V> LruCache<K, V> for TimestampOrderedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let entry = self.entries.get_mut(key)?;
        let touch = self.clock.tick();
        trace!("Refreshing entry to seq {}", touch.seq);
        entry.touch(touch);
        Some(&entry.value)
    }

    fn put(&mut self, key: K, value: V) {
        let touch = self.clock.tick();

        // Overwrite in place
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.touch(touch);
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        self.entries.insert(key, TimestampedEntry::new(value, touch));
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}
