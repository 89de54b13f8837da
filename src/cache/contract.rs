//! Cache Contract Module
//!
//! The interface shared by every eviction strategy.

use std::hash::Hash;

// == LRU Cache Trait ==
/// A bounded key-value cache that evicts the least recently used entry.
///
/// Implementations are single-threaded: every operation takes `&mut self`
/// or `&self` and no internal locking is performed. Callers sharing an
/// instance across threads must wrap it in their own lock.
///
/// The trait is object safe so callers can depend on
/// `Box<dyn LruCache<K, V>>` and swap strategies freely.
pub trait LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Inserts or overwrites `key`, marking it most recently used.
    ///
    /// Inserting a new key into a full cache evicts the least recently
    /// used entry first. Overwriting never evicts.
    fn put(&mut self, key: K, value: V);

    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks presence without promoting the entry.
    fn contains(&self, key: &K) -> bool;
}
