//! Cache Module
//!
//! Provides bounded in-memory caching with LRU eviction, implemented by two
//! interchangeable strategies behind the `LruCache` trait.

mod contract;
mod entry;
mod recency_list;
mod timestamp_ordered;


use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::config::CacheConfig;
use crate::error::Result;

// Re-export public types
pub use contract::LruCache;
pub use entry::{TimestampedEntry, Touch, TouchClock};
pub use recency_list::RecencyListCache;
pub use timestamp_ordered::TimestampOrderedCache;

// == Strategy ==
/// Selects the bookkeeping behind an `LruCache`.
///
/// Both strategies make identical eviction decisions; they differ only in
/// cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Hash index plus linked recency chain, O(1) eviction
    #[default]
    RecencyList,
    /// Hash index plus access stamps, O(n log n) eviction
    TimestampOrdered,
}

// == Factory ==
/// Builds the cache described by `config`.
///
/// Returns `CacheError::InvalidArgument` when the capacity is zero.
pub fn build_cache<K, V>(config: &CacheConfig) -> Result<Box<dyn LruCache<K, V>>>
where
    K: Hash + Eq + Clone + 'static,
    V: 'static,
{
    config.validate()?;

    let cache: Box<dyn LruCache<K, V>> = match config.strategy {
        Strategy::RecencyList => Box::new(RecencyListCache::new(config.capacity)?),
        Strategy::TimestampOrdered => Box::new(TimestampOrderedCache::new(config.capacity)?),
    };
    Ok(cache)
}
