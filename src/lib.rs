//! Recency Cache - A bounded in-memory key-value cache
//!
//! Provides LRU eviction through two interchangeable strategies sharing the
//! `LruCache` trait:
//!
//! - `RecencyListCache`: hash index plus linked recency chain, O(1) eviction
//! - `TimestampOrderedCache`: hash index plus access stamps, O(n log n) eviction
//!
//! Caches are single-threaded; wrap an instance in a lock to share it.
//!
//! ```
//! use recency_cache::{build_cache, CacheConfig, Strategy};
//!
//! let config = CacheConfig::new(2).with_strategy(Strategy::RecencyList);
//! let mut cache = build_cache::<&str, u32>(&config)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! # Ok::<(), recency_cache::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{build_cache, LruCache, RecencyListCache, Strategy, TimestampOrderedCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
