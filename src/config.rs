//! Configuration Module
//!
//! Describes how a cache instance should be built. The cache reads no
//! environment of its own; hosts embed `CacheConfig` in their own settings
//! and deserialize it with serde.

use serde::{Deserialize, Serialize};

use crate::cache::Strategy;
use crate::error::{CacheError, Result};

/// Default number of entries when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Which eviction bookkeeping to use
    pub strategy: Strategy,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a config for the default strategy with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            strategy: Strategy::default(),
        }
    }

    /// Replaces the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    // == Validate ==
    /// Checks that the capacity is at least one.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.capacity)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Rejects capacities below one.
pub(crate) fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        tracing::warn!("Rejected cache construction with capacity 0");
        return Err(CacheError::zero_capacity());
    }
    Ok(())
}
