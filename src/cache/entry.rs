//! Cache Entry Module
//!
//! Defines timestamped entries and the clock that stamps them.

use std::time::Instant;

// == Touch ==
/// The moment an entry was last inserted, updated or read.
///
/// Ordered by `at`, then by `seq`. `seq` strictly increases for every stamp
/// issued by one clock, so two touches never compare equal even when the
/// monotonic clock has not advanced between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Touch {
    /// Monotonic wall time of the touch
    pub at: Instant,
    /// Per-cache touch counter
    pub seq: u64,
}

// == Touch Clock ==
/// Issues strictly increasing `Touch` stamps for one cache instance.
#[derive(Debug, Default)]
pub struct TouchClock {
    next_seq: u64,
}

impl TouchClock {
    /// Creates a clock whose first stamp has sequence zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stamp later than every stamp issued before it.
    pub fn tick(&mut self) -> Touch {
        let seq = self.next_seq;
        self.next_seq += 1;
        Touch {
            at: Instant::now(),
            seq,
        }
    }
}

// == Timestamped Entry ==
/// A stored value together with the time it was last touched.
#[derive(Debug, Clone)]
pub struct TimestampedEntry<V> {
    /// The stored value
    pub value: V,
    /// Last insert, update or read
    pub last_touched: Touch,
}

impl<V> TimestampedEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with `touch`.
    pub fn new(value: V, touch: Touch) -> Self {
        Self {
            value,
            last_touched: touch,
        }
    }

    /// Refreshes the last-touched stamp.
    pub fn touch(&mut self, touch: Touch) {
        self.last_touched = touch;
    }
}
