//! Recency List Cache Module
//!
//! O(1) LRU cache built from a hash index and a doubly linked recency chain.
//!
//! Nodes live in an arena (`Vec`) and link to each other by `NodeHandle`
//! rather than by reference, so the index and the chain can both point at
//! the same node without shared ownership:
//!
//! ```text
//!   index: key -> handle
//!
//!   most_recent                                   least_recent
//!        |                                              |
//!        v                                              v
//!     [node] --older--> [node] --older--> ... --older--> [node]
//!            <--newer--        <--newer--
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::iter;

use tracing::{debug, trace};

use crate::cache::LruCache;
use crate::config::validate_capacity;
use crate::error::Result;

// == Node Handle ==
/// Stable arena slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeHandle(usize);

// == Node ==
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Neighbor touched immediately after this one
    newer: Option<NodeHandle>,
    /// Neighbor touched immediately before this one
    older: Option<NodeHandle>,
}

// == Recency List Cache ==
/// LRU cache with constant-time `get`, `put` and eviction.
///
/// There is no removal outside eviction, so the arena never holds more
/// than `capacity` nodes: an evicted node's slot is reused by the node
/// inserted in the same `put`.
#[derive(Debug)]
pub struct RecencyListCache<K, V> {
    /// Key to arena slot, one entry per live node
    index: HashMap<K, NodeHandle>,
    /// Node arena
    nodes: Vec<Node<K, V>>,
    /// Head of the chain, `None` when empty
    most_recent: Option<NodeHandle>,
    /// Tail of the chain, `None` when empty
    least_recent: Option<NodeHandle>,
    capacity: usize,
}

impl<K, V> RecencyListCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Returns `CacheError::InvalidArgument` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        validate_capacity(capacity)?;
        debug!("Created recency list cache with capacity {}", capacity);

        Ok(Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            most_recent: None,
            least_recent: None,
            capacity,
        })
    }

    // == Iteration ==
    /// Iterates entries from most to least recently used without promoting.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        iter::successors(self.most_recent, move |handle| self.node(*handle).older).map(
            move |handle| {
                let node = self.node(handle);
                (&node.key, &node.value)
            },
        )
    }

    /// Returns the next eviction victim without promoting it.
    pub fn peek_least_recent(&self) -> Option<(&K, &V)> {
        self.least_recent.map(|handle| {
            let node = self.node(handle);
            (&node.key, &node.value)
        })
    }

    fn node(&self, handle: NodeHandle) -> &Node<K, V> {
        &self.nodes[handle.0]
    }

    fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<K, V> {
        &mut self.nodes[handle.0]
    }

    // == Chain Surgery ==
    /// Unlinks a node, joining its neighbors or moving the anchors.
    fn detach(&mut self, handle: NodeHandle) {
        let (newer, older) = {
            let node = self.node(handle);
            (node.newer, node.older)
        };

        match newer {
            Some(newer) => self.node_mut(newer).older = older,
            None => self.most_recent = older,
        }
        match older {
            Some(older) => self.node_mut(older).newer = newer,
            None => self.least_recent = newer,
        }

        let node = self.node_mut(handle);
        node.newer = None;
        node.older = None;
    }

    /// Links a detached node in as the new most recent.
    fn attach_most_recent(&mut self, handle: NodeHandle) {
        let previous_head = self.most_recent;
        {
            let node = self.node_mut(handle);
            node.newer = None;
            node.older = previous_head;
        }

        match previous_head {
            Some(head) => self.node_mut(head).newer = Some(handle),
            None => self.least_recent = Some(handle),
        }
        self.most_recent = Some(handle);
    }

    /// Moves a live node to the most recent end.
    fn promote(&mut self, handle: NodeHandle) {
        if self.most_recent == Some(handle) {
            return;
        }
        trace!("Promoting slot {} to most recent", handle.0);
        self.detach(handle);
        self.attach_most_recent(handle);
    }

    /// Drops the least recent node from the index and chain.
    ///
    /// Returns its now-free slot, or `None` when the cache is empty.
    fn evict_least_recent(&mut self) -> Option<NodeHandle> {
        let victim = self.least_recent?;
        self.detach(victim);
        self.index.remove(&self.nodes[victim.0].key);
        debug!(
            "Evicted least recent entry from slot {} (capacity {})",
            victim.0, self.capacity
        );
        Some(victim)
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let bound = self.nodes.len() + 1;
        let forward: Vec<NodeHandle> =
            iter::successors(self.most_recent, |h| self.node(*h).older)
                .take(bound)
                .collect();
        let mut backward: Vec<NodeHandle> =
            iter::successors(self.least_recent, |h| self.node(*h).newer)
                .take(bound)
                .collect();
        backward.reverse();

        assert_eq!(forward.len(), self.index.len(), "chain length differs from index");
        assert_eq!(forward, backward, "forward and backward walks disagree");
        assert_eq!(self.nodes.len(), self.index.len(), "orphaned arena slots");
        assert!(self.index.len() <= self.capacity);
        for handle in &forward {
            assert_eq!(self.index.get(&self.node(*handle).key), Some(handle));
        }
        if self.index.is_empty() {
            assert!(self.most_recent.is_none() && self.least_recent.is_none());
        }
    }
}

impl<K, V> LruCache<K, V> for RecencyListCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let handle = *self.index.get(key)?;
        self.promote(handle);
        Some(&self.node(handle).value)
    }

    fn put(&mut self, key: K, value: V) {
        // Overwrite in place
        if let Some(&handle) = self.index.get(&key) {
            self.promote(handle);
            self.node_mut(handle).value = value;
            return;
        }

        let reclaimed = if self.index.len() >= self.capacity {
            self.evict_least_recent()
        } else {
            None
        };

        let handle = match reclaimed {
            Some(slot) => {
                let node = self.node_mut(slot);
                node.key = key.clone();
                node.value = value;
                slot
            }
            None => {
                let slot = NodeHandle(self.nodes.len());
                self.nodes.push(Node {
                    key: key.clone(),
                    value,
                    newer: None,
                    older: None,
                });
                slot
            }
        };

        self.attach_most_recent(handle);
        self.index.insert(key, handle);
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}
