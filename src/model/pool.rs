//! Recycle pool - released rows waiting to be reused, bucketed by reuse key
//!
//! The pool is capped globally (not per key). The running count is kept as a
//! single integer so the cap check never walks the queues. Every pooled row
//! is stamped with a pool-wide sequence number so eviction can pick the
//! oldest row across all keys.

use std::collections::{HashMap, VecDeque};

use super::row::{ReuseKey, Row};

/// FIFO queues of detached rows keyed by reuse key
#[derive(Debug)]
pub struct RecyclePool<C> {
    queues: HashMap<ReuseKey, VecDeque<(u64, Row<C>)>>,
    len: usize,
    capacity: usize,
    next_seq: u64,
}

impl<C> RecyclePool<C> {
    /// Create an empty pool holding at most `capacity` rows across all keys
    pub fn new(capacity: usize) -> Self {
        Self {
            queues: HashMap::new(),
            len: 0,
            capacity,
            next_seq: 0,
        }
    }

    /// Total pooled rows across all keys
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pooled rows for one key
    pub fn len_for(&self, key: &ReuseKey) -> usize {
        self.queues.get(key).map_or(0, VecDeque::len)
    }

    /// Whether a queue exists for `key` (created on attach or first put)
    pub fn is_registered(&self, key: &ReuseKey) -> bool {
        self.queues.contains_key(key)
    }

    /// Create the queue for `key` if it does not exist yet
    pub fn register(&mut self, key: &ReuseKey) {
        if !self.queues.contains_key(key) {
            self.queues.insert(key.clone(), VecDeque::new());
        }
    }

    /// Pop the oldest pooled row for `key`
    pub fn take(&mut self, key: &ReuseKey) -> Option<Row<C>> {
        let (_, row) = self.queues.get_mut(key)?.pop_front()?;
        self.len -= 1;
        Some(row)
    }

    /// Pool a released row
    ///
    /// Returns the row back when it cannot be pooled (pool full, or the row has
    /// no reuse key); the caller must then destroy it.
    pub fn put(&mut self, row: Row<C>) -> Option<Row<C>> {
        if self.len >= self.capacity {
            return Some(row);
        }
        let Some(key) = row.reuse_key().cloned() else {
            return Some(row);
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queues.entry(key).or_default().push_back((seq, row));
        self.len += 1;
        None
    }

    /// Change the cap, evicting the oldest pooled rows when shrinking
    ///
    /// Evicted rows are returned oldest first so the caller can destroy them.
    pub fn set_capacity(&mut self, capacity: usize) -> Vec<Row<C>> {
        self.capacity = capacity;
        let mut evicted = Vec::new();
        while self.len > self.capacity {
            let Some(row) = self.pop_oldest() else {
                break;
            };
            evicted.push(row);
        }
        evicted
    }

    /// Remove the row pooled earliest, whatever its key
    fn pop_oldest(&mut self) -> Option<Row<C>> {
        let queue = self
            .queues
            .values_mut()
            .filter(|queue| !queue.is_empty())
            .min_by_key(|queue| queue.front().map_or(u64::MAX, |(seq, _)| *seq))?;
        let (_, row) = queue.pop_front()?;
        self.len -= 1;
        Some(row)
    }
}

impl<C> Default for RecyclePool<C> {
    fn default() -> Self {
        Self::new(0)
    }
}
