//! Min-priority queue with deterministic tie-breaking.
//!
//! `std::collections::BinaryHeap` is a max-heap over `Ord`, and `f64` has no
//! total order of its own. Entries here are ordered on `(key, seq)` where
//! `seq` is the insertion counter, so equal keys pop in FIFO order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A priority key with a total order.
pub trait QueueKey: Copy {
    /// Compare two keys.
    fn cmp_key(&self, other: &Self) -> Ordering;
}

impl QueueKey for f64 {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl QueueKey for u64 {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

#[derive(Debug)]
struct Entry<K, T> {
    key: K,
    seq: u64,
    payload: T,
}

impl<K: QueueKey, T> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-priority.
        other
            .key
            .cmp_key(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K: QueueKey, T> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: QueueKey, T> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: QueueKey, T> Eq for Entry<K, T> {}

/// Min-ordered queue over `(key, payload)` pairs.
#[derive(Debug)]
pub struct MinQueue<K, T> {
    heap: BinaryHeap<Entry<K, T>>,
    next_seq: u64,
}

impl<K: QueueKey, T> MinQueue<K, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `payload` with priority `key`.
    pub fn push(&mut self, key: K, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, payload });
    }

    /// Remove the entry with the smallest key, oldest first among equals.
    pub fn pop(&mut self) -> Option<(K, T)> {
        self.heap.pop().map(|e| (e.key, e.payload))
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: QueueKey, T> Default for MinQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_key_order() {
        let mut q = MinQueue::new();
        for (k, v) in [(3.0, 'c'), (1.0, 'a'), (2.0, 'b')] {
            q.push(k, v);
        }
        let order: Vec<char> = std::iter::from_fn(|| q.pop().map(|(_, v)| v)).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn equal_keys_pop_in_insertion_order() {
        let mut q = MinQueue::new();
        for v in 0..5u32 {
            q.push(7u64, v);
        }
        q.push(1u64, 99);
        assert_eq!(q.pop(), Some((1, 99)));
        for v in 0..5u32 {
            assert_eq!(q.pop(), Some((7, v)));
        }
        assert!(q.is_empty());
    }

    #[test]
    fn infinity_sorts_last() {
        let mut q = MinQueue::new();
        q.push(f64::INFINITY, "far");
        q.push(0.0, "near");
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().map(|(_, v)| v), Some("near"));
        assert_eq!(q.pop().map(|(_, v)| v), Some("far"));
        assert_eq!(q.pop(), None);
    }
}
