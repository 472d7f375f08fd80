//! Common traits for heap data structures
//!
//! This module provides the contract shared by every heap in the crate:
//!
//! - [`PriorityQueue`]: top/push/pop/clear and size queries, plus bulk
//!   assignment and access to the heap's [`Meter`]
//! - [`Meld`]: destructive merge of two heaps of the same variant
//!
//! Meld is kept out of [`PriorityQueue`] on purpose: its cost differs by an
//! order of magnitude between variants (linear for the array-backed
//! [`BinaryHeap`](crate::binary::BinaryHeap), logarithmic for
//! [`BinomialHeap`](crate::binomial::BinomialHeap), constant for
//! [`PairingHeap`](crate::pairing::PairingHeap)).

use crate::meter::Meter;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `top` or `pop` was called on a heap with no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The element returned by [`top`](PriorityQueue::top) and
/// [`pop`](PriorityQueue::pop) is the one that *dominates* every other element
/// under the heap's comparator. With the default
/// [`Natural`](compare::Natural) comparator that is the maximum.
///
/// Every comparison and swap performed by an implementation is counted by the
/// heap's [`Meter`].
///
/// # Example
///
/// ```rust
/// use counting_heaps::PriorityQueue;
/// use counting_heaps::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Ok(&3));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<K> {
    /// Returns the dominating key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    fn top(&self) -> Result<&K, HeapError>;

    /// Inserts a key
    fn push(&mut self, key: K);

    /// Removes and returns the dominating key
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    fn pop(&mut self) -> Result<K, HeapError>;

    /// Removes every element, keeping the comparator and meter
    fn clear(&mut self);

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the contents of the heap with the keys of `iter`
    ///
    /// The input needs no particular order. Each variant uses its own bulk
    /// build: the binary heap heapifies in O(n), the tree heaps push one by one.
    fn assign<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
        Self: Sized;

    /// Returns the meter this heap reports its operation counts into
    fn meter(&self) -> &Meter;
}

/// Heaps that can absorb another heap of the same type
///
/// # Time Complexity
/// - Binary Heap: O(n), the whole array is rebuilt
/// - Binomial Heap: O(log n) amortized
/// - Pairing Heap: O(1)
pub trait Meld<K>: PriorityQueue<K> + Sized {
    /// Merges `other` into this heap, consuming it
    ///
    /// The donor is taken by value, so it cannot be observed afterwards.
    fn meld(&mut self, other: Self);
}
