//! Binary Heap implementation
//!
//! An array-backed complete binary tree. The element at index `i` has children
//! at `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`; every element
//! dominates its children.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `top`     | O(1)       |
//! | `assign`  | O(n)       |
//! | `meld`    | O(n)       |
//!
//! Meld is linear despite the name: two arrays cannot be interleaved into one
//! heap-ordered array without rebuilding it. This is a limitation of the array
//! representation. Use [`BinomialHeap`](crate::binomial::BinomialHeap) or
//! [`PairingHeap`](crate::pairing::PairingHeap) when melds dominate.
//!
//! # Example
//!
//! ```rust
//! use counting_heaps::{Meld, PriorityQueue};
//! use counting_heaps::binary::BinaryHeap;
//!
//! let mut heap: BinaryHeap<i32> = [1, 5, 3].into_iter().collect();
//! let other: BinaryHeap<i32> = [4, 2].into_iter().collect();
//!
//! heap.meld(other);
//!
//! assert_eq!(heap.len(), 5);
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(4));
//! assert_eq!(heap.top(), Ok(&3));
//! ```

use crate::meter::Meter;
use crate::traits::{HeapError, Meld, PriorityQueue};
use compare::{natural, Compare, Natural};
use log::trace;
use std::fmt;

/// Array-backed binary heap
///
/// `C` decides which element sits on top: the default [`Natural`] puts the
/// maximum there, `natural().rev()` the minimum.
pub struct BinaryHeap<K, C = Natural<K>> {
    /// Heap-ordered complete binary tree, root at index 0
    data: Vec<K>,
    cmp: C,
    meter: Meter,
}

impl<K: Ord> BinaryHeap<K> {
    /// Creates an empty max-heap with its own meter
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty max-heap reporting into `meter`
    pub fn with_meter(meter: Meter) -> Self {
        Self::with_comparator_and_meter(natural(), meter)
    }
}

impl<K, C: Compare<K>> BinaryHeap<K, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_meter(cmp, Meter::new())
    }

    /// Creates an empty heap ordered by `cmp`, reporting into `meter`
    pub fn with_comparator_and_meter(cmp: C, meter: Meter) -> Self {
        Self {
            data: Vec::new(),
            cmp,
            meter,
        }
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The underlying heap-ordered array
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    /// Consumes the heap, returning the heap-ordered array
    pub fn into_vec(self) -> Vec<K> {
        self.data
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// # Time Complexity
    /// O(n + m): the combined array is heapified from scratch.
    pub fn append(&mut self, other: &mut Self) {
        trace!(
            "binary meld: {} + {} elements",
            self.data.len(),
            other.data.len()
        );
        self.data.append(&mut other.data);
        self.make_heap();
    }

    /// Restores heap order over the whole array
    fn make_heap(&mut self) {
        let Some(last) = self.data.len().checked_sub(1) else {
            return;
        };
        for index in (0..=last / 2).rev() {
            self.meter.tick();
            self.sift_down(index);
        }
    }

    /// Move element at index up while its parent does not dominate it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self
                .meter
                .compare(&self.cmp, &self.data[parent], &self.data[index])
            {
                break;
            }
            self.meter.tick();
            self.meter.swap(&mut self.data, index, parent);
            index = parent;
        }
    }

    /// Move element at index down until it dominates its children
    ///
    /// Between two children the left one is preferred unless the right one
    /// strictly dominates it.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            self.meter.tick();

            let right = left + 1;
            if right >= len {
                if self
                    .meter
                    .compare(&self.cmp, &self.data[index], &self.data[left])
                {
                    self.meter.swap(&mut self.data, index, left);
                }
                break;
            }

            let preferred = if self
                .meter
                .compare(&self.cmp, &self.data[left], &self.data[right])
            {
                right
            } else {
                left
            };

            if !self
                .meter
                .compare(&self.cmp, &self.data[index], &self.data[preferred])
            {
                break;
            }

            self.meter.swap(&mut self.data, index, preferred);
            index = preferred;
        }
    }
}

impl<K, C: Compare<K>> PriorityQueue<K> for BinaryHeap<K, C> {
    fn top(&self) -> Result<&K, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    fn push(&mut self, key: K) {
        self.data.push(key);
        self.sift_up(self.data.len() - 1);
    }

    fn pop(&mut self) -> Result<K, HeapError> {
        let Some(last) = self.data.len().checked_sub(1) else {
            return Err(HeapError::Empty);
        };
        self.meter.swap(&mut self.data, 0, last);
        let top = self.data.pop().ok_or(HeapError::Empty)?;
        self.sift_down(0);
        Ok(top)
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn assign<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.data.clear();
        self.data.extend(iter);
        trace!("binary assign: heapifying {} elements", self.data.len());
        self.make_heap();
    }

    fn meter(&self) -> &Meter {
        &self.meter
    }
}

impl<K, C: Compare<K>> Meld<K> for BinaryHeap<K, C> {
    fn meld(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<K, C: Compare<K> + Default> Default for BinaryHeap<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for BinaryHeap<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.assign(iter);
        heap
    }
}

impl<K, C: Compare<K>> Extend<K> for BinaryHeap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for BinaryHeap<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
