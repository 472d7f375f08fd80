//! Pairing Heap implementation
//!
//! A pairing heap is a single heap-ordered multiway tree with:
//! - O(1) push and meld
//! - O(log n) amortized pop
//!
//! There is no rank bookkeeping at all. Push and meld just link two roots;
//! all restructuring is deferred to pop, which combines the orphaned children
//! of the old root with the two-pass pairing discipline. That discipline is
//! what yields the amortized bound: a single left-to-right fold over the
//! children does not. Individual pops may cost O(n).

use crate::meter::Meter;
use crate::traits::{HeapError, Meld, PriorityQueue};
use compare::{natural, Compare, Natural};
use log::trace;
use std::fmt;
use std::mem;

struct Node<K> {
    key: K,
    /// Subtrees in link order, unbounded
    children: Vec<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn singleton(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            children: Vec::new(),
        })
    }
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use counting_heaps::{Meld, PriorityQueue};
/// use counting_heaps::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// heap.push(5);
/// heap.push(1);
///
/// let mut other = PairingHeap::new();
/// other.push(9);
///
/// heap.meld(other);
/// assert_eq!(heap.top(), Ok(&9));
/// assert_eq!(heap.len(), 3);
/// ```
pub struct PairingHeap<K, C = Natural<K>> {
    root: Option<Box<Node<K>>>,
    len: usize,
    cmp: C,
    meter: Meter,
}

impl<K, C> Drop for PairingHeap<K, C> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<K: Ord> PairingHeap<K> {
    /// Creates an empty max-heap with its own meter
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty max-heap reporting into `meter`
    pub fn with_meter(meter: Meter) -> Self {
        Self::with_comparator_and_meter(natural(), meter)
    }
}

impl<K, C> PairingHeap<K, C> {
    /// Frees every node without recursion
    ///
    /// A pairing tree can degenerate into a path of length n (pushing keys in
    /// dominance order does exactly that), so dropping it recursively could
    /// overflow the stack.
    fn release(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
        self.len = 0;
    }
}

impl<K, C: Compare<K>> PairingHeap<K, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_meter(cmp, Meter::new())
    }

    /// Creates an empty heap ordered by `cmp`, reporting into `meter`
    pub fn with_comparator_and_meter(cmp: C, meter: Meter) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
            meter,
        }
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// **Time Complexity**: O(1), one root comparison
    pub fn append(&mut self, other: &mut Self) {
        trace!("pairing meld: {} + {} elements", self.len, other.len);
        self.len += mem::take(&mut other.len);
        let root = self.root.take();
        self.root = self.merge_trees(root, other.root.take());
    }

    /// Links two trees, either of which may be absent
    ///
    /// The dominating root (`first` on ties) adopts the other as its last
    /// child. Nothing below the roots is touched.
    fn merge_trees(
        &self,
        first: Option<Box<Node<K>>>,
        second: Option<Box<Node<K>>>,
    ) -> Option<Box<Node<K>>> {
        match (first, second) {
            (None, tree) | (tree, None) => tree,
            (Some(mut first), Some(mut second)) => {
                if self.meter.compare(&self.cmp, &first.key, &second.key) {
                    mem::swap(&mut first, &mut second);
                }
                first.children.push(second);
                Some(first)
            }
        }
    }

    /// Combines the children of a removed root into a single tree
    ///
    /// **Pass 1**: scan left to right, linking each adjacent pair; an odd
    /// trailing child is carried as is.
    ///
    /// **Pass 2**: starting from the last tree of pass 1, fold leftwards,
    /// linking the accumulated tree with each earlier one.
    fn combine_siblings(&self, children: Vec<Box<Node<K>>>) -> Option<Box<Node<K>>> {
        let mut paired = Vec::with_capacity((children.len() + 1) / 2);
        let mut children = children.into_iter();
        while let Some(first) = children.next() {
            match children.next() {
                Some(second) => {
                    self.meter.tick();
                    paired.push(self.merge_trees(Some(first), Some(second)));
                }
                None => paired.push(Some(first)),
            }
        }

        let mut root = None;
        while let Some(tree) = paired.pop() {
            self.meter.tick();
            root = self.merge_trees(root, tree);
        }
        root
    }
}

impl<K, C: Compare<K>> PriorityQueue<K> for PairingHeap<K, C> {
    fn top(&self) -> Result<&K, HeapError> {
        self.root
            .as_ref()
            .map(|root| &root.key)
            .ok_or(HeapError::Empty)
    }

    fn push(&mut self, key: K) {
        self.len += 1;
        let root = self.root.take();
        self.root = self.merge_trees(root, Some(Node::singleton(key)));
    }

    /// Removes and returns the dominating key
    ///
    /// **Time Complexity**: O(log n) amortized, O(n) worst-case
    fn pop(&mut self) -> Result<K, HeapError> {
        let root = self.root.take().ok_or(HeapError::Empty)?;
        self.len -= 1;
        let Node { key, children } = *root;
        if self.len > 0 {
            self.root = self.combine_siblings(children);
        }
        Ok(key)
    }

    fn clear(&mut self) {
        self.release();
    }

    fn len(&self) -> usize {
        self.len
    }

    fn assign<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.clear();
        for key in iter {
            self.meter.tick();
            self.push(key);
        }
    }

    fn meter(&self) -> &Meter {
        &self.meter
    }
}

impl<K, C: Compare<K>> Meld<K> for PairingHeap<K, C> {
    fn meld(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<K, C: Compare<K> + Default> Default for PairingHeap<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for PairingHeap<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.assign(iter);
        heap
    }
}

impl<K, C: Compare<K>> Extend<K> for PairingHeap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for PairingHeap<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("len", &self.len)
            .field("top", &self.root.as_ref().map(|root| &root.key))
            .finish_non_exhaustive()
    }
}
