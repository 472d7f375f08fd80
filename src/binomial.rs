//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) push and pop (push is O(1) amortized)
//! - O(log n) amortized meld
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and its root has k children of ranks k-1, ..., 0
//!
//! The heap keeps a table of root slots indexed by rank, holding at most one
//! tree per rank. The occupied slots mirror the binary representation of the
//! element count.
//!
//! **Key Operations**:
//! - **Push**: insert a B₀ tree with carry propagation, like adding 1 in binary
//! - **Pop**: remove the top tree, reinsert each of its children, rescan roots
//! - **Meld**: insert every donor tree with carry propagation
//!
//! The top is cached as the *rank* of the slot holding the dominating root.
//! A rank is an index into storage the heap owns, so the cache can never
//! dangle; it is refreshed whenever the set of resident trees changes.

use crate::meter::Meter;
use crate::rank::{checked_increment, Rank, RANK_SLOTS};
use crate::traits::{HeapError, Meld, PriorityQueue};
use compare::{natural, Compare, Natural};
use log::trace;
use smallvec::SmallVec;
use std::fmt;
use std::mem;

/// Children of a node in link order: ranks 0, 1, ..., rank-1
///
/// Half of all nodes are leaves and a quarter have one child, so short lists
/// stay inline.
type Children<K> = SmallVec<[Box<Node<K>>; 2]>;

/// Internal node structure for binomial heap
///
/// A node exclusively owns its children; a root is exclusively owned by its
/// rank slot. `rank` always equals `children.len()`.
struct Node<K> {
    key: K,
    rank: Rank,
    children: Children<K>,
}

impl<K> Node<K> {
    fn singleton(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            rank: 0,
            children: SmallVec::new(),
        })
    }
}

type Slots<K> = Box<[Option<Box<Node<K>>>]>;

fn empty_slots<K>() -> Slots<K> {
    (0..RANK_SLOTS).map(|_| None).collect()
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use counting_heaps::{Meld, PriorityQueue};
/// use counting_heaps::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push(1);
/// heap.push(3);
/// heap.push(5);
///
/// let mut other = BinomialHeap::new();
/// other.assign([2, 4, 6]);
///
/// heap.meld(other);
/// assert_eq!(heap.len(), 6);
/// assert_eq!(heap.pop(), Ok(6));
/// assert_eq!(heap.top(), Ok(&5));
/// ```
pub struct BinomialHeap<K, C = Natural<K>> {
    /// Binomial trees indexed by rank. Each slot holds at most one tree.
    trees: Slots<K>,
    /// Index into `trees` of the slot holding the dominating root; it equals
    /// that root's rank
    top: Option<usize>,
    /// Number of elements in the heap
    len: usize,
    cmp: C,
    meter: Meter,
}

impl<K: Ord> BinomialHeap<K> {
    /// Creates an empty max-heap with its own meter
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty max-heap reporting into `meter`
    pub fn with_meter(meter: Meter) -> Self {
        Self::with_comparator_and_meter(natural(), meter)
    }
}

impl<K, C: Compare<K>> BinomialHeap<K, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_meter(cmp, Meter::new())
    }

    /// Creates an empty heap ordered by `cmp`, reporting into `meter`
    pub fn with_comparator_and_meter(cmp: C, meter: Meter) -> Self {
        Self {
            trees: empty_slots(),
            top: None,
            len: 0,
            cmp,
            meter,
        }
    }

    /// Returns the comparator
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Iterates over the resident trees as `(rank, root key)`, by ascending rank
    ///
    /// The ranks are exactly the set bits of [`len`](PriorityQueue::len).
    pub fn roots(&self) -> impl Iterator<Item = (usize, &K)> + '_ {
        self.trees
            .iter()
            .enumerate()
            .filter_map(|(rank, slot)| slot.as_ref().map(|root| (rank, &root.key)))
    }

    /// Moves every tree of `other` into this heap, leaving `other` empty
    ///
    /// **Time Complexity**: O(log n) amortized
    ///
    /// Every slot of the donor is visited in ascending rank order and its tree,
    /// if any, is inserted with carry propagation. There are at most
    /// [`RANK_SLOTS`] slots, and each carry merge destroys one resident tree,
    /// which pays for it.
    pub fn append(&mut self, other: &mut Self) {
        trace!("binomial meld: {} + {} elements", self.len, other.len);
        self.len += mem::take(&mut other.len);
        other.top = None;
        for rank in 0..other.trees.len() {
            self.meter.tick();
            if let Some(tree) = other.trees[rank].take() {
                self.insert_tree(tree);
            }
        }
    }

    /// The root node the top cache points at
    fn top_root(&self) -> Option<&Node<K>> {
        self.top.and_then(|rank| self.trees[rank].as_deref())
    }

    /// Links two binomial trees of the same rank into one tree of rank+1
    ///
    /// **Time Complexity**: O(1)
    ///
    /// The dominating root becomes the parent (`first` on ties) and adopts the
    /// other root as its last child. Both trees must have the same rank; the
    /// carry loop in [`insert_tree`](Self::insert_tree) is the only caller and
    /// only ever links a tree with the occupant of its own rank slot.
    fn merge_trees(&self, mut first: Box<Node<K>>, mut second: Box<Node<K>>) -> Box<Node<K>> {
        debug_assert_eq!(first.rank, second.rank, "linked trees must share a rank");
        if self.meter.compare(&self.cmp, &first.key, &second.key) {
            mem::swap(&mut first, &mut second);
        }
        first.children.push(second);
        first.rank = checked_increment(first.rank);
        first
    }

    /// Inserts a tree into the root table with carry propagation
    ///
    /// **Algorithm**: This is analogous to binary addition
    /// 1. While the slot at the tree's rank is occupied, take the occupant and
    ///    link it with the tree, producing a tree one rank higher
    /// 2. Place the tree in its (now empty) slot
    /// 3. Cache it as the top if it dominates the current top
    ///
    /// If the occupant taken in step 1 was the cached top, the old top now
    /// sits inside the carried tree, whose root dominates it. Step 3 still
    /// costs its one comparison against the old top key and then re-caches.
    fn insert_tree(&mut self, mut tree: Box<Node<K>>) {
        let mut top_carried = false;
        loop {
            let rank = usize::from(tree.rank);
            let Some(occupant) = self.trees[rank].take() else {
                break;
            };
            self.meter.tick();
            if self.top == Some(rank) {
                self.top = None;
                top_carried = true;
            }
            tree = self.merge_trees(tree, occupant);
        }

        let rank = usize::from(tree.rank);
        let dominates = match self.top_root() {
            Some(top) => !self.meter.compare(&self.cmp, &tree.key, &top.key),
            None if top_carried => {
                // the old top key is at or below the root of `tree`
                let _ = self.meter.compare(&self.cmp, &tree.key, &tree.key);
                true
            }
            None => true,
        };
        if dominates {
            self.top = Some(rank);
        }
        self.trees[rank] = Some(tree);
    }

    /// Finds the dominating root by scanning every rank slot
    fn update_top(&mut self) {
        if self.len == 0 {
            self.top = None;
            return;
        }

        for rank in 0..self.trees.len() {
            self.meter.tick();
            let Some(root) = self.trees[rank].as_deref() else {
                continue;
            };
            let dominates = match self.top_root() {
                Some(top) => !self.meter.compare(&self.cmp, &root.key, &top.key),
                None => true,
            };
            if dominates {
                self.top = Some(rank);
            }
        }
    }
}

impl<K, C: Compare<K>> PriorityQueue<K> for BinomialHeap<K, C> {
    fn top(&self) -> Result<&K, HeapError> {
        self.top_root().map(|root| &root.key).ok_or(HeapError::Empty)
    }

    /// Inserts a key as a single-node tree
    ///
    /// **Time Complexity**: O(log n) worst-case, O(1) amortized
    fn push(&mut self, key: K) {
        self.len += 1;
        self.insert_tree(Node::singleton(key));
    }

    /// Removes and returns the dominating key
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Take the tree at the cached top's rank slot (unique per rank)
    /// 2. Reinsert each child of its root; a child of rank r is a valid Bᵣ tree
    /// 3. Rescan all rank slots for the new dominating root
    fn pop(&mut self) -> Result<K, HeapError> {
        let rank = self.top.take().ok_or(HeapError::Empty)?;
        let root = self.trees[rank].take().ok_or(HeapError::Empty)?;
        self.len -= 1;

        let Node { key, children, .. } = *root;
        for child in children {
            self.meter.tick();
            self.insert_tree(child);
        }
        self.update_top();
        Ok(key)
    }

    fn clear(&mut self) {
        for slot in self.trees.iter_mut() {
            *slot = None;
        }
        self.top = None;
        self.len = 0;
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

impl<K, C: Compare<K>> Meld<K> for BinomialHeap<K, C> {
    fn meld(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<K, C: Compare<K> + Default> Default for BinomialHeap<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for BinomialHeap<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.assign(iter);
        heap
    }
}

impl<K, C: Compare<K>> Extend<K> for BinomialHeap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for BinomialHeap<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<_> = self
            .trees
            .iter()
            .enumerate()
            .filter_map(|(rank, slot)| slot.as_ref().map(|root| (rank, &root.key)))
            .collect();
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("roots", &roots)
            .finish_non_exhaustive()
    }
}
