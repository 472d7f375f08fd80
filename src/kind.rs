//! Run-time selection between the heap variants
//!
//! The variants form a closed set, so generic code over [`PriorityQueue`] is
//! the normal way to use them. [`AnyHeap`] is for the boundary where the
//! variant is picked at run time, e.g. from a command-line argument:
//!
//! ```rust
//! use counting_heaps::{AnyHeap, HeapKind, PriorityQueue};
//!
//! let kind: HeapKind = "pairing".parse().unwrap();
//! let mut heap = AnyHeap::new(kind);
//! heap.assign([4, 8, 1]);
//!
//! assert_eq!(heap.kind(), HeapKind::Pairing);
//! assert_eq!(heap.pop(), Ok(8));
//! ```

use crate::binary::BinaryHeap;
use crate::binomial::BinomialHeap;
use crate::meter::Meter;
use crate::pairing::PairingHeap;
use crate::traits::{HeapError, Meld, PriorityQueue};
use compare::{natural, Compare, Natural};
use log::trace;
use std::fmt;
use std::str::FromStr;

/// Names the three heap variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    /// [`BinaryHeap`]
    Binary,
    /// [`BinomialHeap`]
    Binomial,
    /// [`PairingHeap`]
    Pairing,
}

impl HeapKind {
    /// Every variant, in a fixed order
    pub const ALL: [HeapKind; 3] = [HeapKind::Binary, HeapKind::Binomial, HeapKind::Pairing];

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            HeapKind::Binary => "binary",
            HeapKind::Binomial => "binomial",
            HeapKind::Pairing => "pairing",
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown heap name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeapKindError {
    input: String,
}

impl fmt::Display for ParseHeapKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heap kind {:?}, expected one of: binary, binomial, pairing",
            self.input
        )
    }
}

impl std::error::Error for ParseHeapKindError {}

impl FromStr for HeapKind {
    type Err = ParseHeapKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeapKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHeapKindError {
                input: s.to_string(),
            })
    }
}

/// A heap whose variant is chosen at run time
pub enum AnyHeap<K, C = Natural<K>> {
    /// Array-backed binary heap
    Binary(BinaryHeap<K, C>),
    /// Forest of binomial trees
    Binomial(BinomialHeap<K, C>),
    /// Single multiway tree
    Pairing(PairingHeap<K, C>),
}

macro_rules! dispatch {
    ($heap:expr, $inner:ident => $body:expr) => {
        match $heap {
            AnyHeap::Binary($inner) => $body,
            AnyHeap::Binomial($inner) => $body,
            AnyHeap::Pairing($inner) => $body,
        }
    };
}

impl<K: Ord> AnyHeap<K> {
    /// Creates an empty max-heap of the given variant with its own meter
    pub fn new(kind: HeapKind) -> Self {
        Self::with_comparator_and_meter(kind, natural(), Meter::new())
    }

    /// Creates an empty max-heap of the given variant reporting into `meter`
    pub fn with_meter(kind: HeapKind, meter: Meter) -> Self {
        Self::with_comparator_and_meter(kind, natural(), meter)
    }
}

impl<K, C: Compare<K>> AnyHeap<K, C> {
    /// Creates an empty heap of the given variant ordered by `cmp`
    pub fn with_comparator_and_meter(kind: HeapKind, cmp: C, meter: Meter) -> Self {
        match kind {
            HeapKind::Binary => AnyHeap::Binary(BinaryHeap::with_comparator_and_meter(cmp, meter)),
            HeapKind::Binomial => {
                AnyHeap::Binomial(BinomialHeap::with_comparator_and_meter(cmp, meter))
            }
            HeapKind::Pairing => {
                AnyHeap::Pairing(PairingHeap::with_comparator_and_meter(cmp, meter))
            }
        }
    }

    /// The variant of this heap
    pub fn kind(&self) -> HeapKind {
        match self {
            AnyHeap::Binary(_) => HeapKind::Binary,
            AnyHeap::Binomial(_) => HeapKind::Binomial,
            AnyHeap::Pairing(_) => HeapKind::Pairing,
        }
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// Heaps of the same variant use that variant's meld. Across variants
    /// there is no structural meld, so the donor is drained one pop and one
    /// push at a time, which costs O(m log m) and is counted like any other
    /// pop and push.
    pub fn append(&mut self, other: &mut Self) {
        match (self, other) {
            (AnyHeap::Binary(heap), AnyHeap::Binary(donor)) => heap.append(donor),
            (AnyHeap::Binomial(heap), AnyHeap::Binomial(donor)) => heap.append(donor),
            (AnyHeap::Pairing(heap), AnyHeap::Pairing(donor)) => heap.append(donor),
            (heap, donor) => {
                trace!(
                    "draining {} heap of {} elements into {} heap",
                    donor.kind(),
                    donor.len(),
                    heap.kind()
                );
                while let Ok(key) = donor.pop() {
                    heap.push(key);
                }
            }
        }
    }
}

impl<K, C: Compare<K>> PriorityQueue<K> for AnyHeap<K, C> {
    fn top(&self) -> Result<&K, HeapError> {
        dispatch!(self, heap => heap.top())
    }

    fn push(&mut self, key: K) {
        dispatch!(self, heap => heap.push(key))
    }

    fn pop(&mut self) -> Result<K, HeapError> {
        dispatch!(self, heap => heap.pop())
    }

    fn clear(&mut self) {
        dispatch!(self, heap => heap.clear())
    }

    fn len(&self) -> usize {
        dispatch!(self, heap => heap.len())
    }

    fn assign<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        dispatch!(self, heap => heap.assign(iter))
    }

    fn meter(&self) -> &Meter {
        dispatch!(self, heap => heap.meter())
    }
}

impl<K, C: Compare<K>> Meld<K> for AnyHeap<K, C> {
    fn meld(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<K, C: Compare<K>> Extend<K> for AnyHeap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for AnyHeap<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyHeap::Binary(heap) => f.debug_tuple("Binary").field(heap).finish(),
            AnyHeap::Binomial(heap) => f.debug_tuple("Binomial").field(heap).finish(),
            AnyHeap::Pairing(heap) => f.debug_tuple("Pairing").field(heap).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("binary".parse(), Ok(HeapKind::Binary));
        assert_eq!("Binomial".parse(), Ok(HeapKind::Binomial));
        assert_eq!(" PAIRING ".parse(), Ok(HeapKind::Pairing));

        let err = "fibonacci".parse::<HeapKind>().unwrap_err();
        assert!(err.to_string().contains("fibonacci"));
    }

    #[test]
    fn test_display_round_trips() {
        for kind in HeapKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_every_kind_sorts() {
        for kind in HeapKind::ALL {
            let mut heap = AnyHeap::new(kind);
            heap.assign([3, 9, 1, 7, 5]);
            assert_eq!(heap.kind(), kind);
            let popped: Vec<_> = std::iter::from_fn(|| heap.pop().ok()).collect();
            assert_eq!(popped, vec![9, 7, 5, 3, 1], "{kind}");
        }
    }

    #[test]
    fn test_same_kind_meld_uses_variant_meld() {
        let mut heap = AnyHeap::new(HeapKind::Pairing);
        heap.assign(0..10);
        let mut donor = AnyHeap::new(HeapKind::Pairing);
        donor.assign(10..20);

        let meter = heap.meter().clone();
        let m = meter.measure(|| heap.append(&mut donor));

        assert_eq!(m.comparisons, 1);
        assert_eq!(heap.len(), 20);
        assert!(donor.is_empty());
    }

    #[test]
    fn test_cross_kind_meld_drains_donor() {
        let mut heap = AnyHeap::new(HeapKind::Binary);
        heap.assign([1, 3, 5]);
        let mut donor = AnyHeap::new(HeapKind::Binomial);
        donor.assign([2, 4, 6]);

        heap.meld(donor);

        let popped: Vec<_> = std::iter::from_fn(|| heap.pop().ok()).collect();
        assert_eq!(popped, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_shared_meter() {
        let meter = Meter::new();
        let mut a = AnyHeap::with_meter(HeapKind::Binary, meter.clone());
        let mut b = AnyHeap::with_meter(HeapKind::Binomial, meter.clone());
        assert!(a.meter().shares_counters_with(b.meter()));

        let m = meter.measure(|| {
            a.push(1);
            a.push(2);
            b.push(1);
            b.push(2);
        });
        // one sift-up comparison in a; one link and one top comparison in b
        assert_eq!(m.comparisons, 3);
    }
}
