//! Instrumented Heap Data Structures for Rust
//!
//! This crate provides three priority queues behind one contract, each of
//! which counts the primitive operations it performs, so that heap strategies
//! can be compared by their actual cost and not only by their Big-O bounds.
//!
//! # Features
//!
//! - **Binary Heap**: O(log n) push and pop; O(n) bulk build; O(n) meld
//! - **Binomial Heap**: O(1) amortized push; O(log n) pop; O(log n) amortized meld
//! - **Pairing Heap**: O(1) push and meld; O(log n) amortized pop
//!
//! Every comparator call, every element swap and every structural-work step
//! (sift step, carry merge, pairing step) is reported to a [`Meter`]. Wrapping
//! a workload in [`Meter::measure`] resets the counters, times the workload and
//! returns a [`Measurement`].
//!
//! The element on top is the one that dominates all others under the heap's
//! comparator, any [`compare::Compare`] implementation. The default,
//! [`compare::Natural`], makes every heap a max-heap; `natural().rev()` makes
//! it a min-heap.
//!
//! # Example
//!
//! ```rust
//! use counting_heaps::{Meld, Meter, PriorityQueue};
//! use counting_heaps::binomial::BinomialHeap;
//!
//! let meter = Meter::new();
//! let mut heap = BinomialHeap::with_meter(meter.clone());
//! let mut other = BinomialHeap::with_meter(meter.clone());
//!
//! let result = meter.measure(|| {
//!     heap.assign([1, 3, 5]);
//!     other.assign([2, 4, 6]);
//!     heap.meld(other);
//! });
//!
//! assert_eq!(heap.len(), 6);
//! assert_eq!(heap.pop(), Ok(6));
//! assert!(result.comparisons > 0);
//! println!("{result}"); // elapsed-ms comparisons swaps iterations
//! ```

pub mod binary;
pub mod binomial;
pub mod kind;
pub mod meter;
pub mod pairing;
pub mod rank;
pub mod traits;

// Re-export the main types for convenience
pub use kind::{AnyHeap, HeapKind, ParseHeapKindError};
pub use meter::{Measurement, Meter};
pub use traits::{HeapError, Meld, PriorityQueue};
