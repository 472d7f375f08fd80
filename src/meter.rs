//! Operation counting and timing for heap benchmarks
//!
//! A [`Meter`] owns three counters:
//!
//! - **comparisons**: every comparator invocation made by a heap
//! - **swaps**: every element swap made by a heap
//! - **iterations**: structural-work steps, a coarse per-algorithm unit (one per
//!   sift step, one per carry merge, one per pairing step)
//!
//! Heaps hold a clone of their meter and report into it. Clones share the
//! same counters, so several heaps built with one meter are measured together.
//! Counters live in `Rc<Cell<_>>`, which makes `Meter` neither `Send` nor
//! `Sync`: a set of counters can only ever be driven from one thread.
//!
//! # Example
//!
//! ```rust
//! use counting_heaps::{Meter, PriorityQueue};
//! use counting_heaps::pairing::PairingHeap;
//!
//! let meter = Meter::new();
//! let mut heap = PairingHeap::with_meter(meter.clone());
//!
//! let result = meter.measure(|| {
//!     for i in 0..100 {
//!         heap.push(i);
//!     }
//!     while heap.pop().is_ok() {}
//! });
//!
//! assert!(result.comparisons > 0);
//! assert_eq!(result.swaps, 0);
//! ```

use compare::Compare;
use log::debug;
use std::cell::Cell;
use std::fmt;
use std::ops::{Add, AddAssign, DivAssign};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    comparisons: Cell<u64>,
    swaps: Cell<u64>,
    iterations: Cell<u64>,
}

fn bump(counter: &Cell<u64>) {
    counter.set(counter.get() + 1);
}

/// Shared handle to a set of operation counters
#[derive(Clone, Debug, Default)]
pub struct Meter {
    counters: Rc<Counters>,
}

impl Meter {
    /// Creates a meter with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one comparison and returns `cmp.compares_lt(a, b)`
    ///
    /// A `true` result means `a` must not dominate `b`.
    #[inline]
    pub fn compare<K: ?Sized, C: Compare<K>>(&self, cmp: &C, a: &K, b: &K) -> bool {
        bump(&self.counters.comparisons);
        cmp.compares_lt(a, b)
    }

    /// Counts one swap and exchanges `slice[a]` and `slice[b]`
    #[inline]
    pub fn swap<K>(&self, slice: &mut [K], a: usize, b: usize) {
        bump(&self.counters.swaps);
        slice.swap(a, b);
    }

    /// Counts one structural-work step
    #[inline]
    pub fn tick(&self) {
        bump(&self.counters.iterations);
    }

    /// Zeroes all counters
    pub fn reset(&self) {
        self.counters.comparisons.set(0);
        self.counters.swaps.set(0);
        self.counters.iterations.set(0);
    }

    /// Comparisons counted since the last reset
    pub fn comparisons(&self) -> u64 {
        self.counters.comparisons.get()
    }

    /// Swaps counted since the last reset
    pub fn swaps(&self) -> u64 {
        self.counters.swaps.get()
    }

    /// Structural-work steps counted since the last reset
    pub fn iterations(&self) -> u64 {
        self.counters.iterations.get()
    }

    /// Returns true if `self` and `other` report into the same counters
    pub fn shares_counters_with(&self, other: &Meter) -> bool {
        Rc::ptr_eq(&self.counters, &other.counters)
    }

    /// Snapshot of the counters paired with an elapsed time
    pub fn snapshot(&self, elapsed: Duration) -> Measurement {
        Measurement {
            elapsed,
            comparisons: self.comparisons(),
            swaps: self.swaps(),
            iterations: self.iterations(),
        }
    }

    /// Resets the counters, times `block` and returns the resulting snapshot
    ///
    /// The counters are not reset afterwards: reading them again, or calling
    /// [`snapshot`](Meter::snapshot), still shows the work done by `block`.
    pub fn measure<F: FnOnce()>(&self, block: F) -> Measurement {
        self.measure_with(block).1
    }

    /// Like [`measure`](Meter::measure), also returning the block's result
    pub fn measure_with<R, F: FnOnce() -> R>(&self, block: F) -> (R, Measurement) {
        self.reset();
        let start = Instant::now();
        let result = block();
        let measurement = self.snapshot(start.elapsed());
        debug!("measured {:?}", measurement);
        (result, measurement)
    }

    /// Runs `repetitions` independent trials of `block` and averages them
    ///
    /// Each trial is a separate [`measure`](Meter::measure) call, so counters
    /// are reset between trials. The block is responsible for building fresh
    /// heaps if the trials must not see each other's state.
    pub fn measure_repeated<F: FnMut()>(&self, repetitions: u32, mut block: F) -> Measurement {
        let mut total = Measurement::default();
        for _ in 0..repetitions {
            total += self.measure(&mut block);
        }
        total /= repetitions;
        total
    }
}

/// Result of a measurement: elapsed time plus the three operation counts
///
/// Supports `+=` to accumulate trials and `/= n` to average them, rounding
/// each field to the nearest integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    /// Wall clock time spent in the measured block
    pub elapsed: Duration,
    /// Comparator invocations
    pub comparisons: u64,
    /// Element swaps
    pub swaps: u64,
    /// Structural-work steps
    pub iterations: u64,
}

impl Measurement {
    /// Text layout that repeats the swap count in the fourth column
    ///
    /// Older reports printed `elapsed-ms comparisons swaps swaps`. This keeps
    /// that layout for consumers that parse it; `Display` prints the
    /// iteration count in the fourth column instead.
    pub fn legacy(&self) -> LegacyLayout<'_> {
        LegacyLayout(self)
    }
}

/// Whole milliseconds, rounded to nearest
fn rounded_millis(elapsed: Duration) -> u128 {
    (elapsed.as_nanos() + 500_000) / 1_000_000
}

fn div_round(value: u64, divisor: u64) -> u64 {
    value / divisor + u64::from(value % divisor >= divisor - divisor / 2)
}

impl AddAssign for Measurement {
    fn add_assign(&mut self, other: Self) {
        self.elapsed += other.elapsed;
        self.comparisons += other.comparisons;
        self.swaps += other.swaps;
        self.iterations += other.iterations;
    }
}

impl Add for Measurement {
    type Output = Measurement;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl DivAssign<u32> for Measurement {
    /// Divides every field by `n`, rounding half away from zero
    ///
    /// Dividing by zero leaves the measurement unchanged.
    fn div_assign(&mut self, n: u32) {
        if n == 0 {
            return;
        }
        let divisor = u64::from(n);
        let nanos = self.elapsed.as_nanos();
        let rounded = (nanos + u128::from(n / 2)) / u128::from(n);
        self.elapsed = Duration::new(
            (rounded / 1_000_000_000) as u64,
            (rounded % 1_000_000_000) as u32,
        );
        self.comparisons = div_round(self.comparisons, divisor);
        self.swaps = div_round(self.swaps, divisor);
        self.iterations = div_round(self.iterations, divisor);
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            rounded_millis(self.elapsed),
            self.comparisons,
            self.swaps,
            self.iterations
        )
    }
}

/// Display adapter returned by [`Measurement::legacy`]
#[derive(Clone, Copy, Debug)]
pub struct LegacyLayout<'a>(&'a Measurement);

impl fmt::Display for LegacyLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        write!(
            f,
            "{} {} {} {}",
            rounded_millis(m.elapsed),
            m.comparisons,
            m.swaps,
            m.swaps
        )
    }
}
