//! Operation Count Report
//!
//! Prints averaged [`Measurement`]s for every heap variant, one line per
//! workload and size:
//!
//! ```text
//! variant   workload  n       ms comparisons swaps iterations
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench op_counts
//! cargo bench --bench op_counts -- pairing      # a single variant
//! RUST_LOG=debug cargo bench --bench op_counts  # every trial's snapshot
//! ```
//!
//! Each line averages [`TRIALS`] independent trials on fresh heaps.

use counting_heaps::{AnyHeap, HeapKind, Measurement, Meter, PriorityQueue};
use log::info;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];
const TRIALS: u32 = 5;
const SEED: u64 = 0x5eed;

/// Linear congruential generator for reproducible keys
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() >> 16).collect()
}

fn filled(kind: HeapKind, meter: &Meter, keys: &[u64]) -> AnyHeap<u64> {
    let mut heap = AnyHeap::with_meter(kind, meter.clone());
    heap.assign(keys.iter().copied());
    heap
}

/// Runs the four workloads for one variant and size
fn report(kind: HeapKind, n: usize) {
    let meter = Meter::new();
    let keys = random_keys(n, SEED);
    let donor_keys = random_keys(n, SEED + 1);

    let assign = meter.measure_repeated(TRIALS, || {
        filled(kind, &meter, &keys);
    });

    let push = meter.measure_repeated(TRIALS, || {
        let mut heap = AnyHeap::with_meter(kind, meter.clone());
        heap.extend(keys.iter().copied());
    });

    let mut pop_all = Measurement::default();
    for _ in 0..TRIALS {
        let mut heap = filled(kind, &meter, &keys);
        pop_all += meter.measure(|| while heap.pop().is_ok() {});
    }
    pop_all /= TRIALS;

    let mut meld = Measurement::default();
    for _ in 0..TRIALS {
        let mut heap = filled(kind, &meter, &keys);
        let mut donor = filled(kind, &meter, &donor_keys);
        meld += meter.measure(|| heap.append(&mut donor));
    }
    meld /= TRIALS;

    for (workload, m) in [
        ("assign", assign),
        ("push", push),
        ("pop_all", pop_all),
        ("meld", meld),
    ] {
        println!("{:<9} {:<9} {:<8} {}", kind, workload, n, m);
    }
}

fn main() {
    env_logger::init();

    // cargo bench passes `--bench`; any other argument filters by variant
    let filter: Option<HeapKind> = std::env::args()
        .skip(1)
        .filter(|arg| !arg.starts_with("--"))
        .find_map(|arg| arg.parse().ok());

    info!("{} trials per line", TRIALS);
    println!(
        "{:<9} {:<9} {:<8} ms comparisons swaps iterations",
        "variant", "workload", "n"
    );
    for kind in HeapKind::ALL {
        if filter.is_some_and(|wanted| wanted != kind) {
            continue;
        }
        for n in SIZES {
            report(kind, n);
        }
    }
}
