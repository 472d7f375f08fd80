//! Wall-clock Benchmarks
//!
//! Compares the three heap variants on the workloads the counting report
//! measures: bulk build, push, pop-all and meld.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//! cargo bench --bench heap_perf -- meld
//! ```
//!
//! Keys come from a seeded generator, so every run sees the same input.

use counting_heaps::binary::BinaryHeap;
use counting_heaps::binomial::BinomialHeap;
use counting_heaps::pairing::PairingHeap;
use counting_heaps::{Meld, PriorityQueue};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
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

fn filled<H: PriorityQueue<u64> + Default>(keys: &[u64]) -> H {
    let mut heap = H::default();
    heap.assign(keys.iter().copied());
    heap
}

fn bench_variant<H: Meld<u64> + Default>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    group.sample_size(20);

    for &n in &SIZES {
        let keys = random_keys(n, SEED);
        let donor_keys = random_keys(n, SEED + 1);

        group.bench_with_input(BenchmarkId::new("assign", n), &keys, |b, keys| {
            b.iter(|| black_box(filled::<H>(keys)));
        });

        group.bench_with_input(BenchmarkId::new("push", n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = H::default();
                for &key in keys {
                    heap.push(key);
                }
                black_box(heap)
            });
        });

        group.bench_with_input(BenchmarkId::new("pop_all", n), &keys, |b, keys| {
            b.iter_batched(
                || filled::<H>(keys),
                |mut heap| {
                    while let Ok(key) = heap.pop() {
                        black_box(key);
                    }
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("meld", n), &keys, |b, keys| {
            b.iter_batched(
                || (filled::<H>(keys), filled::<H>(&donor_keys)),
                |(mut heap, donor)| {
                    heap.meld(donor);
                    black_box(heap)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_binary(c: &mut Criterion) {
    bench_variant::<BinaryHeap<u64>>(c, "binary");
}

fn benchmark_binomial(c: &mut Criterion) {
    bench_variant::<BinomialHeap<u64>>(c, "binomial");
}

fn benchmark_pairing(c: &mut Criterion) {
    bench_variant::<PairingHeap<u64>>(c, "pairing");
}

criterion_group!(
    benches,
    benchmark_binary,
    benchmark_binomial,
    benchmark_pairing
);

criterion_main!(benches);
