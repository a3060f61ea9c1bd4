//! Bulk construction and drain benchmarks
//!
//! Compares the two ways of building a heap from a list for every strategy:
//!
//! - **of_list**: left fold of `insert`, O(n log n)
//! - **of_list_tournament**: pairwise tournament merging, O(n)
//!
//! and measures a full `delete_min` drain of the built heap.
//!
//! Run with:
//! ```sh
//! cargo bench --bench bulk_build
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use persistent_heaps::{
    BinomialHeap, ExplicitMinBinomialHeap, LeftistHeap, PersistentHeap, WeightBiasedHeap,
};

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
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

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() >> 16).collect()
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_build<H: PersistentHeap<Elem = u64>>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{}/build", name));
    for &n in &SIZES {
        let values = random_values(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("of_list", n), &values, |b, values| {
            b.iter(|| black_box(H::of_list(values.iter().copied())))
        });
        group.bench_with_input(
            BenchmarkId::new("of_list_tournament", n),
            &values,
            |b, values| b.iter(|| black_box(H::of_list_tournament(values.iter().copied()))),
        );
    }
    group.finish();
}

fn bench_drain<H: PersistentHeap<Elem = u64>>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("{}/drain", name));
    for &n in &SIZES {
        let heap = H::of_list_tournament(random_values(n, 7));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("delete_min", n), &heap, |b, heap| {
            b.iter(|| {
                let mut current = heap.clone();
                while let Ok(rest) = current.delete_min() {
                    current = rest;
                }
                black_box(current)
            })
        });
    }
    group.finish();
}

fn bench_leftist(c: &mut Criterion) {
    bench_build::<LeftistHeap<u64>>(c, "leftist");
    bench_drain::<LeftistHeap<u64>>(c, "leftist");
}

fn bench_weight_biased(c: &mut Criterion) {
    bench_build::<WeightBiasedHeap<u64>>(c, "weight_biased");
    bench_drain::<WeightBiasedHeap<u64>>(c, "weight_biased");
}

fn bench_binomial(c: &mut Criterion) {
    bench_build::<BinomialHeap<u64>>(c, "binomial");
    bench_drain::<BinomialHeap<u64>>(c, "binomial");
    bench_drain::<ExplicitMinBinomialHeap<u64>>(c, "explicit_min_binomial");
}

criterion_group!(benches, bench_leftist, bench_weight_biased, bench_binomial);
criterion_main!(benches);
