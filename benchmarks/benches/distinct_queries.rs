//! Head-to-head benchmarks: offline sweep vs per-query recomputation.
//!
//! Compares the batched distinct-count engine against a naive HashSet
//! recompute per query at several sequence lengths, plus the raw cost of the
//! Fenwick tree operations backing it.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use std::collections::HashSet;

use aurelia_core::FenwickTree;
use aurelia_query::{count_distinct, RangeQuery};

// =========================================================================
// Input generation — deterministic LCG, small alphabet to force repeats
// =========================================================================

fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state >> 33
}

fn random_values(len: usize, alphabet: u64, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..len).map(|_| lcg_next(&mut state) % alphabet).collect()
}

fn random_queries(len: usize, count: usize, seed: u64) -> Vec<RangeQuery> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            let a = (lcg_next(&mut state) % len as u64) as usize;
            let b = (lcg_next(&mut state) % len as u64) as usize;
            RangeQuery::new(a.min(b), a.max(b))
        })
        .collect()
}

/// The obvious per-query answer: rebuild a set for every range.
fn naive_distinct(values: &[u64], queries: &[RangeQuery]) -> Vec<u64> {
    queries
        .iter()
        .map(|q| {
            let distinct: HashSet<u64> = values[q.start..=q.end].iter().copied().collect();
            distinct.len() as u64
        })
        .collect()
}

// =========================================================================
// Engine vs naive
// =========================================================================

fn bench_distinct_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_batch");
    let query_count = 1_000;

    for &len in &[1_000, 10_000, 100_000] {
        let values = random_values(len, 64, 42);
        let queries = random_queries(len, query_count, 137);

        group.throughput(Throughput::Elements(query_count as u64));

        group.bench_with_input(BenchmarkId::new("offline_sweep", len), &len, |b, _| {
            b.iter(|| count_distinct(black_box(&values), black_box(&queries)).unwrap())
        });

        // The naive baseline is quadratic-ish; keep it to the small sizes.
        if len <= 10_000 {
            group.bench_with_input(BenchmarkId::new("naive", len), &len, |b, _| {
                b.iter(|| naive_distinct(black_box(&values), black_box(&queries)))
            });
        }
    }

    group.finish();
}

// =========================================================================
// Raw structure operations
// =========================================================================

fn bench_fenwick_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("fenwick");

    for &len in &[1_000, 100_000] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("add_all", len), &len, |b, &len| {
            b.iter(|| {
                let mut tree: FenwickTree<i64> = FenwickTree::new(len);
                for i in 0..len {
                    tree.add(i, 1);
                }
                tree
            })
        });

        let mut tree: FenwickTree<i64> = FenwickTree::new(len);
        for i in (0..len).step_by(3) {
            tree.add(i, 1);
        }
        group.bench_with_input(BenchmarkId::new("prefix_all", len), &len, |b, &len| {
            b.iter(|| {
                let mut total = 0i64;
                for end in 0..=len {
                    total += tree.prefix(black_box(end));
                }
                total
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distinct_batch, bench_fenwick_ops);
criterion_main!(benches);
