//! Heap and sort benchmarks
//!
//! ```bash
//! cargo bench --bench heap_bench
//! ```
//!
//! Inputs are drawn from a seeded `StdRng`, so every run measures the same
//! workloads.

use classic_heaps::binary::BinaryHeap;
use classic_heaps::binomial::BinomialHeap;
use classic_heaps::randomized::RandomizedHeap;
use classic_heaps::sort::{heap_sort, insertion_sort, merge_sort, shell_sort};
use classic_heaps::{AddressableHeap, Heap, MeldableHeap};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Randomized = RandomizedHeap<u32>;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn random_keys(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

fn insert_then_drain<H: Heap<u32>>(keys: &[u32]) -> u64 {
    let mut heap = H::new();
    for &key in keys {
        heap.insert(key);
    }
    let mut sum = 0u64;
    while let Some(key) = heap.pop() {
        sum += u64::from(key);
    }
    sum
}

fn decrease_all<H: AddressableHeap<u32>>(keys: &[u32]) -> usize {
    let mut heap = H::new();
    let handles: Vec<_> = keys.iter().map(|&k| heap.insert_with_handle(k / 2 + u32::MAX / 2)).collect();
    for (handle, &key) in handles.iter().zip(keys) {
        let _ = heap.decrease_key(handle, key / 2);
    }
    heap.len()
}

fn union_halves<H: MeldableHeap<u32>>(keys: &[u32]) -> Option<u32> {
    let (left, right) = keys.split_at(keys.len() / 2);
    let mut a = H::new();
    let mut b = H::new();
    for &key in left {
        a.insert(key);
    }
    for &key in right {
        b.insert(key);
    }
    a.union(b);
    a.pop()
}

fn bench_insert_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_drain");

    for size in SIZES {
        let keys = random_keys(size, 1);
        group.bench_with_input(BenchmarkId::new("binary", size), &keys, |b, keys| {
            b.iter(|| black_box(insert_then_drain::<BinaryHeap<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("binomial", size), &keys, |b, keys| {
            b.iter(|| black_box(insert_then_drain::<BinomialHeap<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("randomized", size), &keys, |b, keys| {
            b.iter(|| black_box(insert_then_drain::<Randomized>(keys)))
        });
    }

    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");

    for size in SIZES {
        let keys = random_keys(size, 2);
        group.bench_with_input(BenchmarkId::new("binomial", size), &keys, |b, keys| {
            b.iter(|| black_box(decrease_all::<BinomialHeap<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("randomized", size), &keys, |b, keys| {
            b.iter(|| black_box(decrease_all::<Randomized>(keys)))
        });
    }

    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for size in SIZES {
        let keys = random_keys(size, 3);
        group.bench_with_input(BenchmarkId::new("binomial", size), &keys, |b, keys| {
            b.iter(|| black_box(union_halves::<BinomialHeap<u32>>(keys)))
        });
        group.bench_with_input(BenchmarkId::new("randomized", size), &keys, |b, keys| {
            b.iter(|| black_box(union_halves::<Randomized>(keys)))
        });
    }

    group.finish();
}

fn bench_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    // quadratic sorts only at the small size
    for size in [100, 2_000] {
        let keys = random_keys(size, 4);
        group.bench_with_input(BenchmarkId::new("merge", size), &keys, |b, keys| {
            b.iter(|| black_box(merge_sort(keys)))
        });
        group.bench_with_input(BenchmarkId::new("shell", size), &keys, |b, keys| {
            b.iter(|| {
                let mut xs = keys.clone();
                shell_sort(&mut xs);
                black_box(xs)
            })
        });
        group.bench_with_input(BenchmarkId::new("heap_binary", size), &keys, |b, keys| {
            b.iter(|| black_box(heap_sort::<BinaryHeap<u32>, _>(keys.iter().copied())))
        });
        if size <= 100 {
            group.bench_with_input(BenchmarkId::new("insertion", size), &keys, |b, keys| {
                b.iter(|| {
                    let mut xs = keys.clone();
                    insertion_sort(&mut xs);
                    black_box(xs)
                })
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_drain,
    bench_decrease_key,
    bench_union,
    bench_sorts
);
criterion_main!(benches);
