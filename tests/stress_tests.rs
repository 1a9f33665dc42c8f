//! Stress tests that push the heaps through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load. Random workloads
//! use a seeded `StdRng` so failures reproduce.

use classic_heaps::binary::BinaryHeap;
use classic_heaps::binomial::BinomialHeap;
use classic_heaps::randomized::RandomizedHeap;
use classic_heaps::{AddressableHeap, Heap, HeapError, MeldableHeap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Randomized = RandomizedHeap<i32>;

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in (0..5000).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 5000);

    for i in 0..5000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test many decrease_key operations
fn test_many_decrease_keys<H: AddressableHeap<i32>>() {
    let mut heap = H::new();
    let handles: Vec<_> = (0..1000).map(|i| heap.insert_with_handle(10_000 + i)).collect();

    // Decrease in reverse so each one lands below the current minimum
    for (i, handle) in handles.iter().enumerate().rev() {
        heap.decrease_key(handle, i as i32).unwrap();
        assert_eq!(heap.minimum(), Ok(&(i as i32)));
    }

    for i in 0..1000 {
        assert_eq!(heap.pop(), Some(i));
    }
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..500 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert_eq!(heap.pop(), Some(i));
    }

    let rest: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(rest, (500..1000).collect::<Vec<_>>());
}

/// Test union with large heaps built in several rounds
fn test_large_union<H: MeldableHeap<i32>>() {
    let mut total = H::new();

    for round in 0..10 {
        let mut part = H::new();
        for i in 0..300 {
            part.insert(i * 10 + round);
        }
        total.union(part);
    }

    assert_eq!(total.len(), 3000);
    for i in 0..3000 {
        assert_eq!(total.pop(), Some(i));
    }
}

/// Random mix of every addressable operation, checked against a model
fn test_random_workload<H: AddressableHeap<i32>>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut heap = H::new();
    let mut live: Vec<(H::Handle, i32)> = Vec::new();
    let mut dead: Vec<H::Handle> = Vec::new();

    for _ in 0..4000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                let value = rng.gen_range(-10_000..10_000);
                live.push((heap.insert_with_handle(value), value));
            }
            4 | 5 => {
                let popped = heap.pop();
                let expected = live.iter().map(|(_, v)| *v).min();
                assert_eq!(popped, expected);
                if let Some(value) = popped {
                    // Equal keys may come out in any order; exactly one handle died
                    let pos = live.iter().position(|(h, _)| heap.get(h).is_err()).unwrap();
                    let (handle, key) = live.swap_remove(pos);
                    assert_eq!(key, value);
                    dead.push(handle);
                }
            }
            6 | 7 if !live.is_empty() => {
                let pos = rng.gen_range(0..live.len());
                let new_key = live[pos].1 - rng.gen_range(1..500);
                heap.decrease_key(&live[pos].0, new_key).unwrap();
                live[pos].1 = new_key;
            }
            8 if !live.is_empty() => {
                let pos = rng.gen_range(0..live.len());
                let (handle, value) = live.swap_remove(pos);
                assert_eq!(heap.remove(&handle), Ok(value));
                dead.push(handle);
            }
            _ => {
                if let Some(handle) = dead.last() {
                    assert_eq!(heap.get(handle), Err(HeapError::StaleHandle));
                    assert_eq!(heap.remove(handle), Err(HeapError::StaleHandle));
                }
            }
        }

        assert_eq!(heap.len(), live.len());
    }

    let mut expected: Vec<_> = live.iter().map(|(_, v)| *v).collect();
    expected.sort();
    let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, expected);
}

#[test]
fn test_binary_stress() {
    test_massive_operations::<BinaryHeap<i32>>();
    test_alternating_ops::<BinaryHeap<i32>>();
}

#[test]
fn test_binary_random_sorts() {
    let mut rng = StdRng::seed_from_u64(17);
    let values: Vec<i32> = (0..10_000).map(|_| rng.gen()).collect();

    let heap: BinaryHeap<i32> = values.iter().copied().collect();
    let mut expected = values;
    expected.sort();
    assert_eq!(heap.into_sorted_vec(), expected);
}

#[test]
fn test_binomial_stress() {
    test_massive_operations::<BinomialHeap<i32>>();
    test_many_decrease_keys::<BinomialHeap<i32>>();
    test_alternating_ops::<BinomialHeap<i32>>();
    test_large_union::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_random_workload() {
    for seed in 0..4 {
        test_random_workload::<BinomialHeap<i32>>(seed);
    }
}

#[test]
fn test_randomized_stress() {
    test_massive_operations::<Randomized>();
    test_many_decrease_keys::<Randomized>();
    test_alternating_ops::<Randomized>();
    test_large_union::<Randomized>();
}

#[test]
fn test_randomized_random_workload() {
    for seed in 0..4 {
        test_random_workload::<Randomized>(seed);
    }
}
