//! Comparison sorts
//!
//! Small reference sorts used as baselines next to the heaps. The in-place
//! sorts take `&mut [T]`; [`merge_sort`] and [`heap_sort`] leave their input
//! alone and return a new `Vec`. None of them promise stability.
//!
//! ```rust
//! use classic_heaps::sort::{insertion_sort, merge_sort};
//!
//! let mut xs = [5, 3, 3, 1];
//! insertion_sort(&mut xs);
//! assert_eq!(xs, [1, 3, 3, 5]);
//!
//! let ys = [2, 9, 4];
//! assert_eq!(merge_sort(&ys), vec![2, 4, 9]);
//! assert_eq!(ys, [2, 9, 4]);
//! ```

use crate::traits::Heap;

/// Repeated passes swapping adjacent out-of-order pairs until a pass makes no
/// swap. Each pass leaves one more element in place at the end.
pub fn bubble_sort<T: Ord>(xs: &mut [T]) {
    let mut unsorted = xs.len();
    let mut swapped = true;

    while swapped && unsorted > 1 {
        swapped = false;
        for i in 0..unsorted - 1 {
            if xs[i + 1] < xs[i] {
                xs.swap(i, i + 1);
                swapped = true;
            }
        }
        unsorted -= 1;
    }
}

/// Moves each element left past every larger predecessor.
pub fn insertion_sort<T: Ord>(xs: &mut [T]) {
    for i in 1..xs.len() {
        let mut j = i;
        while j > 0 && xs[j] < xs[j - 1] {
            xs.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Grows a sorted prefix by swapping in the minimum of the unsorted suffix.
pub fn selection_sort<T: Ord>(xs: &mut [T]) {
    for i in 0..xs.len().saturating_sub(1) {
        let mut min = i;
        for j in i + 1..xs.len() {
            if xs[j] < xs[min] {
                min = j;
            }
        }
        xs.swap(i, min);
    }
}

/// Gapped insertion sort with gaps n/2, n/4, ..., 1.
pub fn shell_sort<T: Ord>(xs: &mut [T]) {
    let mut gap = xs.len() / 2;
    while gap > 0 {
        for i in gap..xs.len() {
            let mut j = i;
            while j >= gap && xs[j] < xs[j - gap] {
                xs.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Top-down merge sort returning a sorted copy of `xs`.
pub fn merge_sort<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    if xs.len() <= 1 {
        return xs.to_vec();
    }

    let (left, right) = xs.split_at(xs.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if l < r {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Sorts by inserting everything into an `H` and draining it.
///
/// ```rust
/// use classic_heaps::binomial::BinomialHeap;
/// use classic_heaps::sort::heap_sort;
///
/// assert_eq!(heap_sort::<BinomialHeap<_>, _>(vec![3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn heap_sort<H, T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    H: Heap<T>,
    T: Ord,
{
    let mut heap = H::new();
    for item in items {
        heap.insert(item);
    }

    let mut sorted = Vec::with_capacity(heap.len());
    while let Some(item) = heap.pop() {
        sorted.push(item);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::BinaryHeap;

    #[test]
    fn test_in_place_sorts_small_inputs() {
        let sorts: [(&str, fn(&mut [i32])); 4] = [
            ("bubble", bubble_sort),
            ("insertion", insertion_sort),
            ("selection", selection_sort),
            ("shell", shell_sort),
        ];

        for (name, sort) in sorts {
            let mut empty: [i32; 0] = [];
            sort(&mut empty);
            assert!(empty.is_empty(), "{}", name);

            let mut one = [4];
            sort(&mut one);
            assert_eq!(one, [4], "{}", name);

            let mut dups = [5, 3, 3, 1];
            sort(&mut dups);
            assert_eq!(dups, [1, 3, 3, 5], "{}", name);
        }
    }

    #[test]
    fn test_merge_sort_is_pure() {
        let empty: [i32; 0] = [];
        assert_eq!(merge_sort(&empty), Vec::<i32>::new());

        let xs = vec![9, -2, 7, 7, 0];
        assert_eq!(merge_sort(&xs), vec![-2, 0, 7, 7, 9]);
        assert_eq!(xs, vec![9, -2, 7, 7, 0]);
    }

    #[test]
    fn test_heap_sort() {
        let sorted = heap_sort::<BinaryHeap<_>, _>(vec!["pear", "apple", "fig"]);
        assert_eq!(sorted, vec!["apple", "fig", "pear"]);
    }
}
