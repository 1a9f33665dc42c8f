//! Binary Heap implementation
//!
//! An array-backed binary min-heap that only implements the base [`Heap`]
//! trait. Element indices move on every sift, so this heap exposes no
//! handles and supports neither `union` nor `decrease_key`. For those, use
//! [`BinomialHeap`](crate::binomial::BinomialHeap) or
//! [`RandomizedHeap`](crate::randomized::RandomizedHeap).
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `extract_min` | O(log n)   |
//! | `minimum`     | O(1)       |
//! | `from_vec`    | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use classic_heaps::Heap;
//! use classic_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.minimum(), Ok(&1));
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(2));
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert!(heap.extract_min().is_err());
//! ```

use crate::traits::Heap;

/// An array-backed binary min-heap
///
/// For every index `i`, `data[i] <= data[2i + 1]` and `data[i] <= data[2i + 2]`
/// where those children exist. Comparisons use `<` only, so equal keys are
/// never swapped.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> Heap<T> for BinaryHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        for index in (0..heap.data.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// The heap in array form; `as_slice()[0]` is the minimum
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in array order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drains the heap into ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    #[inline]
    fn parent(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = Self::parent(index) {
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// A child index past the end stands in for the element itself, so it
    /// can never be the smaller one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
