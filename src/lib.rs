//! Classic Heap Data Structures for Rust
//!
//! This crate provides three min-heaps behind a shared trait hierarchy:
//!
//! # Features
//!
//! - **Binary Heap**: array-backed; O(1) minimum, O(log n) insert and extract_min
//! - **Binomial Heap**: forest of binomial trees; O(log n) insert, extract_min, union,
//!   decrease_key and remove
//! - **Randomized Heap**: randomized meldable heap; expected O(log n) for every operation
//!
//! The two pointer-linked heaps keep their nodes in a slotmap arena. Their
//! handles are checked on every use: a handle to a removed element, or to an
//! element of another heap, is rejected with [`HeapError::StaleHandle`]
//! instead of touching unrelated memory.
//!
//! # Example
//!
//! ```rust
//! use classic_heaps::binomial::BinomialHeap;
//! use classic_heaps::{AddressableHeap, Heap, MeldableHeap};
//!
//! let mut heap = BinomialHeap::new();
//! let handle = heap.insert_with_handle(5);
//! heap.insert(3);
//!
//! let mut other = BinomialHeap::new();
//! other.insert(4);
//! heap.union(other);
//!
//! heap.decrease_key(&handle, 1).unwrap();
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(3));
//! ```

pub mod binary;
pub mod binomial;
pub mod randomized;
pub mod sort;
mod storage;
pub mod traits;

// Re-export the traits for convenience
pub use traits::{AddressableHeap, Handle, Heap, HeapError, MeldableHeap, Predecessor};
