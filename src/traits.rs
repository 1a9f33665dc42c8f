//! Common traits for heap data structures
//!
//! This module provides a three-tier trait hierarchy for min-heaps:
//!
//! - [`Heap`]: Base trait: insert, peek/minimum, pop/extract_min
//! - [`MeldableHeap`]: Adds a destructive `union` that consumes the donor heap
//! - [`AddressableHeap`]: Adds handle-based `decrease_key` and `remove`
//!
//! [`BinaryHeap`](crate::binary::BinaryHeap) only implements [`Heap`]: array
//! indices move under mutation, so it cannot hand out stable handles.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyHeap,
    /// The new key is not strictly less than the current key
    InvalidDecrease,
    /// The handle no longer refers to a live element of this heap
    StaleHandle,
    /// There is no key strictly below the current minimum to decrease to
    UnsupportedRemove,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::InvalidDecrease => {
                write!(f, "new key is not less than current key")
            }
            HeapError::StaleHandle => {
                write!(f, "handle is no longer valid for this heap")
            }
            HeapError::UnsupportedRemove => {
                write!(f, "key type has no predecessor below the current minimum")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in an addressable heap
///
/// Handles are issued by [`AddressableHeap::insert_with_handle`] and are only
/// meaningful for the heap instance that issued them.
pub trait Handle: Clone + PartialEq + Eq + fmt::Debug {}

/// Base trait for min-heap data structures
///
/// # Example
///
/// ```rust
/// use classic_heaps::Heap;
/// use classic_heaps::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.minimum(), Ok(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.pop(), Some(2));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    fn insert(&mut self, item: T);

    /// Returns the minimum element, or `None` if the heap is empty
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` if the heap is empty
    fn pop(&mut self) -> Option<T>;

    /// Returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    fn minimum(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap holds no elements.
    fn extract_min(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::EmptyHeap)
    }
}

/// Heaps that can absorb another heap of the same type
pub trait MeldableHeap<T: Ord>: Heap<T> {
    /// Moves every element of `other` into this heap
    ///
    /// `other` is consumed. Handles it issued are rejected afterwards with
    /// `HeapError::StaleHandle`.
    fn union(&mut self, other: Self);
}

/// Heaps exposing per-element handles for `decrease_key` and `remove`
///
/// # Example
///
/// ```rust
/// use classic_heaps::{AddressableHeap, Heap};
/// use classic_heaps::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(10);
/// let handle = heap.insert_with_handle(40);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.minimum(), Ok(&5));
/// assert_eq!(heap.remove(&handle), Ok(5));
/// assert_eq!(heap.minimum(), Ok(&10));
/// ```
pub trait AddressableHeap<T: Ord>: MeldableHeap<T> {
    /// The handle type issued by this heap
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    fn insert_with_handle(&mut self, item: T) -> Self::Handle;

    /// Returns the current key of the element behind `handle`
    ///
    /// # Errors
    /// Returns `HeapError::StaleHandle` if the element is gone.
    fn get(&self, handle: &Self::Handle) -> Result<&T, HeapError>;

    /// Lowers the key of the element behind `handle` to `new_key`
    ///
    /// # Errors
    /// - `HeapError::StaleHandle` if the element is gone
    /// - `HeapError::InvalidDecrease` if `new_key` is not less than the current key
    fn decrease_key(&mut self, handle: &Self::Handle, new_key: T) -> Result<(), HeapError>;

    /// Removes the element behind `handle` and returns its key
    ///
    /// # Errors
    /// Returns `HeapError::StaleHandle` if the element is gone.
    fn remove(&mut self, handle: &Self::Handle) -> Result<T, HeapError>;

    /// Removes an element by decreasing it below the minimum and extracting it
    ///
    /// Only available for keys with a [`Predecessor`]. Returns the key the
    /// element held before the call. [`remove`](Self::remove) works for every
    /// key type and should be preferred.
    ///
    /// # Errors
    /// - `HeapError::StaleHandle` if the element is gone
    /// - `HeapError::UnsupportedRemove` if the minimum has no predecessor
    fn remove_by_decrement(&mut self, handle: &Self::Handle) -> Result<T, HeapError>
    where
        T: Predecessor + Clone,
    {
        let original = self.get(handle)?.clone();
        let floor = self
            .minimum()?
            .predecessor()
            .ok_or(HeapError::UnsupportedRemove)?;
        self.decrease_key(handle, floor)?;
        self.extract_min()?;
        Ok(original)
    }
}

/// Keys that have a next-smaller value
pub trait Predecessor: Sized {
    /// Returns the greatest value strictly less than `self`, if any
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_predecessor_integer {
    ($($int:ty),*) => {
        $(
            impl Predecessor for $int {
                #[inline]
                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_predecessor_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
