//! Common traits for persistent heap data structures
//!
//! This module provides the two-tier trait hierarchy every heap in the crate is
//! built on:
//!
//! - [`MergeStrategy`]: the tree-shape capability. A strategy knows how to
//!   build a singleton, merge two valid shapes into one and peel off the
//!   minimum. Leftist, weight-biased and binomial trees each implement it.
//! - [`PersistentHeap`]: the uniform heap surface (`empty`, `insert`, `merge`,
//!   `find_min`, `delete_min`, `of_list`, ...). The generic
//!   [`Heap`](crate::facade::Heap) façade implements it on top of any
//!   strategy, and [`ExplicitMin`](crate::explicit_min::ExplicitMin) wraps any
//!   implementor to cache the minimum.
//!
//! All operations take `&self` and return a new value; the receiver is never
//! modified. Values share structure, so cloning a heap is O(1).

use std::fmt;

use crate::iter::Sorted;

/// Error type for heap operations
///
/// Accessing the minimum of an empty heap is the only recoverable failure in
/// the crate. Structural precondition violations (such as linking binomial
/// trees of different rank) are programming errors and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `find_min`/`delete_min` was called on an empty heap
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty: no minimum element"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Tree-shape capability consumed by the generic heap façade
///
/// Implementors are immutable, persistent tree shapes. `merge` must return a
/// shape satisfying the strategy's structural invariant whenever both inputs
/// do, and `remove_min` must keep every remaining element.
///
/// The trait holds only what the façade consumes. Node construction and
/// structural accessors differ in shape between strategies and stay inherent
/// on each one:
///
/// - [`LeftistTree`](crate::leftist::LeftistTree): `make`, `rank`, `root`,
///   `left`, `right`
/// - [`WeightBiasedTree`](crate::weight_biased::WeightBiasedTree): `make`,
///   `weight`, `root`, `left`, `right`
/// - [`BinomialForest`](crate::binomial::BinomialForest): `insert_tree` and
///   `trees`, with [`BinomialTree`](crate::binomial::BinomialTree) providing
///   `link`, `rank`, `root` and `children`
///
/// The shared root accessor is [`min_elem`](Self::min_elem).
pub trait MergeStrategy: Clone {
    /// Element type, ordered by `Ord`
    type Elem: Ord + Clone;

    /// The canonical empty shape
    fn empty() -> Self;

    /// Returns true if the shape holds no elements
    fn is_empty(&self) -> bool;

    /// A one-element shape
    fn singleton(x: Self::Elem) -> Self;

    /// Adds one element
    ///
    /// Defaults to merging with a singleton; strategies with a cheaper
    /// dedicated insertion path override it with an equivalent result.
    fn insert(&self, x: Self::Elem) -> Self {
        Self::singleton(x).merge(self)
    }

    /// Merges two shapes into one holding the elements of both
    fn merge(&self, other: &Self) -> Self;

    /// Returns the minimum element, or `None` when empty
    fn min_elem(&self) -> Option<&Self::Elem>;

    /// Returns the shape without its minimum element, or `None` when empty
    fn remove_min(&self) -> Option<Self>;

    /// Checks the strategy's structural invariant over the whole shape
    fn verify_invariants(&self) -> bool;
}

/// Uniform interface for persistent min-heaps
///
/// # Example
///
/// ```rust
/// use persistent_heaps::{LeftistHeap, PersistentHeap};
///
/// let heap = LeftistHeap::of_list([3, 1, 2]);
/// let smaller = heap.delete_min().unwrap();
///
/// assert_eq!(heap.find_min(), Ok(&1));
/// assert_eq!(smaller.find_min(), Ok(&2));
/// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
/// ```
pub trait PersistentHeap: Clone + Sized {
    /// Element type, ordered by `Ord`
    type Elem: Ord + Clone;

    /// Creates a new empty heap
    fn empty() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns a heap holding `x` in addition to every element of `self`
    ///
    /// # Time Complexity
    /// O(log n) worst-case for every strategy in this crate.
    fn insert(&self, x: Self::Elem) -> Self;

    /// Returns a heap holding the elements of both heaps
    ///
    /// # Time Complexity
    /// O(log n) worst-case.
    fn merge(&self, other: &Self) -> Self;

    /// Returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn find_min(&self) -> Result<&Self::Elem, HeapError>;

    /// Returns the heap without its minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn delete_min(&self) -> Result<Self, HeapError>;

    /// Checks the heap's structural invariants over the whole structure
    fn verify_invariants(&self) -> bool;

    /// Builds a heap from a bulk tournament of pairwise merges
    ///
    /// # Time Complexity
    /// O(n): each round halves the number of trees.
    fn of_list_tournament<I: IntoIterator<Item = Self::Elem>>(items: I) -> Self;

    /// Builds a heap by inserting each element left to right
    ///
    /// # Time Complexity
    /// O(n log n).
    fn of_list<I: IntoIterator<Item = Self::Elem>>(items: I) -> Self {
        items
            .into_iter()
            .fold(Self::empty(), |heap, x| heap.insert(x))
    }

    /// Returns the minimum element together with the heap without it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn pop_min(&self) -> Result<(Self::Elem, Self), HeapError> {
        let min = self.find_min()?.clone();
        Ok((min, self.delete_min()?))
    }

    /// Inserts an element, replacing `self` with the new heap
    fn push(&mut self, x: Self::Elem) {
        *self = self.insert(x);
    }

    /// Removes and returns the minimum, replacing `self` with the rest
    fn pop(&mut self) -> Option<Self::Elem> {
        let (min, rest) = self.pop_min().ok()?;
        *self = rest;
        Some(min)
    }

    /// Iterates over the elements in ascending order without consuming `self`
    fn sorted(&self) -> Sorted<Self> {
        Sorted::new(self.clone())
    }

    /// Decodes the heap into an ascending vector
    fn into_sorted_vec(self) -> Vec<Self::Elem> {
        Sorted::new(self).collect()
    }
}
