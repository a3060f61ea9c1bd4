//! Explicit-minimum decorator
//!
//! [`ExplicitMin`] wraps any [`PersistentHeap`] and keeps a copy of its
//! minimum element next to it, making `find_min` O(1) even for strategies
//! whose own `find_min` scans (such as the binomial forest).
//!
//! The cache is maintained without rescanning:
//! - `insert` compares the new element with the cached minimum
//! - `merge` compares the two cached minima
//! - `delete_min` asks the underlying heap for its new minimum once, and
//!   falls back to the empty state when nothing is left
//!
//! # Example
//!
//! ```rust
//! use persistent_heaps::{ExplicitMinBinomialHeap, PersistentHeap};
//!
//! let heap = ExplicitMinBinomialHeap::of_list([7, 3, 9]);
//! assert_eq!(heap.find_min(), Ok(&3));
//!
//! let rest = heap.delete_min().unwrap();
//! assert_eq!(rest.find_min(), Ok(&7));
//! ```

use std::fmt;

use crate::facade::BinomialHeap;
use crate::traits::{HeapError, PersistentHeap};

/// A heap paired with a cached copy of its minimum
pub struct ExplicitMin<H: PersistentHeap> {
    cached: Option<Cached<H>>,
}

struct Cached<H: PersistentHeap> {
    min: H::Elem,
    heap: H,
}

/// Binomial heap with an O(1) `find_min`
pub type ExplicitMinBinomialHeap<T> = ExplicitMin<BinomialHeap<T>>;

impl<H: PersistentHeap> ExplicitMin<H> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        ExplicitMin { cached: None }
    }

    /// Wraps an existing heap, reading its minimum once
    pub fn from_heap(heap: H) -> Self {
        match heap.find_min().ok().cloned() {
            Some(min) => Self::cache(min, heap),
            None => Self::new(),
        }
    }

    /// The wrapped heap, or `None` when empty
    pub fn heap(&self) -> Option<&H> {
        self.cached.as_ref().map(|c| &c.heap)
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> H {
        self.cached.map_or_else(H::empty, |c| c.heap)
    }

    fn cache(min: H::Elem, heap: H) -> Self {
        debug_assert!(heap.find_min() == Ok(&min));
        ExplicitMin {
            cached: Some(Cached { min, heap }),
        }
    }
}

impl<H: PersistentHeap> PersistentHeap for ExplicitMin<H> {
    type Elem = H::Elem;

    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        self.cached.is_none()
    }

    fn len(&self) -> usize {
        self.cached.as_ref().map_or(0, |c| c.heap.len())
    }

    fn insert(&self, x: H::Elem) -> Self {
        match &self.cached {
            None => Self::cache(x.clone(), H::empty().insert(x)),
            Some(c) => {
                let min = if x < c.min { x.clone() } else { c.min.clone() };
                Self::cache(min, c.heap.insert(x))
            }
        }
    }

    fn merge(&self, other: &Self) -> Self {
        match (&self.cached, &other.cached) {
            (_, None) => self.clone(),
            (None, _) => other.clone(),
            (Some(a), Some(b)) => {
                let min = if a.min <= b.min { &a.min } else { &b.min };
                Self::cache(min.clone(), a.heap.merge(&b.heap))
            }
        }
    }

    fn find_min(&self) -> Result<&H::Elem, HeapError> {
        self.cached
            .as_ref()
            .map(|c| &c.min)
            .ok_or(HeapError::EmptyHeap)
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let c = self.cached.as_ref().ok_or(HeapError::EmptyHeap)?;
        Ok(Self::from_heap(c.heap.delete_min()?))
    }

    /// Also checks that the cached minimum is the underlying heap's minimum
    fn verify_invariants(&self) -> bool {
        match &self.cached {
            None => true,
            Some(c) => c.heap.find_min() == Ok(&c.min) && c.heap.verify_invariants(),
        }
    }

    fn of_list_tournament<I: IntoIterator<Item = H::Elem>>(items: I) -> Self {
        Self::from_heap(H::of_list_tournament(items))
    }
}

impl<H: PersistentHeap> Clone for ExplicitMin<H> {
    fn clone(&self) -> Self {
        ExplicitMin {
            cached: self.cached.as_ref().map(|c| Cached {
                min: c.min.clone(),
                heap: c.heap.clone(),
            }),
        }
    }
}

impl<H: PersistentHeap> Default for ExplicitMin<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for ExplicitMin<H>
where
    H: PersistentHeap + fmt::Debug,
    H::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cached {
            None => f.write_str("ExplicitMin::Empty"),
            Some(c) => f
                .debug_struct("ExplicitMin")
                .field("min", &c.min)
                .field("heap", &c.heap)
                .finish(),
        }
    }
}

impl<H: PersistentHeap> FromIterator<H::Elem> for ExplicitMin<H> {
    fn from_iter<I: IntoIterator<Item = H::Elem>>(iter: I) -> Self {
        Self::of_list(iter)
    }
}

impl<H: PersistentHeap> Extend<H::Elem> for ExplicitMin<H> {
    fn extend<I: IntoIterator<Item = H::Elem>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}
