//! Ascending iteration over a persistent heap
//!
//! Iterating decodes a heap by repeated `find_min` + `delete_min`. The
//! iterator owns its own handle on the heap, so the heap it was created from
//! is left untouched.

use std::iter::FusedIterator;

use crate::traits::PersistentHeap;

/// Iterator yielding the elements of a heap in ascending order
///
/// Created by [`PersistentHeap::sorted`]. Each step costs one `delete_min`.
///
/// # Example
///
/// ```rust
/// use persistent_heaps::{BinomialHeap, PersistentHeap};
///
/// let heap = BinomialHeap::of_list([4, 1, 3, 1]);
/// let ascending: Vec<_> = heap.sorted().collect();
/// assert_eq!(ascending, vec![1, 1, 3, 4]);
/// assert_eq!(heap.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Sorted<H> {
    heap: H,
}

impl<H: PersistentHeap> Sorted<H> {
    pub(crate) fn new(heap: H) -> Self {
        Sorted { heap }
    }

    /// The elements not yet yielded
    pub fn remaining(&self) -> &H {
        &self.heap
    }
}

impl<H: PersistentHeap> Iterator for Sorted<H> {
    type Item = H::Elem;

    fn next(&mut self) -> Option<H::Elem> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<H: PersistentHeap> ExactSizeIterator for Sorted<H> {}

impl<H: PersistentHeap> FusedIterator for Sorted<H> {}
