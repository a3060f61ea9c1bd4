//! Generic heap façade
//!
//! [`Heap`] turns any [`MergeStrategy`] into a full [`PersistentHeap`]:
//!
//! | Operation | Implementation |
//! |-----------|----------------|
//! | `insert`  | strategy insert (merge with a singleton) |
//! | `merge`   | strategy merge |
//! | `find_min`/`delete_min` | strategy minimum, `HeapError::EmptyHeap` when empty |
//! | `of_list` | left fold of `insert`, O(n log n) |
//! | `of_list_tournament` | [`tournament::build`](crate::tournament::build), O(n) |
//!
//! The façade also tracks the element count so `len` is O(1) for every
//! strategy.
//!
//! # Example
//!
//! ```rust
//! use persistent_heaps::{HeapError, PersistentHeap, WeightBiasedHeap};
//!
//! let empty: WeightBiasedHeap<i32> = WeightBiasedHeap::empty();
//! assert_eq!(empty.find_min(), Err(HeapError::EmptyHeap));
//!
//! let heap = empty.insert(3).insert(1);
//! assert_eq!(heap.find_min(), Ok(&1));
//! assert!(empty.is_empty());
//! ```

use std::fmt;

use crate::binomial::BinomialForest;
use crate::leftist::LeftistTree;
use crate::tournament;
use crate::traits::{HeapError, MergeStrategy, PersistentHeap};
use crate::weight_biased::WeightBiasedTree;

/// A persistent heap over any merge strategy
///
/// Cloning is O(1): the clone shares every node with the original.
pub struct Heap<S> {
    tree: S,
    len: usize,
}

/// Rank-based leftist heap
pub type LeftistHeap<T> = Heap<LeftistTree<T>>;

/// Weight-biased leftist heap
pub type WeightBiasedHeap<T> = Heap<WeightBiasedTree<T>>;

/// Binomial heap
pub type BinomialHeap<T> = Heap<BinomialForest<T>>;

impl<S: MergeStrategy> Heap<S> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Heap {
            tree: S::empty(),
            len: 0,
        }
    }

    /// The underlying tree shape
    pub fn tree(&self) -> &S {
        &self.tree
    }
}

impl<S: MergeStrategy> PersistentHeap for Heap<S> {
    type Elem = S::Elem;

    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&self, x: S::Elem) -> Self {
        Heap {
            tree: self.tree.insert(x),
            len: self.len + 1,
        }
    }

    fn merge(&self, other: &Self) -> Self {
        Heap {
            tree: self.tree.merge(&other.tree),
            len: self.len + other.len,
        }
    }

    fn find_min(&self) -> Result<&S::Elem, HeapError> {
        self.tree.min_elem().ok_or(HeapError::EmptyHeap)
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        let tree = self.tree.remove_min().ok_or(HeapError::EmptyHeap)?;
        Ok(Heap {
            tree,
            len: self.len - 1,
        })
    }

    fn verify_invariants(&self) -> bool {
        self.tree.verify_invariants()
    }

    fn of_list_tournament<I: IntoIterator<Item = S::Elem>>(items: I) -> Self {
        let mut len = 0;
        let tree = tournament::build(items.into_iter().inspect(|_| len += 1));
        Heap { tree, len }
    }
}

impl<S: Clone> Clone for Heap<S> {
    fn clone(&self) -> Self {
        Heap {
            tree: self.tree.clone(),
            len: self.len,
        }
    }
}

impl<S: MergeStrategy> Default for Heap<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug> fmt::Debug for Heap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.len)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<S: MergeStrategy> FromIterator<S::Elem> for Heap<S> {
    fn from_iter<I: IntoIterator<Item = S::Elem>>(iter: I) -> Self {
        Self::of_list(iter)
    }
}

impl<S: MergeStrategy> Extend<S::Elem> for Heap<S> {
    fn extend<I: IntoIterator<Item = S::Elem>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_heap_errors() {
        let heap: LeftistHeap<i32> = LeftistHeap::of_list([]);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.find_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.delete_min().err(), Some(HeapError::EmptyHeap));
        assert_eq!(heap.pop_min().err(), Some(HeapError::EmptyHeap));
    }

    #[test]
    fn test_len_tracks_operations() {
        let a = BinomialHeap::of_list([5, 1, 4]);
        let b = BinomialHeap::of_list_tournament([9, 2]);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);

        let merged = a.merge(&b);
        assert_eq!(merged.len(), 5);
        assert_eq!(merged.delete_min().unwrap().len(), 4);
        assert_eq!(merged.insert(0).len(), 6);
    }

    #[test]
    fn test_binomial_heap_matches_forest_inserts() {
        let heap = BinomialHeap::of_list([1, 2, 4, 3]);
        let expected = BinomialForest::new().insert(1).insert(2).insert(4).insert(3);
        assert_eq!(heap.tree(), &expected);
        assert_eq!(heap.tree().trees().len(), 1);
    }

    #[test]
    fn test_pop_min_returns_min_and_rest() {
        let heap = WeightBiasedHeap::of_list([3, 1, 2]);
        let (min, rest) = heap.pop_min().unwrap();
        assert_eq!(min, 1);
        assert_eq!(rest.into_sorted_vec(), vec![2, 3]);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_push_pop_in_place() {
        let mut heap = LeftistHeap::new();
        heap.push(4);
        heap.push(2);
        heap.push(9);
        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), Some(9));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut heap: WeightBiasedHeap<i32> = vec![5, 3, 7].into_iter().collect();
        heap.extend([1, 6]);
        assert_eq!(heap.len(), 5);
        assert!(heap.verify_invariants());
        assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_min_elem_is_each_strategys_root() {
        let xs = [6, 2, 9, 2, 5];
        let leftist = LeftistHeap::of_list(xs);
        let weighted = WeightBiasedHeap::of_list(xs);
        let binomial = BinomialHeap::of_list(xs);

        assert_eq!(leftist.tree().min_elem(), leftist.tree().root());
        assert_eq!(weighted.tree().min_elem(), weighted.tree().root());
        let roots = binomial.tree().trees().iter().map(|t| t.root());
        assert_eq!(binomial.tree().min_elem(), roots.min());
        assert_eq!(leftist.find_min(), Ok(&2));
    }

    #[test]
    fn test_clone_shares_structure() {
        let heap = LeftistHeap::of_list(0..100);
        let copy = heap.clone();
        assert!(copy.tree().ptr_eq(heap.tree()));
    }
}
