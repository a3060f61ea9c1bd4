//! Weight-biased Leftist Heap
//!
//! A weight-biased leftist tree orders children by size instead of by
//! right-spine length:
//!
//! - heap order: a node's element is `<=` the elements of both children
//! - `weight(left) >= weight(right)`
//! - `weight(node) = weight(left) + weight(right) + 1`
//!
//! The right spine still has at most `log₂(n + 1)` nodes, so merge is O(log n).
//!
//! # Top-down merge
//!
//! Because the weight of a merge result is known before the merge is done (it
//! is the sum of the operands' weights), the child-order decision at each
//! level of the right spine can be taken on the way *down*. The merge records
//! each decided level as a frame of an explicit continuation ("build a node
//! with this root, this sibling, and the hole on this side") and fills the
//! holes innermost first once one operand runs out. Nothing recurses on the
//! call stack.
//!
//! For the same input sequence this produces different, equally valid shapes
//! than the rank-based [`LeftistTree`](crate::leftist::LeftistTree).
//!
//! # References
//!
//! - Cho, S. and Sahni, S. (1996). "Weight biased leftist trees and modified skip lists".
//! - Okasaki, C. (1998). "Purely Functional Data Structures", exercise 3.4.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::traits::MergeStrategy;

/// A persistent weight-biased leftist tree
pub struct WeightBiasedTree<T> {
    root: Option<Arc<WeightBiasedNode<T>>>,
}

struct WeightBiasedNode<T> {
    weight: usize,
    elem: T,
    left: WeightBiasedTree<T>,
    right: WeightBiasedTree<T>,
}

/// One pending level of a top-down merge
///
/// The node's root and its untouched child are known, and so is the total
/// weight; only the merged child (the hole) is missing.
struct Frame<T> {
    weight: usize,
    elem: T,
    sibling: WeightBiasedTree<T>,
    hole_on_left: bool,
}

impl<T> Frame<T> {
    fn fill(self, hole: WeightBiasedTree<T>) -> WeightBiasedTree<T> {
        debug_assert_eq!(self.weight, self.sibling.weight() + hole.weight() + 1);
        let (left, right) = if self.hole_on_left {
            (hole, self.sibling)
        } else {
            (self.sibling, hole)
        };
        WeightBiasedTree::node(self.weight, self.elem, left, right)
    }
}

impl<T> WeightBiasedTree<T> {
    /// The empty tree
    pub const fn new() -> Self {
        WeightBiasedTree { root: None }
    }

    /// Returns true if the tree holds no elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of elements in the tree
    pub fn weight(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.weight)
    }

    /// The element stored at the root, which is the minimum of the tree
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.elem)
    }

    /// The left subtree, or `None` for the empty tree
    pub fn left(&self) -> Option<&WeightBiasedTree<T>> {
        self.root.as_ref().map(|node| &node.left)
    }

    /// The right subtree, or `None` for the empty tree
    pub fn right(&self) -> Option<&WeightBiasedTree<T>> {
        self.root.as_ref().map(|node| &node.right)
    }

    /// Returns true if both trees are the same allocation (or both empty)
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn node(weight: usize, elem: T, left: Self, right: Self) -> Self {
        WeightBiasedTree {
            root: Some(Arc::new(WeightBiasedNode {
                weight,
                elem,
                left,
                right,
            })),
        }
    }
}

impl<T: Ord + Clone> WeightBiasedTree<T> {
    /// A one-element tree of weight 1
    pub fn singleton(x: T) -> Self {
        Self::node(1, x, Self::new(), Self::new())
    }

    /// Builds a node from a root element and two valid subtrees
    ///
    /// The heavier subtree becomes the left child (`a` stays on the left on
    /// ties). The caller guarantees `x` is `<=` both subtrees' roots.
    pub fn make(x: T, a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight() + 1;
        if a.weight() >= b.weight() {
            Self::node(weight, x, a, b)
        } else {
            Self::node(weight, x, b, a)
        }
    }

    /// Merges two trees top-down
    ///
    /// The smaller root wins, the left operand winning ties, exactly as in the
    /// rank-based merge; the difference is that the child order of every node
    /// on the merge path is fixed before its merged child exists.
    pub fn merge(&self, other: &Self) -> Self {
        let mut frames: SmallVec<[Frame<T>; 16]> = SmallVec::new();
        let mut a = self.clone();
        let mut b = other.clone();

        loop {
            let (x, y) = match (&a.root, &b.root) {
                (Some(x), Some(y)) => (Arc::clone(x), Arc::clone(y)),
                _ => break,
            };
            let weight = x.weight + y.weight;
            if x.elem <= y.elem {
                let pending = x.right.weight() + y.weight;
                frames.push(Frame {
                    weight,
                    elem: x.elem.clone(),
                    sibling: x.left.clone(),
                    hole_on_left: x.left.weight() < pending,
                });
                a = x.right.clone();
            } else {
                let pending = x.weight + y.right.weight();
                frames.push(Frame {
                    weight,
                    elem: y.elem.clone(),
                    sibling: y.left.clone(),
                    hole_on_left: y.left.weight() < pending,
                });
                b = y.right.clone();
            }
        }

        let mut merged = if b.is_empty() { a } else { b };
        while let Some(frame) = frames.pop() {
            merged = frame.fill(merged);
        }
        merged
    }

    /// Checks heap order, the weight bias and every stored weight
    pub fn verify_invariants(&self) -> bool {
        let mut stack: Vec<&WeightBiasedNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.left.weight() < node.right.weight() {
                return false;
            }
            if node.weight != node.left.weight() + node.right.weight() + 1 {
                return false;
            }
            for child in [&node.left, &node.right] {
                if let Some(child) = child.root.as_deref() {
                    if child.elem < node.elem {
                        return false;
                    }
                    stack.push(child);
                }
            }
        }
        true
    }
}

impl<T> Clone for WeightBiasedTree<T> {
    fn clone(&self) -> Self {
        WeightBiasedTree {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for WeightBiasedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for WeightBiasedTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("Empty"),
            Some(node) => f
                .debug_struct("Node")
                .field("weight", &node.weight)
                .field("elem", &node.elem)
                .field("left", &node.left)
                .field("right", &node.right)
                .finish(),
        }
    }
}

impl<T> Drop for WeightBiasedNode<T> {
    fn drop(&mut self) {
        let mut pending: SmallVec<[Arc<WeightBiasedNode<T>>; 8]> = SmallVec::new();
        pending.extend(self.left.root.take());
        pending.extend(self.right.root.take());
        while let Some(node) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(node) {
                pending.extend(node.left.root.take());
                pending.extend(node.right.root.take());
            }
        }
    }
}

impl<T: Ord + Clone> MergeStrategy for WeightBiasedTree<T> {
    type Elem = T;

    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        WeightBiasedTree::is_empty(self)
    }

    fn singleton(x: T) -> Self {
        WeightBiasedTree::singleton(x)
    }

    fn merge(&self, other: &Self) -> Self {
        WeightBiasedTree::merge(self, other)
    }

    fn min_elem(&self) -> Option<&T> {
        self.root()
    }

    fn remove_min(&self) -> Option<Self> {
        self.root
            .as_ref()
            .map(|node| node.left.merge(&node.right))
    }

    fn verify_invariants(&self) -> bool {
        WeightBiasedTree::verify_invariants(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leftist::LeftistTree;

    fn from_inserts(xs: &[i32]) -> WeightBiasedTree<i32> {
        xs.iter().fold(WeightBiasedTree::new(), |t, &x| {
            WeightBiasedTree::singleton(x).merge(&t)
        })
    }

    fn drain(mut t: WeightBiasedTree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(&x) = t.root() {
            out.push(x);
            t = t.remove_min().unwrap();
        }
        out
    }

    /// Bottom-up reference merge, written the way the rank-based one is.
    fn merge_bottom_up(
        a: &WeightBiasedTree<i32>,
        b: &WeightBiasedTree<i32>,
    ) -> WeightBiasedTree<i32> {
        match (&a.root, &b.root) {
            (_, None) => a.clone(),
            (None, _) => b.clone(),
            (Some(x), Some(y)) => {
                if x.elem <= y.elem {
                    WeightBiasedTree::make(x.elem, x.left.clone(), merge_bottom_up(&x.right, b))
                } else {
                    WeightBiasedTree::make(y.elem, y.left.clone(), merge_bottom_up(a, &y.right))
                }
            }
        }
    }

    fn same_shape(a: &WeightBiasedTree<i32>, b: &WeightBiasedTree<i32>) -> bool {
        match (&a.root, &b.root) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                x.weight == y.weight
                    && x.elem == y.elem
                    && same_shape(&x.left, &y.left)
                    && same_shape(&x.right, &y.right)
            }
            _ => false,
        }
    }

    #[test]
    fn test_empty() {
        let t: WeightBiasedTree<i32> = WeightBiasedTree::new();
        assert!(t.is_empty());
        assert_eq!(t.weight(), 0);
        assert_eq!(t.root(), None);
        assert!(t.remove_min().is_none());
        assert!(t.verify_invariants());
    }

    #[test]
    fn test_weight_counts_elements() {
        let t = from_inserts(&[9, 4, 7, 1, 3, 3]);
        assert_eq!(t.weight(), 6);
        assert_eq!(t.left().unwrap().weight() + t.right().unwrap().weight(), 5);
        assert!(t.verify_invariants());
    }

    #[test]
    fn test_insert_1_2_4_3_shape() {
        let t = from_inserts(&[1, 2, 4, 3]);
        assert_eq!(t.weight(), 4);
        assert_eq!(t.root(), Some(&1));

        let left = t.left().unwrap();
        assert_eq!(left.weight(), 2);
        assert_eq!(left.root(), Some(&3));
        assert_eq!(left.left().unwrap().root(), Some(&4));

        let right = t.right().unwrap();
        assert_eq!(right.weight(), 1);
        assert_eq!(right.root(), Some(&2));

        assert!(t.verify_invariants());
    }

    #[test]
    fn test_shape_differs_from_rank_based() {
        let xs = [1, 2, 4, 3];
        let weighted = from_inserts(&xs);
        let ranked = xs.iter().fold(LeftistTree::new(), |t, &x| {
            LeftistTree::singleton(x).merge(&t)
        });
        assert_eq!(ranked.left().unwrap().root(), Some(&2));
        assert_eq!(weighted.left().unwrap().root(), Some(&3));
    }

    #[test]
    fn test_top_down_matches_bottom_up() {
        let a = from_inserts(&[12, 5, 8, 1, 30, 7, 7]);
        let b = from_inserts(&[6, 2, 9, 14, 3]);
        assert!(same_shape(&a.merge(&b), &merge_bottom_up(&a, &b)));
        assert!(same_shape(&b.merge(&a), &merge_bottom_up(&b, &a)));
    }

    #[test]
    fn test_make_puts_heavier_left() {
        let light = WeightBiasedTree::singleton(5);
        let heavy = from_inserts(&[2, 3, 4]);
        let t = WeightBiasedTree::make(1, light.clone(), heavy.clone());
        assert!(t.left().unwrap().ptr_eq(&heavy));
        assert!(t.right().unwrap().ptr_eq(&light));
        assert_eq!(t.weight(), 5);
    }

    #[test]
    fn test_merge_with_empty_shares_operand() {
        let t = from_inserts(&[3, 1, 2]);
        let empty = WeightBiasedTree::new();
        assert!(t.merge(&empty).ptr_eq(&t));
        assert!(empty.merge(&t).ptr_eq(&t));
    }

    #[test]
    fn test_merge_with_itself() {
        let t = from_inserts(&[4, 2, 6]);
        let doubled = t.merge(&t);
        assert!(doubled.verify_invariants());
        assert_eq!(drain(doubled), vec![2, 2, 4, 4, 6, 6]);
        assert_eq!(drain(t), vec![2, 4, 6]);
    }

    #[test]
    fn test_persistence() {
        let t = from_inserts(&[5, 3, 8]);
        let bigger = WeightBiasedTree::singleton(1).merge(&t);
        let smaller = t.remove_min().unwrap();

        assert_eq!(drain(t), vec![3, 5, 8]);
        assert_eq!(drain(bigger), vec![1, 3, 5, 8]);
        assert_eq!(drain(smaller), vec![5, 8]);
    }

    #[test]
    fn test_verify_detects_bad_weight() {
        let broken =
            WeightBiasedTree::node(3, 1, WeightBiasedTree::singleton(2), WeightBiasedTree::new());
        assert!(!broken.verify_invariants());
    }

    #[test]
    fn test_descending_inserts_drop_without_overflow() {
        let t = (0..200_000).rev().fold(WeightBiasedTree::new(), |t, x| {
            WeightBiasedTree::singleton(x).merge(&t)
        });
        assert_eq!(t.weight(), 200_000);
        assert!(t.verify_invariants());
        drop(t);
    }
}
