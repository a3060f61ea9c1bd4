//! Rank-based Leftist Heap
//!
//! A leftist tree is a heap-ordered binary tree in which every node's left
//! child has a rank at least as large as its right child's, where the rank of
//! a node is the length of its right spine:
//!
//! - heap order: a node's element is `<=` the elements of both children
//! - leftist property: `rank(left) >= rank(right)`
//! - `rank(node) = rank(right) + 1`, and the empty tree has rank 0
//!
//! The right spine of an `n` element tree therefore has at most `log₂(n + 1)`
//! nodes. Merging walks only the right spines of its two operands, giving
//! O(log n) merge, and with it O(log n) insert and delete-min.
//!
//! Trees are immutable: every operation returns a new tree sharing all
//! untouched subtrees with its inputs through `Arc`.
//!
//! # References
//!
//! - Crane, C.A. (1972). "Linear lists and priority queues as balanced binary trees".
//! - Okasaki, C. (1998). "Purely Functional Data Structures", §3.1.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::rank::{checked_increment, Rank};
use crate::traits::MergeStrategy;

/// A persistent rank-based leftist tree
///
/// `None` is the empty tree; it owns no allocation.
pub struct LeftistTree<T> {
    root: Option<Arc<LeftistNode<T>>>,
}

struct LeftistNode<T> {
    rank: Rank,
    elem: T,
    left: LeftistTree<T>,
    right: LeftistTree<T>,
}

impl<T> LeftistTree<T> {
    /// The empty tree
    pub const fn new() -> Self {
        LeftistTree { root: None }
    }

    /// Returns true if the tree holds no elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Length of the right spine; 0 for the empty tree
    pub fn rank(&self) -> Rank {
        self.root.as_ref().map_or(0, |node| node.rank)
    }

    /// The element stored at the root, which is the minimum of the tree
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.elem)
    }

    /// The left subtree, or `None` for the empty tree
    pub fn left(&self) -> Option<&LeftistTree<T>> {
        self.root.as_ref().map(|node| &node.left)
    }

    /// The right subtree, or `None` for the empty tree
    pub fn right(&self) -> Option<&LeftistTree<T>> {
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

    fn node(rank: Rank, elem: T, left: Self, right: Self) -> Self {
        LeftistTree {
            root: Some(Arc::new(LeftistNode {
                rank,
                elem,
                left,
                right,
            })),
        }
    }
}

impl<T: Ord + Clone> LeftistTree<T> {
    /// A one-element tree of rank 1
    pub fn singleton(x: T) -> Self {
        Self::node(1, x, Self::new(), Self::new())
    }

    /// Builds a node from a root element and two valid subtrees
    ///
    /// The subtree with the larger rank becomes the left child (`a` stays on
    /// the left on ties), and the node's rank is one more than the smaller
    /// rank. The caller guarantees `x` is `<=` both subtrees' roots.
    pub fn make(x: T, a: Self, b: Self) -> Self {
        debug_assert!(a.root().map_or(true, |r| x <= *r));
        debug_assert!(b.root().map_or(true, |r| x <= *r));
        if a.rank() >= b.rank() {
            let rank = checked_increment(b.rank());
            Self::node(rank, x, a, b)
        } else {
            let rank = checked_increment(a.rank());
            Self::node(rank, x, b, a)
        }
    }

    /// Merges two trees
    ///
    /// The smaller root becomes the new root, the left operand winning ties.
    /// Its right child is merged with the whole other tree and the result is
    /// reattached with [`make`](Self::make). Merging with an empty tree returns
    /// the other tree itself, sharing its allocation.
    pub fn merge(&self, other: &Self) -> Self {
        match (&self.root, &other.root) {
            (_, None) => self.clone(),
            (None, _) => other.clone(),
            (Some(a), Some(b)) => {
                if a.elem <= b.elem {
                    Self::make(a.elem.clone(), a.left.clone(), a.right.merge(other))
                } else {
                    Self::make(b.elem.clone(), b.left.clone(), self.merge(&b.right))
                }
            }
        }
    }

    /// Checks heap order, the leftist property and every stored rank
    ///
    /// Walks the tree with an explicit stack, so arbitrarily deep left spines
    /// are fine.
    pub fn verify_invariants(&self) -> bool {
        let mut stack: Vec<&LeftistNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.left.rank() < node.right.rank() {
                return false;
            }
            if node.rank != checked_increment(node.right.rank()) {
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

impl<T> Clone for LeftistTree<T> {
    fn clone(&self) -> Self {
        LeftistTree {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for LeftistTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LeftistTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("Empty"),
            Some(node) => f
                .debug_struct("Node")
                .field("rank", &node.rank)
                .field("elem", &node.elem)
                .field("left", &node.left)
                .field("right", &node.right)
                .finish(),
        }
    }
}

// Left spines can be as long as the tree is large (inserting in descending
// order builds one), so uniquely owned children are released iteratively.
impl<T> Drop for LeftistNode<T> {
    fn drop(&mut self) {
        let mut pending: SmallVec<[Arc<LeftistNode<T>>; 8]> = SmallVec::new();
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

impl<T: Ord + Clone> MergeStrategy for LeftistTree<T> {
    type Elem = T;

    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        LeftistTree::is_empty(self)
    }

    fn singleton(x: T) -> Self {
        LeftistTree::singleton(x)
    }

    fn merge(&self, other: &Self) -> Self {
        LeftistTree::merge(self, other)
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
        LeftistTree::verify_invariants(self)
    }
}
