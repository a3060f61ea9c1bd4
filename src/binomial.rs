//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) worst-case insert, merge, find_min and delete_min
//! - O(1) amortized insert (a carry rarely ripples far)
//!
//! # Algorithm Overview
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees: the one with the larger root
//!   becomes the first child of the other
//! - Bₖ has exactly 2ᵏ nodes, and its root has k children of ranks k-1, ..., 0
//!
//! **Forest**: at most one tree of each rank, kept in increasing rank order.
//! The ranks present are exactly the 1 bits of the element count, so:
//! - **Insert** is binary increment: link equal ranks and carry upwards
//! - **Merge** is ripple-carry binary addition
//! - **Delete-min** removes the tree with the smallest root and merges its
//!   children (a forest themselves, once reversed) back in
//!
//! Trees and forests are immutable and share structure through `Arc`.
//! The rank of every tree is stored, never recomputed from its children.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::rank::{checked_increment, Rank};
use crate::traits::MergeStrategy;

/// A persistent binomial tree
///
/// Cloning is O(1).
#[derive(Debug, PartialEq, Eq)]
pub struct BinomialTree<T>(Arc<BinomialNode<T>>);

#[derive(Debug, PartialEq, Eq)]
struct BinomialNode<T> {
    rank: Rank,
    root: T,
    /// Child trees in decreasing order of rank
    children: Vec<BinomialTree<T>>,
}

impl<T> BinomialTree<T> {
    /// Rank of the tree: its root has this many children
    pub fn rank(&self) -> Rank {
        self.0.rank
    }

    /// The root element, which is the minimum of the tree
    pub fn root(&self) -> &T {
        &self.0.root
    }

    /// Child trees in decreasing order of rank
    pub fn children(&self) -> &[BinomialTree<T>] {
        &self.0.children
    }

    /// Number of elements in the tree (2ʳᵃⁿᵏ)
    pub fn size(&self) -> usize {
        1usize << self.rank()
    }
}

impl<T: Ord + Clone> BinomialTree<T> {
    /// A rank-0 tree with no children
    pub fn singleton(x: T) -> Self {
        BinomialTree(Arc::new(BinomialNode {
            rank: 0,
            root: x,
            children: Vec::new(),
        }))
    }

    /// Links two trees of equal rank `r` into one tree of rank `r + 1`
    ///
    /// The smaller root wins (`t1` on ties) and the other tree becomes the
    /// winner's first child.
    ///
    /// # Panics
    ///
    /// Panics if the ranks differ; such a link would break the binomial shape.
    pub fn link(t1: Self, t2: Self) -> Self {
        assert_eq!(
            t1.rank(),
            t2.rank(),
            "binomial link requires trees of equal rank"
        );
        let (winner, loser) = if t1.root() <= t2.root() {
            (t1, t2)
        } else {
            (t2, t1)
        };
        let mut children = Vec::with_capacity(winner.children().len() + 1);
        children.push(loser);
        children.extend(winner.children().iter().cloned());
        BinomialTree(Arc::new(BinomialNode {
            rank: checked_increment(winner.rank()),
            root: winner.root().clone(),
            children,
        }))
    }

    /// Checks the child-rank sequence and heap order of the whole tree
    pub fn verify_invariants(&self) -> bool {
        let children = self.children();
        if children.len() != usize::from(self.rank()) {
            return false;
        }
        children.iter().enumerate().all(|(i, child)| {
            usize::from(child.rank()) == children.len() - 1 - i
                && child.root() >= self.root()
                && child.verify_invariants()
        })
    }
}

impl<T> Clone for BinomialTree<T> {
    fn clone(&self) -> Self {
        BinomialTree(Arc::clone(&self.0))
    }
}

/// A persistent binomial heap: binomial trees in strictly increasing rank order
///
/// The empty forest owns no allocation. Cloning is O(1).
#[derive(Debug, PartialEq, Eq)]
pub struct BinomialForest<T> {
    trees: Option<Arc<[BinomialTree<T>]>>,
}

impl<T> BinomialForest<T> {
    /// The empty forest
    pub const fn new() -> Self {
        BinomialForest { trees: None }
    }

    /// Returns true if the forest holds no trees
    pub fn is_empty(&self) -> bool {
        self.trees.is_none()
    }

    /// The trees of the forest in increasing rank order
    pub fn trees(&self) -> &[BinomialTree<T>] {
        self.trees.as_deref().unwrap_or(&[])
    }

    /// Number of elements across all trees
    pub fn size(&self) -> usize {
        self.trees().iter().map(BinomialTree::size).sum()
    }

    fn from_vec(trees: Vec<BinomialTree<T>>) -> Self {
        if trees.is_empty() {
            Self::new()
        } else {
            BinomialForest {
                trees: Some(trees.into()),
            }
        }
    }
}

impl<T: Ord + Clone> BinomialForest<T> {
    /// Inserts a tree whose rank is at most the forest's lowest rank
    ///
    /// Equal ranks are linked and the result carried upwards, like a binary
    /// increment.
    ///
    /// # Panics
    ///
    /// Panics if `tree` outranks the forest's lowest tree, since the carry
    /// would then reach [`BinomialTree::link`] with unequal ranks.
    pub fn insert_tree(&self, tree: BinomialTree<T>) -> Self {
        Self::from_vec(insert_tree(tree, self.trees()))
    }

    /// Inserts one element
    pub fn insert(&self, x: T) -> Self {
        self.insert_tree(BinomialTree::singleton(x))
    }

    /// Merges two forests like ripple-carry binary addition
    pub fn merge(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (_, true) => self.clone(),
            (true, _) => other.clone(),
            _ => Self::from_vec(merge_trees(self.trees(), other.trees())),
        }
    }

    /// Returns the minimum root by linear scan of the forest
    pub fn find_min(&self) -> Option<&T> {
        self.min_position().map(|i| self.trees()[i].root())
    }

    /// Removes the first tree holding the minimum root and merges its
    /// children back into the rest of the forest
    pub fn delete_min(&self) -> Option<Self> {
        let index = self.min_position()?;
        let trees = self.trees();
        let rest: Vec<_> = trees[..index]
            .iter()
            .chain(&trees[index + 1..])
            .cloned()
            .collect();
        let orphans: Vec<_> = trees[index].children().iter().rev().cloned().collect();
        Some(Self::from_vec(merge_trees(&orphans, &rest)))
    }

    /// Checks every tree and the strictly increasing rank order
    pub fn verify_invariants(&self) -> bool {
        let trees = self.trees();
        trees.windows(2).all(|pair| pair[0].rank() < pair[1].rank())
            && trees.iter().all(BinomialTree::verify_invariants)
    }

    fn min_position(&self) -> Option<usize> {
        let trees = self.trees();
        let mut best: Option<usize> = None;
        for (i, tree) in trees.iter().enumerate() {
            if best.map_or(true, |b| tree.root() < trees[b].root()) {
                best = Some(i);
            }
        }
        best
    }
}

impl<T> Clone for BinomialForest<T> {
    fn clone(&self) -> Self {
        BinomialForest {
            trees: self.trees.clone(),
        }
    }
}

impl<T> Default for BinomialForest<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_tree<T: Ord + Clone>(
    mut carry: BinomialTree<T>,
    trees: &[BinomialTree<T>],
) -> Vec<BinomialTree<T>> {
    let mut rest = trees.iter();
    while let Some(lowest) = rest.as_slice().first() {
        if lowest.rank() > carry.rank() {
            break;
        }
        carry = BinomialTree::link(carry, lowest.clone());
        rest.next();
    }
    let mut result = Vec::with_capacity(rest.len() + 1);
    result.push(carry);
    result.extend(rest.cloned());
    result
}

/// Ripple-carry addition of two forests
///
/// Equal ranks from both forests are linked (first forest's tree as the left
/// operand) and carried; a carry meeting exactly one tree of its rank is
/// linked with it; a carry meeting two is emitted while the two are linked
/// into the next carry. The resulting shapes match the recursive
/// `insert_tree(link(t1, t2), merge(ts1, ts2))` formulation.
fn merge_trees<T: Ord + Clone>(
    ts1: &[BinomialTree<T>],
    ts2: &[BinomialTree<T>],
) -> Vec<BinomialTree<T>> {
    let mut result = Vec::with_capacity(ts1.len().max(ts2.len()) + 1);
    let (mut i, mut j) = (0, 0);
    let mut carry: Option<BinomialTree<T>> = None;

    loop {
        let (a, b) = (ts1.get(i), ts2.get(j));
        match carry.take() {
            None => match (a, b) {
                (None, _) => {
                    result.extend_from_slice(&ts2[j..]);
                    break;
                }
                (_, None) => {
                    result.extend_from_slice(&ts1[i..]);
                    break;
                }
                (Some(a), Some(b)) => match a.rank().cmp(&b.rank()) {
                    Ordering::Less => {
                        result.push(a.clone());
                        i += 1;
                    }
                    Ordering::Greater => {
                        result.push(b.clone());
                        j += 1;
                    }
                    Ordering::Equal => {
                        carry = Some(BinomialTree::link(a.clone(), b.clone()));
                        i += 1;
                        j += 1;
                    }
                },
            },
            Some(c) => {
                let a = a.filter(|t| t.rank() == c.rank());
                let b = b.filter(|t| t.rank() == c.rank());
                match (a, b) {
                    (Some(a), Some(b)) => {
                        result.push(c);
                        carry = Some(BinomialTree::link(a.clone(), b.clone()));
                        i += 1;
                        j += 1;
                    }
                    (Some(a), None) => {
                        carry = Some(BinomialTree::link(c, a.clone()));
                        i += 1;
                    }
                    (None, Some(b)) => {
                        carry = Some(BinomialTree::link(c, b.clone()));
                        j += 1;
                    }
                    (None, None) => result.push(c),
                }
            }
        }
    }
    result
}

impl<T: Ord + Clone> MergeStrategy for BinomialForest<T> {
    type Elem = T;

    fn empty() -> Self {
        Self::new()
    }

    fn is_empty(&self) -> bool {
        BinomialForest::is_empty(self)
    }

    fn singleton(x: T) -> Self {
        Self::new().insert(x)
    }

    fn insert(&self, x: T) -> Self {
        BinomialForest::insert(self, x)
    }

    fn merge(&self, other: &Self) -> Self {
        BinomialForest::merge(self, other)
    }

    fn min_elem(&self) -> Option<&T> {
        self.find_min()
    }

    fn remove_min(&self) -> Option<Self> {
        self.delete_min()
    }

    fn verify_invariants(&self) -> bool {
        BinomialForest::verify_invariants(self)
    }
}
