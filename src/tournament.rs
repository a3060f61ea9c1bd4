//! Tournament bulk construction
//!
//! Building a heap by inserting `n` elements one at a time costs
//! O(n log n). A tournament does better: start from `n` singletons and merge
//! neighbours pairwise, left to right, round after round, until one tree
//! remains. An unpaired last tree sits out its round untouched.
//!
//! Round `k` performs `n / 2ᵏ` merges of trees of size about `2ᵏ`, each costing
//! O(k), and `Σ k·n/2ᵏ` is O(n).
//!
//! The result holds the same elements as a fold of inserts but in general a
//! different (equally valid) shape; compare heaps built both ways by their
//! decoded contents.

use crate::traits::MergeStrategy;

/// Builds a tree of any strategy by pairwise tournament merging
///
/// Empty input yields the empty tree and a single element yields exactly its
/// singleton.
///
/// # Example
///
/// ```rust
/// use persistent_heaps::leftist::LeftistTree;
/// use persistent_heaps::tournament;
///
/// let tree: LeftistTree<i32> = tournament::build([5, 2, 8, 1]);
/// assert_eq!(tree.root(), Some(&1));
/// assert!(tree.verify_invariants());
/// ```
pub fn build<S, I>(items: I) -> S
where
    S: MergeStrategy,
    I: IntoIterator<Item = S::Elem>,
{
    let mut round: Vec<S> = items.into_iter().map(S::singleton).collect();
    while round.len() > 1 {
        merge_round(&mut round);
    }
    round.pop().unwrap_or_else(S::empty)
}

/// Merges neighbours `(0, 1), (2, 3), ...` in place, keeping an odd last tree
fn merge_round<S: MergeStrategy>(round: &mut Vec<S>) {
    let pairs = round.len() / 2;
    for i in 0..pairs {
        round[i] = round[2 * i].merge(&round[2 * i + 1]);
    }
    let odd = round.len() % 2;
    if odd == 1 {
        let last = round.len() - 1;
        round.swap(pairs, last);
    }
    round.truncate(pairs + odd);
}
