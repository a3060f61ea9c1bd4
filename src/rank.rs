//! Rank type and utilities for leftist and binomial trees.
//!
//! # Why u8?
//!
//! Both rank notions used in this crate are logarithmic in the element count:
//!
//! - A leftist node of rank `r` has a right spine of length `r` and at least
//!   `2ʳ - 1` elements.
//! - A binomial tree of rank `r` has exactly `2ʳ` elements.
//!
//! So 2⁶⁴ elements never need a rank above 64, and `u8` (0-255) is plenty.
//! Weights in the weight-biased strategy are element counts and use `usize`.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the theoretical limit is exceeded, which
//! would indicate a corrupted tree rather than a large one.

/// Type alias for leftist and binomial ranks.
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`.
///
/// # Example
///
/// ```rust
/// use persistent_heaps::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: ranks are logarithmic in the element count, \
         so this indicates a corrupted tree",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(127), 128);
        assert_eq!(checked_increment(254), 255);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_rank_is_one_byte() {
        assert_eq!(std::mem::size_of::<Rank>(), 1);
    }
}
