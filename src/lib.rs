//! Persistent Mergeable Heaps for Rust
//!
//! This crate provides purely functional (persistent) priority queues. Every
//! operation returns a new heap and leaves its inputs untouched; unchanged
//! subtrees are shared between versions through `Arc`, so old versions stay
//! valid and cheap to keep around, and heaps can be read from many threads.
//!
//! # Features
//!
//! - **Leftist Heap**: rank-biased binary trees; O(log n) insert, merge and delete-min,
//!   O(1) find-min
//! - **Weight-biased Leftist Heap**: size-biased variant with a top-down, stack-free merge
//! - **Binomial Heap**: forest of binomial trees; merge as binary addition; O(log n) find-min
//! - **Explicit Minimum**: decorator caching the minimum of any heap for O(1) find-min
//! - **Tournament build**: O(n) bulk construction by pairwise merging, for every strategy
//!
//! All heaps implement [`PersistentHeap`] on top of a pluggable
//! [`MergeStrategy`], so generic code works with any of them.
//!
//! # Example
//!
//! ```rust
//! use persistent_heaps::{LeftistHeap, PersistentHeap};
//!
//! let heap = LeftistHeap::of_list([5, 1, 4]);
//! let more = heap.insert(0);
//!
//! assert_eq!(more.find_min(), Ok(&0));
//! assert_eq!(heap.find_min(), Ok(&1)); // unchanged
//! assert_eq!(more.into_sorted_vec(), vec![0, 1, 4, 5]);
//! ```

pub mod binomial;
pub mod explicit_min;
pub mod facade;
pub mod iter;
pub mod leftist;
pub mod rank;
pub mod tournament;
pub mod traits;
pub mod weight_biased;

// Re-export the main types for convenience
pub use explicit_min::{ExplicitMin, ExplicitMinBinomialHeap};
pub use facade::{BinomialHeap, Heap, LeftistHeap, WeightBiasedHeap};
pub use traits::{HeapError, MergeStrategy, PersistentHeap};
