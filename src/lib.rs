//! Compares the breadth of an unbalanced binary search tree against a treap built from the same
//! values.
//!
//! Both trees are fed the same sequence of values. The treap additionally takes one
//! caller-supplied priority per value and keeps its nodes in max-heap order over those priorities,
//! while the binary search tree keeps whatever shape the insertion order gives it. The width of a
//! tree is the largest number of nodes found at any single depth.
//!
//! # Examples
//!
//! ```
//! use tree_breadth::bst::BstMultiset;
//! use tree_breadth::treap::TreapMultiset;
//!
//! let mut bst = BstMultiset::new();
//! let mut treap = TreapMultiset::new();
//! for value in 0..7 {
//!     bst.insert(value);
//!     treap.insert(value, [1, 3, 2, 9, 2, 3, 1][value as usize]);
//! }
//!
//! assert_eq!(bst.max_width(), 1);
//! assert_eq!(treap.max_width(), 4);
//! ```

mod error;
pub mod bst;
pub mod comparator;
pub mod input;
pub mod report;
pub mod treap;
pub mod width;

pub use crate::error::{Error, Result};
