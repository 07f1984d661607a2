//! Unbalanced binary search tree whose shape is fixed entirely by insertion order.

mod multiset;
mod node;
mod tree;

pub use self::multiset::{BstMultiset, BstMultisetIter};
pub use self::node::Node;
