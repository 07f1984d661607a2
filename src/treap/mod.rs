//! Binary search tree where each node also carries a caller-supplied priority and the tree
//! maintains the max-heap invariant over those priorities.

mod multiset;
mod node;
mod tree;

pub use self::multiset::{TreapMultiset, TreapMultisetIter};
pub use self::node::Node;
