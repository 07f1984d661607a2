use crate::treap::tree;
use crate::width::BinaryNode;

/// A struct representing an internal node of a treap.
pub struct Node<T> {
    pub value: T,
    pub priority: u64,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, priority: u64) -> Self {
        Node {
            value,
            priority,
            left: None,
            right: None,
        }
    }
}

impl<T> BinaryNode for Node<T> {
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}
