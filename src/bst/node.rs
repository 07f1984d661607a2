use crate::bst::tree;
use crate::width::BinaryNode;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub value: T,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
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
