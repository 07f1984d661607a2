//! Breadth-first measurements shared by every binary tree in the crate.
//!
//! Anything that can hand out its two optional children implements `BinaryNode` and gets the
//! level queries for free.

use std::collections::VecDeque;
use std::mem;

/// A node with at most two children.
pub trait BinaryNode {
    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

/// An iterator over the number of nodes at each depth of a tree, starting at the root.
///
/// # Examples
///
/// ```
/// use tree_breadth::bst::BstMultiset;
///
/// let tree: BstMultiset<u32> = vec![2, 1, 3, 4].into_iter().collect();
/// assert_eq!(tree.level_widths().collect::<Vec<usize>>(), vec![1, 2, 1]);
/// ```
pub struct LevelWidths<'a, N> {
    queue: VecDeque<&'a N>,
}

impl<'a, N> LevelWidths<'a, N>
where
    N: BinaryNode,
{
    pub fn new(root: Option<&'a N>) -> Self {
        LevelWidths {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, N> Iterator for LevelWidths<'a, N>
where
    N: BinaryNode,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let width = self.queue.len();
        if width == 0 {
            return None;
        }

        for node in mem::take(&mut self.queue) {
            if let Some(right_node) = node.right() {
                self.queue.push_back(right_node);
            }
            if let Some(left_node) = node.left() {
                self.queue.push_back(left_node);
            }
        }

        Some(width)
    }
}

/// Returns the largest number of nodes found at a single depth, or 0 for an empty tree.
pub fn max_width<N>(root: Option<&N>) -> usize
where
    N: BinaryNode,
{
    LevelWidths::new(root).max().unwrap_or(0)
}

/// Returns the number of levels in the tree, or 0 for an empty tree.
pub fn height<N>(root: Option<&N>) -> usize
where
    N: BinaryNode,
{
    LevelWidths::new(root).count()
}
