use crate::comparator::{Comparator, DefaultComparator};
use crate::treap::node::Node;
use crate::treap::tree;
use crate::width::{self, LevelWidths};
use std::iter::FromIterator;

/// A multiset implemented using a treap with caller-supplied priorities.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a value and a priority. Values less than a node's value under the comparator occur in
/// its left subtree and greater values occur in its right subtree. Values equal to a node's value
/// go right when they are inserted below it and end up left of it when it is inserted above them.
/// The priority of a node is greater than or equal to the priority of all nodes in its subtrees.
///
/// The treap never draws priorities itself, so its shape is fully determined by the sequence of
/// values and priorities it is given. When two nodes share a priority, the one inserted first
/// stays higher in the tree.
///
/// # Examples
///
/// ```
/// use tree_breadth::treap::TreapMultiset;
///
/// let mut treap = TreapMultiset::new();
/// treap.insert(1, 5);
/// treap.insert(2, 9);
/// treap.insert(3, 1);
///
/// assert_eq!(treap.len(), 3);
/// assert_eq!(treap.root().map(|node| node.value), Some(2));
/// assert_eq!(treap.max_width(), 2);
/// assert_eq!(treap.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
/// ```
pub struct TreapMultiset<T, C = DefaultComparator> {
    tree: tree::Tree<T>,
    len: usize,
    comparator: C,
}

impl<T> TreapMultiset<T>
where
    T: Ord,
{
    /// Constructs a new, empty `TreapMultiset<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let treap: TreapMultiset<u32> = TreapMultiset::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }
}

impl<T, C> TreapMultiset<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `TreapMultiset<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let mut treap = TreapMultiset::with_comparator(|a: &u32, b: &u32| a > b);
    /// treap.insert(1, 0);
    /// treap.insert(2, 0);
    /// assert_eq!(treap.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        TreapMultiset {
            tree: None,
            len: 0,
            comparator,
        }
    }

    /// Inserts a value with a particular priority into the treap. If the priority is greater than
    /// that of the node it would otherwise sit under, the new node takes that node's place and the
    /// displaced subtree is split around the new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let mut treap = TreapMultiset::new();
    /// treap.insert(1, 1);
    /// treap.insert(0, 2);
    /// assert_eq!(treap.root().map(|node| node.value), Some(0));
    /// ```
    pub fn insert(&mut self, value: T, priority: u64) {
        let TreapMultiset {
            ref mut tree,
            ref mut len,
            ref comparator,
        } = self;
        tree::insert(tree, Node::new(value, priority), comparator);
        *len += 1;
    }
}

impl<T, C> TreapMultiset<T, C> {
    /// Returns the number of values in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let mut treap = TreapMultiset::new();
    /// treap.insert(1, 1);
    /// assert_eq!(treap.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let treap: TreapMultiset<u32> = TreapMultiset::new();
    /// assert!(treap.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node of the treap, if any. The root always holds the highest priority.
    pub fn root(&self) -> Option<&Node<T>> {
        self.tree.as_deref()
    }

    /// Returns the largest number of nodes at any single depth of the treap. An empty treap has a
    /// width of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let mut treap = TreapMultiset::new();
    /// assert_eq!(treap.max_width(), 0);
    ///
    /// treap.insert(2, 3);
    /// treap.insert(1, 2);
    /// treap.insert(3, 1);
    /// assert_eq!(treap.max_width(), 2);
    /// ```
    pub fn max_width(&self) -> usize {
        width::max_width(self.root())
    }

    /// Returns the number of levels in the treap.
    pub fn height(&self) -> usize {
        width::height(self.root())
    }

    /// Returns an iterator over the number of nodes at each depth, starting at the root.
    pub fn level_widths(&self) -> LevelWidths<'_, Node<T>> {
        LevelWidths::new(self.root())
    }

    /// Returns an iterator over the treap. The iterator will yield values in ascending order
    /// according to the comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::treap::TreapMultiset;
    ///
    /// let treap: TreapMultiset<u32> = vec![(2, 0), (3, 9), (1, 4)].into_iter().collect();
    ///
    /// let mut iterator = treap.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapMultisetIter<'_, T> {
        TreapMultisetIter {
            current: self.tree.as_deref(),
            stack: Vec::new(),
        }
    }
}

impl<T, C> Drop for TreapMultiset<T, C> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Default for TreapMultiset<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<(T, u64)> for TreapMultiset<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, u64)>,
    {
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<T> FromIterator<(T, u64)> for TreapMultiset<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, u64)>,
    {
        let mut treap = TreapMultiset::new();
        treap.extend(iter);
        treap
    }
}

impl<'a, T, C> IntoIterator for &'a TreapMultiset<T, C>
where
    T: 'a,
{
    type IntoIter = TreapMultisetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `TreapMultiset<T, C>`.
///
/// This iterator traverses the elements of the treap in-order and yields immutable references.
pub struct TreapMultisetIter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for TreapMultisetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        self.stack.pop().map(|node| {
            self.current = node.right.as_deref();
            &node.value
        })
    }
}
