use crate::bst::node::Node;
use crate::bst::tree;
use crate::comparator::{Comparator, DefaultComparator};
use crate::width::{self, LevelWidths};
use std::iter::FromIterator;

/// A multiset implemented using an unbalanced binary search tree.
///
/// Every value is stored as a leaf at the position found by walking down from the root: left when
/// the value is less than the node's value under the comparator, right otherwise. Equal values
/// therefore accumulate in right subtrees. The tree is never rebalanced, so its shape depends only
/// on the order of insertion and sorted input produces a chain.
///
/// # Examples
///
/// ```
/// use tree_breadth::bst::BstMultiset;
///
/// let mut tree = BstMultiset::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.max_width(), 2);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &3]);
/// ```
pub struct BstMultiset<T, C = DefaultComparator> {
    tree: tree::Tree<T>,
    len: usize,
    comparator: C,
}

impl<T> BstMultiset<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BstMultiset<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let tree: BstMultiset<u32> = BstMultiset::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(DefaultComparator)
    }
}

impl<T, C> BstMultiset<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `BstMultiset<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let mut tree = BstMultiset::with_comparator(|a: &u32, b: &u32| a > b);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        BstMultiset {
            tree: None,
            len: 0,
            comparator,
        }
    }

    /// Inserts a value into the tree as a new leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let mut tree = BstMultiset::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) {
        let BstMultiset {
            ref mut tree,
            ref mut len,
            ref comparator,
        } = self;
        tree::insert(tree, Node::new(value), comparator);
        *len += 1;
    }
}

impl<T, C> BstMultiset<T, C> {
    /// Returns the number of values in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let mut tree = BstMultiset::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let tree: BstMultiset<u32> = BstMultiset::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node of the tree, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.tree.as_deref()
    }

    /// Returns the largest number of nodes at any single depth of the tree. An empty tree has a
    /// width of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let mut tree = BstMultiset::new();
    /// assert_eq!(tree.max_width(), 0);
    ///
    /// for value in 0..4 {
    ///     tree.insert(value);
    /// }
    /// assert_eq!(tree.max_width(), 1);
    /// ```
    pub fn max_width(&self) -> usize {
        width::max_width(self.root())
    }

    /// Returns the number of levels in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let tree: BstMultiset<u32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        width::height(self.root())
    }

    /// Returns an iterator over the number of nodes at each depth, starting at the root.
    pub fn level_widths(&self) -> LevelWidths<'_, Node<T>> {
        LevelWidths::new(self.root())
    }

    /// Returns an iterator over the tree. The iterator will yield values in ascending order
    /// according to the comparator, equal values in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_breadth::bst::BstMultiset;
    ///
    /// let tree: BstMultiset<u32> = vec![3, 1, 2].into_iter().collect();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BstMultisetIter<'_, T> {
        BstMultisetIter {
            current: self.tree.as_deref(),
            stack: Vec::new(),
        }
    }
}

impl<T, C> Drop for BstMultiset<T, C> {
    fn drop(&mut self) {
        tree::clear(&mut self.tree);
    }
}

impl<T> Default for BstMultiset<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<T> for BstMultiset<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BstMultiset<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BstMultiset::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BstMultiset<T, C>
where
    T: 'a,
{
    type IntoIter = BstMultisetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `BstMultiset<T, C>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct BstMultisetIter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for BstMultisetIter<'a, T>
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

#[cfg(test)]
mod tests {
    use super::BstMultiset;
    use crate::bst::node::Node;
    use crate::bst::tree;
    use crate::comparator::DefaultComparator;

    #[test]
    fn test_len_empty() {
        let tree: BstMultiset<u32> = BstMultiset::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_insert_shape() {
        let mut tree = BstMultiset::new();
        tree.insert(5);
        tree.insert(3);
        tree.insert(8);
        tree.insert(5);

        let root = tree.root().unwrap();
        assert_eq!(root.value, 5);
        assert_eq!(root.left.as_ref().map(|node| node.value), Some(3));
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.value, 8);
        // the duplicate 5 is not less than 5 and less than 8
        assert_eq!(right.left.as_ref().map(|node| node.value), Some(5));
        assert!(tree::is_ordered(&tree.tree, &DefaultComparator));
    }

    #[test]
    fn test_duplicates_go_right() {
        let tree: BstMultiset<u32> = vec![7, 7, 7].into_iter().collect();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.max_width(), 1);
        assert!(tree.root().unwrap().left.is_none());
    }

    #[test]
    fn test_sorted_input_is_chain() {
        let tree: BstMultiset<u32> = (0..1000).collect();
        assert_eq!(tree.max_width(), 1);
        assert_eq!(tree.height(), 1000);
        assert!(tree.level_widths().all(|width| width == 1));
    }

    #[test]
    fn test_balanced_input() {
        // level order of a complete tree over 1..=15
        let values = vec![8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15];
        let tree: BstMultiset<u32> = values.into_iter().collect();
        assert_eq!(tree.level_widths().collect::<Vec<usize>>(), vec![1, 2, 4, 8]);
        assert_eq!(tree.max_width(), 8);
    }

    #[test]
    fn test_custom_comparator() {
        let mut tree = BstMultiset::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
        tree.extend(vec![-3, 2, 3, -1]);
        assert_eq!(tree.iter().collect::<Vec<&i32>>(), vec![&-1, &2, &-3, &3]);
    }

    #[test]
    fn test_iter_sorted() {
        let tree: BstMultiset<u32> = vec![4, 2, 6, 2, 1, 9, 4].into_iter().collect();
        assert_eq!(
            tree.iter().cloned().collect::<Vec<u32>>(),
            vec![1, 2, 2, 4, 4, 6, 9],
        );
        assert_eq!((&tree).into_iter().count(), tree.len());
    }

    #[test]
    fn test_drop_long_chain() {
        let mut chain = None;
        for value in (0..1_000_000).rev() {
            let mut node = Node::new(value);
            node.right = chain;
            chain = Some(Box::new(node));
        }
        let mut tree: BstMultiset<u32> = BstMultiset::new();
        tree.tree = chain;
        tree.len = 1_000_000;
        drop(tree);
    }

    quickcheck::quickcheck! {
        fn prop_ordered(values: Vec<i16>) -> bool {
            let tree: BstMultiset<i16> = values.iter().cloned().collect();
            let mut expected = values.clone();
            expected.sort();
            tree::is_ordered(&tree.tree, &DefaultComparator)
                && tree.len() == values.len()
                && tree.iter().cloned().collect::<Vec<i16>>() == expected
        }
    }
}
