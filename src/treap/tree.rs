use crate::comparator::Comparator;
use crate::treap::node::Node;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Splits `tree` into the nodes whose values `pivot` is not less than and the nodes whose values are
/// greater than `pivot`. Values equal to `pivot` land in the first half, so a new node holding
/// `pivot` takes them into its left subtree. Every value in the first half is still not greater
/// than every value in the second. Priorities are never compared, and because every node keeps its
/// ancestors from the original tree the heap order is preserved too.
pub fn split<T, C>(mut tree: Tree<T>, pivot: &T, comparator: &C) -> (Tree<T>, Tree<T>)
where
    C: Comparator<T>,
{
    let mut less = None;
    let mut not_less = None;
    // the next empty link to fill on each side
    let mut less_hole = &mut less;
    let mut not_less_hole = &mut not_less;

    while let Some(mut node) = tree {
        if !comparator.less(pivot, &node.value) {
            tree = node.right.take();
            less_hole = &mut less_hole.insert(node).right;
        } else {
            tree = node.left.take();
            not_less_hole = &mut not_less_hole.insert(node).left;
        }
    }

    (less, not_less)
}

/// Inserts `new_node` below every node whose priority is at least as large as its own. The
/// subtree it displaces is split by the new value into its left and right children.
pub fn insert<T, C>(mut tree: &mut Tree<T>, mut new_node: Node<T>, comparator: &C)
where
    C: Comparator<T>,
{
    loop {
        let descend_left = match *tree {
            Some(ref node) if node.priority >= new_node.priority => {
                comparator.less(&new_node.value, &node.value)
            },
            _ => break,
        };
        tree = match tree {
            Some(node) => {
                if descend_left {
                    &mut node.left
                } else {
                    &mut node.right
                }
            },
            None => break,
        };
    }

    let (left, right) = split(tree.take(), &new_node.value, comparator);
    new_node.left = left;
    new_node.right = right;
    *tree = Some(Box::new(new_node));
}

/// Releases every node of the tree without recursing. Children are detached before their parent
/// is released.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        if let Some(left_node) = node.left.take() {
            stack.push(left_node);
        }
        if let Some(right_node) = node.right.take() {
            stack.push(right_node);
        }
    }
}

// Equal values may sit on either side of a node, so both bounds are inclusive.
#[cfg(test)]
pub fn is_ordered<T, C>(tree: &Tree<T>, comparator: &C) -> bool
where
    C: Comparator<T>,
{
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push((node, None, None));
    }
    while let Some((node, lower, upper)) = stack.pop() {
        if let Some(lower) = lower {
            if comparator.less(&node.value, lower) {
                return false;
            }
        }
        if let Some(upper) = upper {
            if comparator.less(upper, &node.value) {
                return false;
            }
        }
        if let Some(ref left_node) = node.left {
            stack.push((left_node, lower, Some(&node.value)));
        }
        if let Some(ref right_node) = node.right {
            stack.push((right_node, Some(&node.value), upper));
        }
    }
    true
}

#[cfg(test)]
pub fn is_heap_ordered<T>(tree: &Tree<T>) -> bool {
    let mut stack: Vec<&Node<T>> = tree.as_deref().into_iter().collect();
    while let Some(node) = stack.pop() {
        for child in node.left.iter().chain(node.right.iter()) {
            if child.priority > node.priority {
                return false;
            }
            stack.push(&**child);
        }
    }
    true
}

#[cfg(test)]
pub fn values<T>(tree: &Tree<T>) -> Vec<&T> {
    let mut ret = Vec::new();
    let mut stack = Vec::new();
    let mut current = tree.as_deref();
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        match stack.pop() {
            Some(node) => {
                ret.push(&node.value);
                current = node.right.as_deref();
            },
            None => return ret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{insert, is_heap_ordered, is_ordered, split, values, Tree};
    use crate::comparator::DefaultComparator;
    use crate::treap::node::Node;

    fn build(entries: &[(i32, u64)]) -> Tree<i32> {
        let mut tree = None;
        for &(value, priority) in entries {
            insert(&mut tree, Node::new(value, priority), &DefaultComparator);
        }
        tree
    }

    #[test]
    fn test_insert_into_empty() {
        let tree = build(&[(1, 0)]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 1);
        assert!(root.left.is_none());
        assert!(root.right.is_none());
    }

    #[test]
    fn test_insert_higher_priority_becomes_root() {
        let tree = build(&[(10, 1), (5, 2), (20, 3), (15, 4)]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 15);
        assert_eq!(root.priority, 4);
        assert_eq!(root.right.as_ref().map(|node| node.value), Some(20));
        assert_eq!(values(&tree), vec![&5, &10, &15, &20]);
        assert!(is_ordered(&tree, &DefaultComparator));
        assert!(is_heap_ordered(&tree));
    }

    #[test]
    fn test_insert_equal_priority_stays_below() {
        let tree = build(&[(10, 7), (5, 7)]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 10);
        assert_eq!(root.left.as_ref().map(|node| node.value), Some(5));
    }

    #[test]
    fn test_insert_duplicate_values() {
        // a descending insert sends equal values right, a split sends them left of the new node
        let tree = build(&[(3, 5), (3, 4), (3, 9)]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.priority, 9);
        assert!(root.right.is_none());
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.priority, 5);
        assert!(left.left.is_none());
        assert_eq!(left.right.as_ref().map(|node| node.priority), Some(4));
        assert!(is_ordered(&tree, &DefaultComparator));
        assert!(is_heap_ordered(&tree));
    }

    #[test]
    fn test_insert_duplicate_displaces_equal_value() {
        let tree = build(&[(5, 1), (5, 2), (6, 0)]);
        let root = tree.as_ref().unwrap();
        assert_eq!((root.value, root.priority), (5, 2));
        let left = root.left.as_ref().unwrap();
        assert_eq!((left.value, left.priority), (5, 1));
        assert_eq!(root.right.as_ref().map(|node| node.value), Some(6));
    }

    #[test]
    fn test_split_empty() {
        let (less, not_less) = split(None, &0, &DefaultComparator);
        assert!(less.is_none());
        assert!(not_less.is_none());
    }

    #[test]
    fn test_split() {
        let tree = build(&[(50, 9), (30, 8), (70, 7), (20, 6), (40, 5), (60, 4), (80, 3)]);
        let (less, not_less) = split(tree, &40, &DefaultComparator);
        assert_eq!(values(&less), vec![&20, &30, &40]);
        assert_eq!(values(&not_less), vec![&50, &60, &70, &80]);
        assert!(is_ordered(&less, &DefaultComparator));
        assert!(is_ordered(&not_less, &DefaultComparator));
        assert!(is_heap_ordered(&less));
        assert!(is_heap_ordered(&not_less));
    }

    #[test]
    fn test_split_pivot_outside_range() {
        let tree = build(&[(2, 3), (1, 2), (3, 1)]);
        let (less, not_less) = split(tree, &10, &DefaultComparator);
        assert_eq!(values(&less), vec![&1, &2, &3]);
        assert!(not_less.is_none());

        let tree = build(&[(2, 3), (1, 2), (3, 1)]);
        let (less, not_less) = split(tree, &0, &DefaultComparator);
        assert!(less.is_none());
        assert_eq!(values(&not_less), vec![&1, &2, &3]);
    }

    quickcheck::quickcheck! {
        fn prop_split_partitions(entries: Vec<(i16, u8)>, pivot: i16) -> bool {
            let mut tree = None;
            for &(value, priority) in &entries {
                insert(&mut tree, Node::new(value, u64::from(priority)), &DefaultComparator);
            }
            let (less, not_less) = split(tree, &pivot, &DefaultComparator);

            let mut expected: Vec<i16> = entries.iter().map(|entry| entry.0).collect();
            expected.sort();
            let mut actual: Vec<i16> = values(&less).into_iter().cloned().collect();
            actual.extend(values(&not_less).into_iter().cloned());

            actual == expected
                && values(&less).into_iter().all(|value| *value <= pivot)
                && values(&not_less).into_iter().all(|value| *value > pivot)
                && is_ordered(&less, &DefaultComparator)
                && is_ordered(&not_less, &DefaultComparator)
        }

        fn prop_insert_keeps_invariants(entries: Vec<(i16, u8)>) -> bool {
            let mut tree = None;
            for &(value, priority) in &entries {
                insert(&mut tree, Node::new(value, u64::from(priority)), &DefaultComparator);
            }
            is_ordered(&tree, &DefaultComparator)
                && is_heap_ordered(&tree)
                && values(&tree).len() == entries.len()
        }
    }
}
