use crate::bst::node::Node;
use crate::comparator::Comparator;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Attaches `new_node` as a leaf. Values that are not less than a node's value go right, so
/// equal values pile up in right subtrees in insertion order.
pub fn insert<T, C>(mut tree: &mut Tree<T>, new_node: Node<T>, comparator: &C)
where
    C: Comparator<T>,
{
    loop {
        match tree {
            Some(node) => {
                tree = if comparator.less(&new_node.value, &node.value) {
                    &mut node.left
                } else {
                    &mut node.right
                };
            },
            None => {
                *tree = Some(Box::new(new_node));
                return;
            },
        }
    }
}

/// Releases every node of the tree without recursing, so a degenerate chain of any length can be
/// dropped. Children are detached before their parent is released.
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

#[cfg(test)]
pub fn is_ordered<T, C>(tree: &Tree<T>, comparator: &C) -> bool
where
    C: Comparator<T>,
{
    // every node carries the exclusive lower and upper bound inherited from its ancestors
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
            if !comparator.less(&node.value, upper) {
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
