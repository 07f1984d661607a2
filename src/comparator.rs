//! Strict less-than predicates used to order values inside a tree.

/// A strict weak ordering over values of type `T`.
///
/// Both tree types use `less` to pick a branch: a value goes left of a node iff it is less than
/// the node's value, otherwise it goes right.
///
/// # Examples
///
/// ```
/// use tree_breadth::comparator::{Comparator, DefaultComparator};
///
/// assert!(DefaultComparator.less(&1, &2));
/// assert!(!DefaultComparator.less(&2, &2));
///
/// let reversed = |a: &u32, b: &u32| a > b;
/// assert!(reversed.less(&2, &1));
/// ```
pub trait Comparator<T> {
    /// Returns `true` if `a` is strictly less than `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders values by their natural `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultComparator;

impl<T> Comparator<T> for DefaultComparator
where
    T: Ord,
{
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
