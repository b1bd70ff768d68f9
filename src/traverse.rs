//! Lazy depth-first traversals.

use std::fmt;
use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// The order in which [`Traverse`] yields keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree. Reflects the shape of the tree.
    PreOrder,
    /// Left subtree, right subtree, node. Children come before their parent.
    PostOrder,
}

impl Order {
    /// All traversal orders.
    pub const ALL: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::InOrder => "in-order",
            Order::PreOrder => "pre-order",
            Order::PostOrder => "post-order",
        };
        f.write_str(name)
    }
}

enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

/// An iterator over the keys of an [`AvlIndex`](crate::AvlIndex) in a given [`Order`].
///
/// This `struct` is created by the [`traverse`] method on [`AvlIndex`].
///
/// [`AvlIndex`]: crate::AvlIndex
/// [`traverse`]: crate::AvlIndex::traverse
pub struct Traverse<'a> {
    order: Order,
    stack: Vec<(&'a Node, Direction)>,
    remaining: usize,
}

impl<'a> Traverse<'a> {
    pub(crate) fn new(root: &'a Link, len: usize, order: Order) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root.as_deref() {
            stack.push((root, Direction::FromParent));
        }
        Self {
            order,
            stack,
            remaining: len,
        }
    }

    /// Returns the order this iterator yields keys in.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a> Iterator for Traverse<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        // Every node passes through all three directions;
        // the order decides at which one its key is yielded.
        while let Some((node, dir)) = self.stack.pop() {
            let visit = match dir {
                Direction::FromParent => {
                    self.stack.push((node, Direction::FromLeft));
                    if let Some(left) = node.left.as_deref() {
                        self.stack.push((left, Direction::FromParent));
                    }
                    self.order == Order::PreOrder
                }
                Direction::FromLeft => {
                    self.stack.push((node, Direction::FromRight));
                    if let Some(right) = node.right.as_deref() {
                        self.stack.push((right, Direction::FromParent));
                    }
                    self.order == Order::InOrder
                }
                Direction::FromRight => self.order == Order::PostOrder,
            };
            if visit {
                self.remaining -= 1;
                return Some(node.key);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Traverse<'a> {}

impl<'a> FusedIterator for Traverse<'a> {}

impl<'a> fmt::Debug for Traverse<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverse")
            .field("order", &self.order)
            .field("remaining", &self.remaining)
            .finish()
    }
}
