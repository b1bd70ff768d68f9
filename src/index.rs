//! An ordered index of unique integer keys implemented with an AVL tree.

use std::fmt;
use std::iter::FromIterator;

use tracing::debug;

use crate::error::{DeleteOutcome, InsertOutcome, Result};
use crate::traverse::{Order, Traverse};
use crate::tree::{self, Link};

/// An ordered index of unique `i32` keys implemented with an AVL tree.
///
/// ```
/// use avl_index::{AvlIndex, DeleteOutcome, InsertOutcome, Order};
/// let mut index = AvlIndex::new();
/// assert_eq!(index.insert(10), InsertOutcome::Inserted);
/// assert_eq!(index.insert(20), InsertOutcome::Inserted);
/// assert_eq!(index.insert(30), InsertOutcome::Inserted);
/// assert_eq!(index.insert(20), InsertOutcome::DuplicateRejected);
/// assert_eq!(index.traverse(Order::PreOrder).collect::<Vec<_>>(), [20, 10, 30]);
/// assert_eq!(index.delete(20), DeleteOutcome::Deleted);
/// assert!(!index.contains(20));
/// ```
#[derive(Clone, Default)]
pub struct AvlIndex {
    root: Link,
    num_nodes: usize,
}

impl AvlIndex {
    /// Creates an empty index.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the index contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, counted in nodes. An empty index has height 0.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the key stored at the root of the tree.
    pub fn root_key(&self) -> Option<i32> {
        self.root.as_ref().map(|root| root.key)
    }

    /// Clears the index, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns true if the index contains `key`.
    pub fn contains(&self, key: i32) -> bool {
        tree::contains(&self.root, key)
    }

    /// Inserts a key into the index.
    /// A key that is already present is rejected and the index is left unchanged.
    pub fn insert(&mut self, key: i32) -> InsertOutcome {
        if self.contains(key) {
            debug!(key, "duplicate key rejected");
            return InsertOutcome::DuplicateRejected;
        }
        self.root = tree::insert(self.root.take(), key);
        self.num_nodes += 1;
        debug!(key, len = self.num_nodes, "inserted");
        InsertOutcome::Inserted
    }

    /// Removes a key from the index.
    /// A key that is not present is reported and the index is left unchanged.
    pub fn delete(&mut self, key: i32) -> DeleteOutcome {
        if !self.contains(key) {
            debug!(key, "key not found");
            return DeleteOutcome::NotFound;
        }
        debug_assert!(self.num_nodes >= 1);
        self.root = tree::delete(self.root.take(), key);
        self.num_nodes -= 1;
        debug_assert!(!self.contains(key));
        debug!(key, len = self.num_nodes, "deleted");
        DeleteOutcome::Deleted
    }

    /// Inserts a key, returning [`IndexError::DuplicateKey`] if it is already present.
    ///
    /// [`IndexError::DuplicateKey`]: crate::IndexError::DuplicateKey
    pub fn try_insert(&mut self, key: i32) -> Result<()> {
        self.insert(key).into_result(key)
    }

    /// Removes a key, returning [`IndexError::KeyNotFound`] if it is not present.
    ///
    /// [`IndexError::KeyNotFound`]: crate::IndexError::KeyNotFound
    pub fn try_delete(&mut self, key: i32) -> Result<()> {
        self.delete(key).into_result(key)
    }

    /// Gets a lazy iterator over the keys in the given order.
    /// Traversing an unchanged index again yields the same sequence.
    pub fn traverse(&self, order: Order) -> Traverse<'_> {
        Traverse::new(&self.root, self.num_nodes, order)
    }

    /// Gets an iterator over the keys in ascending order.
    pub fn in_order(&self) -> Traverse<'_> {
        self.traverse(Order::InOrder)
    }

    /// Gets an iterator over the keys in pre-order (node before its subtrees).
    pub fn pre_order(&self) -> Traverse<'_> {
        self.traverse(Order::PreOrder)
    }

    /// Gets an iterator over the keys in post-order (subtrees before their node).
    pub fn post_order(&self) -> Traverse<'_> {
        self.traverse(Order::PostOrder)
    }

    /// Asserts BST order, height bookkeeping, AVL balance and the node count.
    /// Panics on the first violation found.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        fn check(link: &Link, lower: Option<i32>, upper: Option<i32>) -> (usize, usize) {
            let node = match link {
                None => return (0, 0),
                Some(node) => node,
            };

            // Check key against the bounds inherited from the ancestors
            if let Some(lower) = lower {
                assert!(node.key > lower, "key {} not above {}", node.key, lower);
            }
            if let Some(upper) = upper {
                assert!(node.key < upper, "key {} not below {}", node.key, upper);
            }

            let (left_height, left_nodes) = check(&node.left, lower, Some(node.key));
            let (right_height, right_nodes) = check(&node.right, Some(node.key), upper);

            // Check height
            assert_eq!(node.height, 1 + left_height.max(right_height));

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            (node.height, 1 + left_nodes + right_nodes)
        }

        let (_, num_nodes) = check(&self.root, None, None);
        assert_eq!(num_nodes, self.num_nodes);
    }
}

impl FromIterator<i32> for AvlIndex {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl Extend<i32> for AvlIndex {
    /// Inserts every key, skipping duplicates.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = i32>,
    {
        iter.into_iter().for_each(move |key| {
            let _ = self.insert(key);
        });
    }
}

impl<'a> Extend<&'a i32> for AvlIndex {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a i32>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a> IntoIterator for &'a AvlIndex {
    type Item = i32;
    type IntoIter = Traverse<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl fmt::Debug for AvlIndex {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.in_order()).finish()
    }
}
