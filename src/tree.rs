use std::cmp::{self, Ordering};

use tracing::trace;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) height: usize,
}

/// Names the four rebalancing cases, used when tracing rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
}

impl Node {
    fn create(key: i32) -> Box<Node> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

pub(crate) fn height(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => node.height,
    }
}

pub(crate) fn balance_factor(link: &Link) -> isize {
    match link {
        None => 0,
        Some(node) => node.balance_factor(),
    }
}

/// Rotates the subtree rooted at `node` to the right and returns the new subtree root.
/// A node without left child is returned unchanged.
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    match node.left.take() {
        None => node,
        Some(mut left) => {
            node.left = left.right.take();
            node.adjust_height();
            left.right = Some(node);
            left.adjust_height();
            left
        }
    }
}

/// Rotates the subtree rooted at `node` to the left and returns the new subtree root.
/// A node without right child is returned unchanged.
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    match node.right.take() {
        None => node,
        Some(mut right) => {
            node.right = right.left.take();
            node.adjust_height();
            right.left = Some(node);
            right.adjust_height();
            right
        }
    }
}

fn apply(rotation: Rotation, mut node: Box<Node>) -> Box<Node> {
    trace!(?rotation, pivot = node.key, "rotate");
    match rotation {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

pub(crate) fn contains(link: &Link, key: i32) -> bool {
    let mut current = link;
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Equal => return true,
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
        };
    }
    false
}

/// Inserts `key` below `link` and returns the rebalanced subtree.
/// A key already present leaves the subtree untouched.
pub(crate) fn insert(link: Link, key: i32) -> Link {
    let mut node = match link {
        None => return Some(Node::create(key)),
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        Ordering::Greater => node.right = insert(node.right.take(), key),
        Ordering::Equal => return Some(node),
    }
    Some(rebalance_after_insert(node, key))
}

// The inserted key tells which grandchild grew, so it selects the case.
fn rebalance_after_insert(mut node: Box<Node>, key: i32) -> Box<Node> {
    node.adjust_height();
    let balance = node.balance_factor();
    if balance > 1 {
        if let Some(left_key) = node.left.as_ref().map(|left| left.key) {
            return if key < left_key {
                apply(Rotation::LeftLeft, node)
            } else {
                apply(Rotation::LeftRight, node)
            };
        }
    } else if balance < -1 {
        if let Some(right_key) = node.right.as_ref().map(|right| right.key) {
            return if key > right_key {
                apply(Rotation::RightRight, node)
            } else {
                apply(Rotation::RightLeft, node)
            };
        }
    }
    node
}

/// Removes `key` below `link` and returns the rebalanced subtree.
/// An absent key leaves the subtree untouched.
pub(crate) fn delete(link: Link, key: i32) -> Link {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => return Some(child),
            (Some(left), Some(right)) => {
                // Two children: take over the in-order successor's key,
                // then remove the successor from the right subtree.
                let successor = min_key(&right);
                node.key = successor;
                node.left = Some(left);
                node.right = delete(Some(right), successor);
            }
        },
    }
    Some(rebalance_after_delete(node))
}

// Runs on every returning frame; removal may unbalance several ancestors.
fn rebalance_after_delete(mut node: Box<Node>) -> Box<Node> {
    node.adjust_height();
    let balance = node.balance_factor();
    if balance > 1 {
        if balance_factor(&node.left) >= 0 {
            apply(Rotation::LeftLeft, node)
        } else {
            apply(Rotation::LeftRight, node)
        }
    } else if balance < -1 {
        if balance_factor(&node.right) <= 0 {
            apply(Rotation::RightRight, node)
        } else {
            apply(Rotation::RightLeft, node)
        }
    } else {
        node
    }
}

fn min_key(node: &Node) -> i32 {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current.key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Link {
        Some(Node::create(key))
    }

    fn branch(key: i32, left: Link, right: Link) -> Link {
        let mut node = Node::create(key);
        node.left = left;
        node.right = right;
        node.adjust_height();
        Some(node)
    }

    fn keys_preorder(link: &Link, keys: &mut Vec<i32>) {
        if let Some(node) = link {
            keys.push(node.key);
            keys_preorder(&node.left, keys);
            keys_preorder(&node.right, keys);
        }
    }

    #[test]
    fn test_height_and_balance_factor() {
        assert_eq!(height(&None), 0);
        assert_eq!(balance_factor(&None), 0);

        //     3
        //    /
        //   2
        //  /
        // 1
        let chain = branch(3, branch(2, leaf(1), None), None);
        assert_eq!(height(&chain), 3);
        assert_eq!(balance_factor(&chain), 2);
    }

    #[test]
    fn test_rotate_right() {
        //       4          2
        //      / \        / \
        //     2   5  ->  1   4
        //    / \            / \
        //   1   3          3   5
        let tree = branch(4, branch(2, leaf(1), leaf(3)), leaf(5));
        let rotated = tree.map(rotate_right);
        let mut keys = Vec::new();
        keys_preorder(&rotated, &mut keys);
        assert_eq!(keys, vec![2, 1, 4, 3, 5]);

        let root = rotated.as_ref().map(|node| (node.height, height(&node.right)));
        assert_eq!(root, Some((3, 2)));
    }

    #[test]
    fn test_rotate_left() {
        //   2              4
        //  / \            / \
        // 1   4    ->    2   5
        //    / \        / \
        //   3   5      1   3
        let tree = branch(2, leaf(1), branch(4, leaf(3), leaf(5)));
        let rotated = tree.map(rotate_left);
        let mut keys = Vec::new();
        keys_preorder(&rotated, &mut keys);
        assert_eq!(keys, vec![4, 2, 1, 3, 5]);

        let root = rotated.as_ref().map(|node| (node.height, height(&node.left)));
        assert_eq!(root, Some((3, 2)));
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let rotated = leaf(7).map(rotate_right).map(rotate_left);
        assert_eq!(rotated.as_ref().map(|node| (node.key, node.height)), Some((7, 1)));
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        //   5          6
        //  / \        / \
        // 2   8  ->  2   8
        //    / \          \
        //   6   9          9
        let tree = branch(5, leaf(2), branch(8, leaf(6), leaf(9)));
        let tree = delete(tree, 5);
        let mut keys = Vec::new();
        keys_preorder(&tree, &mut keys);
        assert_eq!(keys, vec![6, 2, 8, 9]);
        assert!(!contains(&tree, 5));
    }

    #[test]
    fn test_delete_absent_key_keeps_tree() {
        let tree = branch(5, leaf(2), leaf(8));
        let tree = delete(tree, 42);
        let mut keys = Vec::new();
        keys_preorder(&tree, &mut keys);
        assert_eq!(keys, vec![5, 2, 8]);
    }
}
