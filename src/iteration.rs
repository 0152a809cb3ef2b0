//! In-order iteration over the B-tree.
//!
//! The iterator keeps an explicit stack of `(node, next key index)` frames
//! instead of recursing, descending leftmost on entry to each subtree. Keys
//! come out in strictly ascending order.

use crate::arena::NodeId;
use crate::types::{BTree, Node};

/// Borrowing in-order iterator over the keys of a [`BTree`].
pub struct Iter<'a, T> {
    tree: &'a BTree<T>,
    /// Traversal frames: node ID and the index of the next key to yield.
    stack: Vec<(NodeId, usize)>,
}

impl<T: Ord + Clone> BTree<T> {
    /// Returns an iterator over all keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::from_seed(2, [5, 1, 4, 2, 3]).unwrap();
    /// let keys: Vec<i32> = tree.iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 3, 4, 5]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        if let Some(root) = self.root {
            iter.push_leftmost(root);
        }
        iter
    }
}

impl<'a, T: Ord + Clone> Iter<'a, T> {
    /// Push the chain of leftmost descendants starting at `node_id`.
    fn push_leftmost(&mut self, mut node_id: NodeId) {
        loop {
            self.stack.push((node_id, 0));
            match self.tree.arena[node_id].children.first() {
                Some(&child) => node_id = child,
                None => break,
            }
        }
    }
}

impl<'a, T: Ord + Clone> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let &(node_id, index) = self.stack.last()?;
            let node: &'a Node<T> = &self.tree.arena[node_id];

            if index >= node.keys.len() {
                // Subtree exhausted; resume in the parent frame.
                self.stack.pop();
                continue;
            }

            if let Some(frame) = self.stack.last_mut() {
                frame.1 = index + 1;
            }
            // In an internal node the subtree between this key and the next
            // one comes first; queue it before yielding.
            if let Some(&right) = node.children.get(index + 1) {
                self.push_leftmost(right);
            }
            return Some(&node.keys[index]);
        }
    }
}

impl<'a, T: Ord + Clone> IntoIterator for &'a BTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::BTree;

    #[test]
    fn test_iterates_in_ascending_order() {
        let tree = BTree::from_seed(2, [1, 3, 5, 4, 7, 8, 9, 2, 6, 10, 12]).unwrap();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12]);
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let tree = BTree::<i32>::new(2).unwrap();
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_single_node_tree() {
        let tree = BTree::from_seed(4, [3, 1, 2]).unwrap();
        let keys: Vec<i32> = tree.iter().copied().collect();
        assert_eq!(keys, [1, 2, 3]);
    }

    #[test]
    fn test_order_preserved_across_removals() {
        let mut tree = BTree::from_seed(2, 1..=40).unwrap();
        for e in (2..=40).step_by(2) {
            tree.remove(&e);
        }
        let keys: Vec<i32> = tree.iter().copied().collect();
        let expected: Vec<i32> = (1..=40).step_by(2).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let tree = BTree::from_seed(3, [2, 1, 3]).unwrap();
        let mut collected = Vec::new();
        for key in &tree {
            collected.push(*key);
        }
        assert_eq!(collected, [1, 2, 3]);
    }
}
