//! Read operations for the B-tree.
//!
//! This module contains key search, membership tests, and the min/max
//! lookups, along with the subtree extrema helpers the delete path uses to
//! find predecessor and successor keys.

use crate::arena::NodeId;
use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, SearchResult};

impl<T: Ord + Clone> BTree<T> {
    /// Search for an element in the tree.
    ///
    /// Returns the node, depth (root = 0), and key index of the match, or
    /// `None` if the element is absent. An empty tree returns `None` without
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::from_seed(2, [1, 3, 5, 4]).unwrap();
    /// let hit = tree.search(&5).unwrap();
    /// assert_eq!((hit.depth, hit.index), (1, 1));
    /// assert!(tree.search(&100).is_none());
    /// ```
    pub fn search(&self, element: &T) -> Option<SearchResult> {
        let mut current = self.root?;
        let mut depth = 0;

        loop {
            let node = &self.arena[current];
            match node.keys.binary_search(element) {
                Ok(index) => {
                    return Some(SearchResult {
                        node: current,
                        depth,
                        index,
                    })
                }
                Err(index) => {
                    if node.is_leaf() {
                        return None;
                    }
                    current = node.children[index];
                    depth += 1;
                }
            }
        }
    }

    /// Returns true if the element is present in the tree.
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_some()
    }

    /// Resolve a [`SearchResult`] back to the key it points at.
    ///
    /// Returns `None` if the location no longer exists, e.g. after the tree
    /// has been mutated since the search.
    pub fn key_at(&self, result: &SearchResult) -> Option<&T> {
        self.arena.get(result.node)?.keys.get(result.index)
    }

    /// Find the minimum element.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::EmptyTree`] if the tree has no root.
    pub fn min(&self) -> BTreeResult<&T> {
        let root = self.root.ok_or(BTreeError::EmptyTree)?;
        self.subtree_min(root).ok_or(BTreeError::EmptyTree)
    }

    /// Find the maximum element.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::EmptyTree`] if the tree has no root.
    pub fn max(&self) -> BTreeResult<&T> {
        let root = self.root.ok_or(BTreeError::EmptyTree)?;
        self.subtree_max(root).ok_or(BTreeError::EmptyTree)
    }

    /// Minimum key of the subtree rooted at `node_id`: follow the leftmost
    /// child pointer down to a leaf and take its first key.
    pub(crate) fn subtree_min(&self, node_id: NodeId) -> Option<&T> {
        let mut current = node_id;
        loop {
            let node = &self.arena[current];
            match node.children.first() {
                Some(&child) => current = child,
                None => return node.keys.first(),
            }
        }
    }

    /// Maximum key of the subtree rooted at `node_id`: follow the rightmost
    /// child pointer down to a leaf and take its last key.
    pub(crate) fn subtree_max(&self, node_id: NodeId) -> Option<&T> {
        let mut current = node_id;
        loop {
            let node = &self.arena[current];
            match node.children.last() {
                Some(&child) => current = child,
                None => return node.keys.last(),
            }
        }
    }
}
