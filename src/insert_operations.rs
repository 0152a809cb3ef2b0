//! Insert operations for the B-tree.
//!
//! Insertion splits proactively on the way down: the root is split before
//! descent if full, and every full child is split before it is entered, so
//! the recursion only ever inserts into non-full nodes. Splitting the root is
//! the only way the tree gains height.

use crate::arena::NodeId;
use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTree, Node};

impl<T: Ord + Clone> BTree<T> {
    /// Insert an element into the tree.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::DuplicateKey`] if the element is already
    /// present. The check runs before any structural write, so a failed
    /// insert leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::{BTree, BTreeError};
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.insert(1).unwrap_err(), BTreeError::DuplicateKey);
    /// ```
    pub fn insert(&mut self, element: T) -> BTreeResult<()> {
        if self.search(&element).is_some() {
            return Err(BTreeError::DuplicateKey);
        }

        let mut root_id = match self.root {
            Some(id) => id,
            None => {
                let id = self.arena.allocate(Node::default());
                self.root = Some(id);
                id
            }
        };

        if self.arena[root_id].is_full(self.min_degree) {
            root_id = self.split_root(root_id);
        }

        self.insert_non_full(root_id, element);
        Ok(())
    }

    /// Grow the tree by one level: a fresh empty root adopts the old root as
    /// its sole child, then splits it. Returns the new root ID.
    fn split_root(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self.arena.allocate(Node::new(Vec::new(), vec![old_root]));
        self.root = Some(new_root);
        self.split_child(new_root, 0);
        new_root
    }

    /// Insert `element` into the subtree rooted at `node_id`.
    ///
    /// The node is guaranteed non-full by the caller, which is what makes the
    /// median promotion in `split_child` always fit.
    fn insert_non_full(&mut self, node_id: NodeId, element: T) {
        if self.arena[node_id].is_leaf() {
            let node = &mut self.arena[node_id];
            // The duplicate pre-check makes an exact hit unreachable, but a
            // hit is simply nothing to do.
            if let Err(pos) = node.keys.binary_search(&element) {
                node.keys.insert(pos, element);
            }
            return;
        }

        let mut index = match self.arena[node_id].keys.binary_search(&element) {
            Ok(_) => return,
            Err(index) => index,
        };

        let child_id = self.arena[node_id].children[index];
        if self.arena[child_id].is_full(self.min_degree) {
            self.split_child(node_id, index);
            // The promoted median now sits at `index`; descend right of it
            // when the new element is larger.
            if self.arena[node_id].keys[index] < element {
                index += 1;
            }
        }

        let target = self.arena[node_id].children[index];
        self.insert_non_full(target, element);
    }

    /// Split the full child at `children[index]` of a non-full parent.
    ///
    /// The child keeps its lower `t - 1` keys (and, if internal, its lower
    /// `t` children); the upper `t - 1` keys and upper `t` children move to a
    /// fresh sibling inserted at `index + 1`; the median key is promoted into
    /// the parent at `index`.
    pub(crate) fn split_child(&mut self, parent_id: NodeId, index: usize) {
        let t = self.min_degree;
        let child_id = self.arena[parent_id].children[index];

        let (median, sibling) = {
            let child = &mut self.arena[child_id];
            // keys: [0, t-1) stay, t-1 is the median, [t, 2t-1) move.
            let mut upper_keys = child.keys.split_off(t - 1);
            let median = upper_keys.remove(0);
            let upper_children = if child.is_leaf() {
                Vec::new()
            } else {
                child.children.split_off(t)
            };
            (median, Node::new(upper_keys, upper_children))
        };

        let sibling_id = self.arena.allocate(sibling);
        let parent = &mut self.arena[parent_id];
        parent.children.insert(index + 1, sibling_id);
        parent.keys.insert(index, median);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty_tree_creates_leaf_root() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert(42).unwrap();
        assert_eq!(tree.to_string(), "BTree([keys={42},children={}])");
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_root_split_grows_height() {
        let mut tree = BTree::new(2).unwrap();
        for e in [1, 2, 3] {
            tree.insert(e).unwrap();
        }
        assert_eq!(tree.height(), 1);

        // Fourth insert finds a full root and splits it.
        tree.insert(4).unwrap();
        assert_eq!(tree.height(), 2);
        assert_eq!(
            tree.to_string(),
            "BTree([keys={2},children={[keys={1},children={}],[keys={3,4},children={}]}])"
        );
    }

    #[test]
    fn test_insert_splits_internal_children() {
        let tree = BTree::from_seed(2, [1, 3, 5, 4, 7, 8, 9, 2, 6, 10, 12]).unwrap();
        assert_eq!(
            tree.to_string(),
            "BTree([keys={5},children={[keys={3},children={[keys={1,2},children={}],\
             [keys={4},children={}]}],[keys={8},children={[keys={6,7},children={}],\
             [keys={9,10,12},children={}]}]}])"
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_duplicate_insert_fails_without_mutation() {
        let mut tree = BTree::from_seed(2, [1, 3, 5, 4]).unwrap();
        let before = tree.to_string();
        assert_eq!(tree.insert(1).unwrap_err(), BTreeError::DuplicateKey);
        assert_eq!(tree.to_string(), before);
    }

    #[test]
    fn test_ascending_and_descending_inserts_stay_balanced() {
        for degree in [2, 3, 4] {
            let ascending = BTree::from_seed(degree, 1..=100).unwrap();
            assert!(ascending.check_invariants());
            assert_eq!(ascending.len(), 100);

            let descending = BTree::from_seed(degree, (1..=100).rev()).unwrap();
            assert!(descending.check_invariants());
            assert_eq!(descending.len(), 100);
        }
    }
}
