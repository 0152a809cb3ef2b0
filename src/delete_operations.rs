//! Delete operations for the B-tree.
//!
//! Deletion rebalances proactively on the way down: before descending into
//! any child holding fewer than `t` keys, the child first borrows from a
//! sibling or merges with one. Every node the recursion actually visits
//! therefore has at least `t` keys, so removing a key from a leaf or merging
//! two children can never underflow retroactively. Merging under the root is
//! the only way the tree loses height.

use crate::arena::NodeId;
use crate::types::BTree;

impl<T: Ord + Clone> BTree<T> {
    /// Remove an element from the tree.
    ///
    /// Removing an absent element is a no-op, not an error: a search runs
    /// first and the structure is only touched when the element exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::from_seed(2, [1, 3, 5, 4]).unwrap();
    /// tree.remove(&3);
    /// assert!(!tree.contains(&3));
    /// tree.remove(&100); // absent: nothing happens
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn remove(&mut self, element: &T) {
        if self.search(element).is_none() {
            return;
        }

        if let Some(root_id) = self.root {
            self.remove_recursive(root_id, element);
            self.collapse_root_if_empty();
        }
    }

    /// Remove `element` from the subtree rooted at `node_id`.
    ///
    /// The caller guarantees the element exists in this subtree and that the
    /// node holds at least `t` keys (or is the root).
    fn remove_recursive(&mut self, node_id: NodeId, element: &T) {
        let node = &self.arena[node_id];
        let index = node.keys.partition_point(|k| k < element);

        if index < node.key_count() && node.keys[index] == *element {
            if node.is_leaf() {
                self.arena[node_id].keys.remove(index);
            } else {
                self.remove_from_internal(node_id, index, element);
            }
            return;
        }

        if node.is_leaf() {
            // Absent element; the pre-check in `remove` keeps this path cold.
            return;
        }

        let child_id = self.arena[node_id].children[index];
        if !self.arena[child_id].can_donate(self.min_degree) {
            self.rebalance_child(node_id, index);
            // Rebalancing may have merged children or rotated separators, so
            // the descent index must be recomputed.
            let index = self.arena[node_id].keys.partition_point(|k| k < element);
            let target = self.arena[node_id].children[index];
            self.remove_recursive(target, element);
        } else {
            self.remove_recursive(child_id, element);
        }
    }

    /// Remove the key at `keys[index]` of the internal node `node_id`.
    ///
    /// Replaces the key with its predecessor or successor when the adjacent
    /// child can spare one; otherwise merges both children around the key and
    /// recurses into the merged node, where the key now sits at its median.
    fn remove_from_internal(&mut self, node_id: NodeId, index: usize, element: &T) {
        let t = self.min_degree;
        let left_id = self.arena[node_id].children[index];
        let right_id = self.arena[node_id].children[index + 1];

        if self.arena[left_id].can_donate(t) {
            if let Some(predecessor) = self.subtree_max(left_id).cloned() {
                self.remove_recursive(left_id, &predecessor);
                self.arena[node_id].keys[index] = predecessor;
            }
        } else if self.arena[right_id].can_donate(t) {
            if let Some(successor) = self.subtree_min(right_id).cloned() {
                self.remove_recursive(right_id, &successor);
                self.arena[node_id].keys[index] = successor;
            }
        } else {
            self.merge_children(node_id, index);
            self.remove_recursive(left_id, element);
        }
    }

    /// Merge `children[index]`, the separator `keys[index]`, and
    /// `children[index + 1]` into the left child; the right child is
    /// deallocated. The parent loses one key and one child.
    pub(crate) fn merge_children(&mut self, node_id: NodeId, index: usize) {
        let left_id = self.arena[node_id].children[index];
        let right_id = self.arena[node_id].children.remove(index + 1);
        let separator = self.arena[node_id].keys.remove(index);

        let Some(mut right) = self.arena.deallocate(right_id) else {
            return;
        };
        let left = &mut self.arena[left_id];
        left.keys.push(separator);
        left.keys.append(&mut right.keys);
        left.children.append(&mut right.children);
    }

    /// Bring the under-full child at `children[index]` up to at least `t`
    /// keys before descent.
    ///
    /// Prefers borrowing: rotate a key through the parent from the left
    /// sibling if it can donate, else from the right sibling. When neither
    /// sibling can spare a key, merges the child with one of them.
    fn rebalance_child(&mut self, node_id: NodeId, index: usize) {
        let t = self.min_degree;
        let separator_count = self.arena[node_id].key_count();
        let child_id = self.arena[node_id].children[index];

        if index > 0 {
            let left_id = self.arena[node_id].children[index - 1];
            if self.arena[left_id].can_donate(t) {
                // Rotate right: parent separator moves down to the front of
                // the child, the left sibling's last key moves up.
                let left = &mut self.arena[left_id];
                let donated_key = left.keys.pop();
                let donated_child = left.children.pop();
                if let Some(up_key) = donated_key {
                    let down_key =
                        std::mem::replace(&mut self.arena[node_id].keys[index - 1], up_key);
                    let child = &mut self.arena[child_id];
                    child.keys.insert(0, down_key);
                    if let Some(child_ptr) = donated_child {
                        child.children.insert(0, child_ptr);
                    }
                }
                return;
            }
        }

        if index < separator_count {
            let right_id = self.arena[node_id].children[index + 1];
            if self.arena[right_id].can_donate(t) {
                // Rotate left: parent separator moves down to the back of
                // the child, the right sibling's first key moves up.
                let right = &mut self.arena[right_id];
                let up_key = right.keys.remove(0);
                let donated_child = if right.children.is_empty() {
                    None
                } else {
                    Some(right.children.remove(0))
                };
                let down_key = std::mem::replace(&mut self.arena[node_id].keys[index], up_key);
                let child = &mut self.arena[child_id];
                child.keys.push(down_key);
                if let Some(child_ptr) = donated_child {
                    child.children.push(child_ptr);
                }
                return;
            }
        }

        // Neither sibling can donate: merge with the left sibling when the
        // child is rightmost, otherwise with the right sibling.
        if index == separator_count {
            self.merge_children(node_id, index - 1);
        } else {
            self.merge_children(node_id, index);
        }
    }

    /// Shrink the tree when a removal empties the root: an internal root
    /// collapses into its sole child, a leaf root is dropped entirely.
    fn collapse_root_if_empty(&mut self) {
        if let Some(root_id) = self.root {
            if self.arena[root_id].keys.is_empty() {
                let replacement = self.arena[root_id].children.first().copied();
                let _ = self.arena.deallocate(root_id);
                self.root = replacement;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BTree;

    fn seeded() -> BTree<i32> {
        BTree::from_seed(2, [1, 3, 5, 4, 7, 8, 9, 2, 6, 10, 12]).unwrap()
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tree = BTree::from_seed(2, [1, 3, 5, 4]).unwrap();
        let before = tree.to_string();
        tree.remove(&100);
        assert_eq!(tree.to_string(), before);
    }

    #[test]
    fn test_remove_from_empty_tree_is_noop() {
        let mut tree = BTree::<i32>::new(2).unwrap();
        tree.remove(&5);
        assert_eq!(tree.to_string(), "BTree()");
    }

    #[test]
    fn test_remove_leaf_key_with_predecessor_lift() {
        let mut tree = seeded();
        tree.remove(&3);
        assert_eq!(
            tree.to_string(),
            "BTree([keys={2,5,8},children={[keys={1},children={}],[keys={4},children={}],\
             [keys={6,7},children={}],[keys={9,10,12},children={}]}])"
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_root_key() {
        let mut tree = seeded();
        tree.remove(&5);
        assert_eq!(
            tree.to_string(),
            "BTree([keys={3,6,8},children={[keys={1,2},children={}],[keys={4},children={}],\
             [keys={7},children={}],[keys={9,10,12},children={}]}])"
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_merges_and_collapses_root() {
        let mut tree = seeded();
        tree.remove(&3);
        tree.remove(&2);
        assert_eq!(
            tree.to_string(),
            "BTree([keys={5,8},children={[keys={1,4},children={}],[keys={6,7},children={}],\
             [keys={9,10,12},children={}]}])"
        );
        assert!(tree.check_invariants());
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_remove_rightmost_leaf_key() {
        let mut tree = BTree::from_seed(2, [4, 5, 6, 2]).unwrap();
        tree.remove(&6);
        assert_eq!(
            tree.to_string(),
            "BTree([keys={4},children={[keys={2},children={}],[keys={5},children={}]}])"
        );
    }

    #[test]
    fn test_remove_leftmost_leaf_key() {
        let mut tree = BTree::from_seed(2, [1, 5, 4, 6]).unwrap();
        tree.remove(&1);
        assert_eq!(
            tree.to_string(),
            "BTree([keys={5},children={[keys={4},children={}],[keys={6},children={}]}])"
        );
    }

    #[test]
    fn test_remove_last_key_empties_tree() {
        let mut tree = BTree::new(2).unwrap();
        tree.insert(7).unwrap();
        tree.remove(&7);
        assert!(tree.is_empty());
        assert_eq!(tree.to_string(), "BTree()");
        assert!(tree.min().is_err());
    }

    #[test]
    fn test_drain_entire_tree_in_order() {
        let mut tree = BTree::from_seed(3, 1..=60).unwrap();
        for e in 1..=60 {
            tree.remove(&e);
            assert!(tree.check_invariants(), "invariants broken after {}", e);
            assert!(!tree.contains(&e));
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_drain_entire_tree_in_reverse() {
        let mut tree = BTree::from_seed(2, 1..=60).unwrap();
        for e in (1..=60).rev() {
            tree.remove(&e);
            assert!(tree.check_invariants(), "invariants broken after {}", e);
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_arena_releases_merged_nodes() {
        let mut tree = BTree::from_seed(2, 1..=40).unwrap();
        for e in 1..=40 {
            tree.remove(&e);
        }
        // Every node deallocated along the way went back to the free list.
        assert_eq!(tree.arena.allocated_count(), 0);
    }
}
