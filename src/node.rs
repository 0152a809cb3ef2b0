//! Node-level helpers.
//!
//! These are the occupancy checks the tree operations consult before
//! splitting, borrowing, or merging. The degree parameter is owned by the
//! tree, so the bounds take `t` explicitly.

use crate::types::Node;

impl<T> Node<T> {
    /// Create a node with the given keys and children.
    pub(crate) fn new(keys: Vec<T>, children: Vec<crate::arena::NodeId>) -> Self {
        Self { keys, children }
    }

    /// Returns the number of keys stored in this node.
    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node is a leaf.
    ///
    /// An internal node always carries `keys.len() + 1` children, so an empty
    /// child list identifies a leaf.
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if this node holds the maximum `2t - 1` keys.
    pub(crate) fn is_full(&self, min_degree: usize) -> bool {
        self.keys.len() == 2 * min_degree - 1
    }

    /// Returns true if this node can give up a key without dropping below
    /// the `t - 1` lower bound.
    pub(crate) fn can_donate(&self, min_degree: usize) -> bool {
        self.keys.len() >= min_degree
    }
}
