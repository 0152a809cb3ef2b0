//! Canonical textual form of a B-tree.
//!
//! The `Display` impl renders the exact structure of the tree, not just its
//! contents: an empty tree is `BTree()`, a node is
//! `[keys={k0,k1},children={..}]` with children rendered recursively in
//! order and a leaf's children set rendered empty. Two trees serialize to
//! the same string exactly when their node structures match, which makes
//! this form the structural oracle used throughout the tests.

use std::fmt;

use crate::arena::NodeId;
use crate::types::BTree;

impl<T: Ord + Clone + fmt::Display> fmt::Display for BTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BTree(")?;
        if let Some(root) = self.root {
            self.fmt_node(f, root)?;
        }
        write!(f, ")")
    }
}

impl<T: Ord + Clone + fmt::Display> BTree<T> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, node_id: NodeId) -> fmt::Result {
        let node = &self.arena[node_id];

        write!(f, "[keys={{")?;
        for (i, key) in node.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", key)?;
        }

        write!(f, "}},children={{")?;
        for (i, &child) in node.children.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            self.fmt_node(f, child)?;
        }
        write!(f, "}}]")
    }
}
