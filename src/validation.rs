//! Validation and debugging utilities for the B-tree.
//!
//! `check_invariants` verifies every structural guarantee the tree is
//! supposed to maintain: key-count bounds, fan-out, strict key ordering with
//! separator bounds, uniform leaf depth, and tree/arena node-count agreement.
//! Tests lean on `check_invariants_detailed` for a readable failure message.

use crate::arena::NodeId;
use crate::types::BTree;

impl<T: Ord + Clone> BTree<T> {
    /// Check if the tree maintains all B-tree invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        let root = match self.root {
            Some(root) => root,
            None => {
                if self.arena.is_empty() {
                    return Ok(());
                }
                return Err(format!(
                    "empty tree still holds {} arena nodes",
                    self.arena.allocated_count()
                ));
            }
        };

        let mut leaf_depth = None;
        self.check_node(root, None, None, 0, true, &mut leaf_depth)?;

        // Every allocated arena slot must be reachable from the root.
        let tree_nodes = self.count_nodes(root);
        let arena_nodes = self.arena.allocated_count();
        if tree_nodes != arena_nodes {
            return Err(format!(
                "node count mismatch: {} in tree vs {} in arena",
                tree_nodes, arena_nodes
            ));
        }

        Ok(())
    }

    /// Recursively check one node and its subtree.
    ///
    /// `min_key`/`max_key` are the open bounds inherited from parent
    /// separators; `leaf_depth` records the depth of the first leaf seen so
    /// every other leaf can be compared against it.
    fn check_node(
        &self,
        node_id: NodeId,
        min_key: Option<&T>,
        max_key: Option<&T>,
        depth: usize,
        is_root: bool,
        leaf_depth: &mut Option<usize>,
    ) -> Result<(), String> {
        let node = self
            .arena
            .get(node_id)
            .ok_or_else(|| format!("node {} is not allocated in the arena", node_id))?;
        let t = self.min_degree;
        let n = node.key_count();

        if n > 2 * t - 1 {
            return Err(format!("node {} holds {} keys, above 2t-1", node_id, n));
        }
        if !is_root && n < t - 1 {
            return Err(format!(
                "non-root node {} holds {} keys, below t-1",
                node_id, n
            ));
        }
        if is_root && !node.is_leaf() && n == 0 {
            return Err(format!("internal root {} holds no keys", node_id));
        }

        for i in 1..n {
            if node.keys[i - 1] >= node.keys[i] {
                return Err(format!("node {} keys not strictly ascending", node_id));
            }
        }
        if let (Some(min), Some(first)) = (min_key, node.keys.first()) {
            if first <= min {
                return Err(format!("node {} violates lower separator bound", node_id));
            }
        }
        if let (Some(max), Some(last)) = (max_key, node.keys.last()) {
            if last >= max {
                return Err(format!("node {} violates upper separator bound", node_id));
            }
        }

        if node.is_leaf() {
            match *leaf_depth {
                Some(expected) if expected != depth => {
                    return Err(format!(
                        "leaf {} at depth {} but earlier leaf at depth {}",
                        node_id, depth, expected
                    ));
                }
                None => *leaf_depth = Some(depth),
                _ => {}
            }
            return Ok(());
        }

        if node.children.len() != n + 1 {
            return Err(format!(
                "internal node {} has {} keys but {} children",
                node_id,
                n,
                node.children.len()
            ));
        }

        for (i, &child) in node.children.iter().enumerate() {
            let child_min = if i == 0 { min_key } else { Some(&node.keys[i - 1]) };
            let child_max = if i == n { max_key } else { Some(&node.keys[i]) };
            self.check_node(child, child_min, child_max, depth + 1, false, leaf_depth)?;
        }

        Ok(())
    }

    /// Count nodes reachable from `node_id`.
    fn count_nodes(&self, node_id: NodeId) -> usize {
        1 + self.arena[node_id]
            .children
            .iter()
            .map(|&child| self.count_nodes(child))
            .sum::<usize>()
    }

    /// Returns the depth of every leaf (for testing/debugging).
    pub fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaf_depths(root, 0, &mut depths);
        }
        depths
    }

    fn collect_leaf_depths(&self, node_id: NodeId, depth: usize, depths: &mut Vec<usize>) {
        let node = &self.arena[node_id];
        if node.is_leaf() {
            depths.push(depth);
            return;
        }
        for &child in &node.children {
            self.collect_leaf_depths(child, depth + 1, depths);
        }
    }

    /// Prints the tree structure for debugging.
    pub fn print_structure(&self) {
        match self.root {
            Some(root) => self.print_node(root, 0),
            None => println!("<empty>"),
        }
    }

    fn print_node(&self, node_id: NodeId, depth: usize) {
        let node = &self.arena[node_id];
        let indent = "  ".repeat(depth);
        println!(
            "{}node[id={}]: {} keys, {} children",
            indent,
            node_id,
            node.key_count(),
            node.children.len()
        );
        for &child in &node.children {
            self.print_node(child, depth + 1);
        }
    }
}
