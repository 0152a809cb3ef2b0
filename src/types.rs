//! Core types and data structures for the B-tree.
//!
//! This module contains the tree handle, the node representation, and the
//! search result type used throughout the implementation.

use crate::arena::{Arena, NodeId};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest legal minimum degree for any B-tree.
pub(crate) const MIN_DEGREE: usize = 2;

/// Minimum degree used by [`BTree::with_default_degree`] and `Default`.
pub const DEFAULT_MIN_DEGREE: usize = 2;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// B-tree keyed by ordered elements, balanced by minimum degree `t`.
///
/// Every non-root node holds between `t - 1` and `2t - 1` keys; the root may
/// hold as few as zero. An internal node with `k` keys has exactly `k + 1`
/// children, and all leaves sit at the same depth, so the worst-case depth is
/// logarithmic in the element count.
///
/// Nodes live in an index-addressed [`Arena`]; the tree owns the arena and a
/// root ID, which is `None` for an empty tree.
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// tree.insert(3).unwrap();
/// tree.insert(1).unwrap();
/// tree.insert(2).unwrap();
///
/// assert_eq!(tree.min().unwrap(), &1);
/// assert_eq!(tree.max().unwrap(), &3);
/// assert!(tree.contains(&2));
/// ```
///
/// # Performance characteristics
///
/// - **Search**: O(log n)
/// - **Insertion**: O(log n), splitting proactively on the way down
/// - **Deletion**: O(log n), borrowing/merging proactively on the way down
#[derive(Debug)]
pub struct BTree<T> {
    /// Minimum degree `t`: bounds node fan-out.
    pub(crate) min_degree: usize,
    /// Root node, absent for an empty tree.
    pub(crate) root: Option<NodeId>,
    /// Arena storage for all nodes of this tree.
    pub(crate) arena: Arena<Node<T>>,
}

/// A single B-tree node.
///
/// Keys are kept strictly ascending. A leaf has no children; an internal node
/// always has exactly one child more than it has keys, so leaf-ness is
/// derived from `children` rather than stored as a separate flag.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Sorted list of keys.
    pub(crate) keys: Vec<T>,
    /// Child node IDs, empty for a leaf.
    pub(crate) children: Vec<NodeId>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }
}

// ============================================================================
// SEARCH RESULT
// ============================================================================

/// Location of a key found by [`BTree::search`].
///
/// Holds the ID of the node containing the match, the depth at which it was
/// found (root = 0), and the index of the key within that node. Absence of a
/// match is `None` from `search` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Node containing the matched key.
    pub node: NodeId,
    /// Depth of the node, counted from the root at 0.
    pub depth: usize,
    /// Index of the key within the node's key sequence.
    pub index: usize,
}
