//! Construction and initialization logic for the B-tree.
//!
//! This module contains degree validation, seeded construction, and the
//! whole-tree bookkeeping operations (`clear`, `len`, `height`).

use crate::arena::Arena;
use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, DEFAULT_MIN_DEGREE, MIN_DEGREE};

impl<T: Ord + Clone> BTree<T> {
    /// Create an empty B-tree with the given minimum degree.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::InvalidDegree`] if `min_degree < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i32>::new(2).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i32>::new(1).is_err());
    /// ```
    pub fn new(min_degree: usize) -> InitResult<Self> {
        if min_degree < MIN_DEGREE {
            return Err(BTreeError::invalid_degree(min_degree, MIN_DEGREE));
        }

        Ok(Self {
            min_degree,
            root: None,
            arena: Arena::new(),
        })
    }

    /// Create an empty B-tree with the default minimum degree.
    pub fn with_default_degree() -> Self {
        Self {
            min_degree: DEFAULT_MIN_DEGREE,
            root: None,
            arena: Arena::new(),
        }
    }

    /// Create a B-tree seeded from an element stream.
    ///
    /// Equivalent to constructing an empty tree and inserting each element in
    /// stream order; the first failure (invalid degree, duplicate element in
    /// the stream) is returned and not swallowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::{BTree, BTreeError};
    ///
    /// let tree = BTree::from_seed(2, [1, 3, 5, 4]).unwrap();
    /// assert_eq!(tree.len(), 4);
    ///
    /// let dup = BTree::from_seed(2, [1, 2, 1]);
    /// assert_eq!(dup.unwrap_err(), BTreeError::DuplicateKey);
    /// ```
    pub fn from_seed<I>(min_degree: usize, seed_stream: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new(min_degree)?;
        for element in seed_stream {
            tree.insert(element)?;
        }
        Ok(tree)
    }

    /// The minimum degree `t` this tree was constructed with.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        match self.root {
            Some(root) => self.len_recursive(root),
            None => 0,
        }
    }

    fn len_recursive(&self, node_id: crate::arena::NodeId) -> usize {
        let node = &self.arena[node_id];
        node.key_count()
            + node
                .children
                .iter()
                .map(|&child| self.len_recursive(child))
                .sum::<usize>()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels in the tree; an empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(id) = current {
            height += 1;
            current = self.arena[id].children.first().copied();
        }
        height
    }

    /// Discard every key and node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }
}

impl<T: Ord + Clone> Default for BTree<T> {
    fn default() -> Self {
        Self::with_default_degree()
    }
}
