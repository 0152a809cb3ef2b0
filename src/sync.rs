//! Whole-tree locked variant of the B-tree.
//!
//! [`SharedBTree`] wraps a [`BTree`] in a single `std::sync::RwLock` acquired
//! once at the public API boundary, never inside the recursive algorithms:
//! reads take the shared lock, mutations take the exclusive lock for their
//! full duration including the duplicate/presence pre-check. This is coarse
//! mutual exclusion only; there is no per-node locking and a blocked
//! acquisition waits indefinitely.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{BTreeResult, InitResult};
use crate::types::{BTree, SearchResult};

/// A [`BTree`] guarded by a whole-tree readers-writer lock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use btree::SharedBTree;
///
/// let tree = Arc::new(SharedBTree::new(2).unwrap());
/// let writer = Arc::clone(&tree);
/// std::thread::spawn(move || writer.insert(1)).join().unwrap().unwrap();
/// assert!(tree.contains(&1));
/// ```
#[derive(Debug)]
pub struct SharedBTree<T> {
    inner: RwLock<BTree<T>>,
}

impl<T: Ord + Clone> SharedBTree<T> {
    /// Create an empty shared tree with the given minimum degree.
    pub fn new(min_degree: usize) -> InitResult<Self> {
        Ok(Self {
            inner: RwLock::new(BTree::new(min_degree)?),
        })
    }

    /// Create a shared tree seeded from an element stream.
    pub fn from_seed<I>(min_degree: usize, seed_stream: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self {
            inner: RwLock::new(BTree::from_seed(min_degree, seed_stream)?),
        })
    }

    /// Search for an element under the shared lock.
    pub fn search(&self, element: &T) -> Option<SearchResult> {
        self.read().search(element)
    }

    /// Returns true if the element is present.
    pub fn contains(&self, element: &T) -> bool {
        self.read().contains(element)
    }

    /// Find the minimum element, cloned out of the tree.
    pub fn min(&self) -> BTreeResult<T> {
        self.read().min().cloned()
    }

    /// Find the maximum element, cloned out of the tree.
    pub fn max(&self) -> BTreeResult<T> {
        self.read().max().cloned()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Insert an element under the exclusive lock.
    ///
    /// The duplicate pre-check runs under the same lock acquisition as the
    /// mutation, so two racing inserts of the same element cannot both
    /// succeed.
    pub fn insert(&self, element: T) -> BTreeResult<()> {
        self.write().insert(element)
    }

    /// Remove an element under the exclusive lock; absent elements are a
    /// no-op.
    pub fn remove(&self, element: &T) {
        self.write().remove(element);
    }

    /// Discard every key under the exclusive lock.
    pub fn clear(&self) {
        self.write().clear();
    }

    // A poisoned lock only means another thread panicked while holding it;
    // the tree itself stays structurally sound between public operations, so
    // recover the guard instead of propagating the poison.
    fn read(&self) -> RwLockReadGuard<'_, BTree<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTree<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Ord + Clone + std::fmt::Display> std::fmt::Display for SharedBTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self.read())
    }
}
