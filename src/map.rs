//! Ordered map adapter over the B-tree.
//!
//! [`Map`] stores `(key, value)` entries in a [`BTree`] ordered by key alone;
//! the value never participates in ordering or equality. The adapter forwards
//! every structural operation to the tree and adds the lookup-by-key surface.

use crate::error::{BTreeError, BTreeResult, InitResult, KeyResult};
use crate::types::BTree;

/// A `(key, value)` pair compared and ordered by key only.
#[derive(Debug, Clone)]
pub struct MapEntry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K: Ord, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, V> Eq for MapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Ordered key→value map backed by a [`BTree`] of [`MapEntry`] elements.
///
/// # Examples
///
/// ```
/// use btree::Map;
///
/// let mut map = Map::new(2).unwrap();
/// map.insert(1, "one").unwrap();
/// map.insert(2, "two").unwrap();
/// assert_eq!(map.at(&1).unwrap(), &"one");
/// assert!(map.at(&9).is_err());
/// ```
#[derive(Debug)]
pub struct Map<K, V> {
    tree: BTree<MapEntry<K, V>>,
}

impl<K, V> Map<K, V>
where
    K: Ord + Clone,
    V: Clone + Default,
{
    /// Create an empty map with the given minimum degree.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::InvalidDegree`] if `min_degree < 2`.
    pub fn new(min_degree: usize) -> InitResult<Self> {
        Ok(Self {
            tree: BTree::new(min_degree)?,
        })
    }

    /// Create a map seeded from `(key, value)` pairs in order.
    ///
    /// The first failure (invalid degree, duplicate key) propagates to the
    /// caller.
    pub fn from_entries<I>(min_degree: usize, entries: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(min_degree)?;
        for (key, value) in entries {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Insert a key-value pair.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::DuplicateKey`] if the key is already present;
    /// the existing value is not replaced.
    pub fn insert(&mut self, key: K, value: V) -> BTreeResult<()> {
        self.tree.insert(MapEntry { key, value })
    }

    /// Look up the value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`BTreeError::KeyNotFound`] if the key is absent.
    pub fn at(&self, key: &K) -> KeyResult<&V> {
        let found = self
            .tree
            .search(&Self::probe(key))
            .ok_or(BTreeError::KeyNotFound)?;
        let entry = self
            .tree
            .key_at(&found)
            .ok_or(BTreeError::KeyNotFound)?;
        Ok(&entry.value)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains(&Self::probe(key))
    }

    /// Look up the value for a key, inserting a default-valued entry first
    /// when the key is absent.
    ///
    /// This is upsert-on-read: a read through this accessor of a missing key
    /// mutates the map. Callers that want a plain lookup should use
    /// [`Map::at`] instead.
    pub fn get_or_insert_default(&mut self, key: K) -> BTreeResult<&V> {
        let probe = MapEntry {
            key,
            value: V::default(),
        };
        if self.tree.search(&probe).is_none() {
            self.tree.insert(probe.clone())?;
        }
        let found = self.tree.search(&probe).ok_or(BTreeError::KeyNotFound)?;
        let entry = self.tree.key_at(&found).ok_or(BTreeError::KeyNotFound)?;
        Ok(&entry.value)
    }

    /// Remove the entry for a key; absent keys are a no-op.
    pub fn erase(&mut self, key: &K) {
        self.tree.remove(&Self::probe(key));
    }

    /// Discard every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Search key with a placeholder value; ordering ignores the value.
    fn probe(key: &K) -> MapEntry<K, V> {
        MapEntry {
            key: key.clone(),
            value: V::default(),
        }
    }
}
