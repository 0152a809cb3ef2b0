//! In-memory B-tree with a canonical serializer and an ordered-map adapter.
//!
//! The tree keeps every node between `t - 1` and `2t - 1` keys (root exempt
//! from the lower bound) by splitting proactively on insertion and
//! borrowing/merging proactively on deletion, so depth stays logarithmic in
//! the element count. Nodes live in an index-addressed arena; the structure
//! is exclusively owned end to end.
//!
//! # Examples
//!
//! ```
//! use btree::BTree;
//!
//! let mut tree = BTree::from_seed(2, [1, 3, 5, 4]).unwrap();
//! tree.insert(2).unwrap();
//! tree.remove(&3);
//!
//! let keys: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(keys, [1, 2, 4, 5]);
//! ```
//!
//! The [`Map`] adapter layers `(key, value)` entries ordered by key over the
//! same engine, and [`SharedBTree`] adds a whole-tree readers-writer lock for
//! callers that share one tree across threads.

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod map;
mod node;
mod serialization;
mod sync;
mod types;
mod validation;

pub use arena::{Arena, ArenaStats, NodeId, NULL_NODE};
pub use error::{BTreeError, BTreeResult, InitResult, KeyResult};
pub use iteration::Iter;
pub use map::{Map, MapEntry};
pub use sync::SharedBTree;
pub use types::{BTree, Node, SearchResult, DEFAULT_MIN_DEGREE};
