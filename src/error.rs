//! Error handling and result types for B-tree operations.
//!
//! Every failing operation reports one of the variants below synchronously;
//! preconditions are checked before any structural write, so a returned error
//! never leaves a partial mutation behind.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// Construction with a minimum degree below 2.
    InvalidDegree(String),
    /// Insert of a key that is already present.
    DuplicateKey,
    /// `min`/`max` on a tree with no root.
    EmptyTree,
    /// Map adapter lookup of an absent key.
    KeyNotFound,
}

impl BTreeError {
    /// Create an `InvalidDegree` error with context.
    pub fn invalid_degree(degree: usize, min_required: usize) -> Self {
        Self::InvalidDegree(format!(
            "minimum degree {} is invalid (must be >= {})",
            degree, min_required
        ))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::InvalidDegree(msg) => write!(f, "Invalid degree: {}", msg),
            BTreeError::DuplicateKey => write!(f, "Key already exists in tree"),
            BTreeError::EmptyTree => write!(f, "Tree is empty"),
            BTreeError::KeyNotFound => write!(f, "Key not found"),
        }
    }
}

impl std::error::Error for BTreeError {}

/// General result type for tree operations that may fail.
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction and seeding.
pub type InitResult<T> = Result<T, BTreeError>;

/// Result type for key lookup operations.
pub type KeyResult<T> = Result<T, BTreeError>;
