//! Error types for the avl-index crate

use thiserror::Error;

/// Result type alias using `IndexError`
pub type Result<T> = std::result::Result<T, IndexError>;

/// Rejected operations on an [`AvlIndex`](crate::AvlIndex).
///
/// Neither condition alters the index.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// Key is already present
    #[error("duplicate key: {0}")]
    DuplicateKey(i32),

    /// Key is not present
    #[error("key not found: {0}")]
    KeyNotFound(i32),
}

/// Outcome of [`AvlIndex::insert`](crate::AvlIndex::insert).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum InsertOutcome {
    Inserted,
    DuplicateRejected,
}

impl InsertOutcome {
    /// Converts the outcome of inserting `key` into a `Result`.
    pub fn into_result(self, key: i32) -> Result<()> {
        match self {
            InsertOutcome::Inserted => Ok(()),
            InsertOutcome::DuplicateRejected => Err(IndexError::DuplicateKey(key)),
        }
    }
}

/// Outcome of [`AvlIndex::delete`](crate::AvlIndex::delete).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    /// Converts the outcome of deleting `key` into a `Result`.
    pub fn into_result(self, key: i32) -> Result<()> {
        match self {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::NotFound => Err(IndexError::KeyNotFound(key)),
        }
    }
}
