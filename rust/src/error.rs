//! Error handling and result types for index operations.
//!
//! Lookups that simply miss are not errors: they return `Option` or `bool`.
//! `IndexError` covers the checked `try_*` accessors, configuration validation
//! and invariant checks.

use thiserror::Error;

use crate::types::Rid;

/// Error type for index engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// No live record carries this id.
    #[error("Key not found in index: {0}")]
    KeyNotFound(i32),
    /// A row id points past the end of the heap.
    #[error("Row id {rid} out of bounds (heap has {len} slots)")]
    RidOutOfBounds { rid: Rid, len: usize },
    /// Engine configuration rejected at construction.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// An index no longer agrees with the heap or with BST ordering.
    #[error("Corrupted index: {0}")]
    CorruptedIndex(String),
}

impl IndexError {
    /// Create an InvalidConfig error with context
    pub fn invalid_config(setting: &str, details: &str) -> Self {
        Self::InvalidConfig(format!("{}: {}", setting, details))
    }

    /// Create a CorruptedIndex error with context
    pub fn corrupted(component: &str, details: &str) -> Self {
        Self::CorruptedIndex(format!("{} corruption: {}", component, details))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound(_))
    }

    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptedIndex(_))
    }
}

/// Result type for index operations that may fail
pub type IndexResult<T> = Result<T, IndexError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, IndexError>;

/// Result type for engine construction and validation
pub type InitResult<T> = Result<T, IndexError>;

/// Result extension trait for attaching context to index errors
pub trait IndexResultExt<T> {
    /// Prefix the error message with `context`.
    fn with_context(self, context: &str) -> IndexResult<T>;
}

impl<T> IndexResultExt<T> for IndexResult<T> {
    fn with_context(self, context: &str) -> IndexResult<T> {
        self.map_err(|e| match e {
            IndexError::KeyNotFound(id) => IndexError::KeyNotFound(id),
            IndexError::RidOutOfBounds { rid, len } => IndexError::RidOutOfBounds { rid, len },
            IndexError::InvalidConfig(msg) => IndexError::invalid_config(context, &msg),
            IndexError::CorruptedIndex(msg) => IndexError::corrupted(context, &msg),
        })
    }
}
