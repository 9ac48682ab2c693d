//! Storage-specific error types for document operations.
//!
//! These errors describe failures of the persistence layer itself, separate
//! from validation or ownership errors. The provider layer never inspects
//! them; they surface to callers wrapped in `CoreError::Store`.

use crate::storage::DocumentKind;
use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// A document with the same id already exists for this kind.
    DocumentAlreadyExists { kind: DocumentKind, id: String },

    /// Document cannot be stored as given.
    InvalidData {
        message: String,
        cause: Option<String>,
    },

    /// Storage backend is temporarily unavailable.
    Unavailable { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DocumentAlreadyExists { kind, id } => {
                write!(f, "Document already exists: {}/{}", kind, id)
            }
            StorageError::InvalidData { message, cause } => {
                if let Some(cause) = cause {
                    write!(f, "Invalid data: {} (cause: {})", message, cause)
                } else {
                    write!(f, "Invalid data: {}", message)
                }
            }
            StorageError::Unavailable { message } => {
                write!(f, "Storage unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    /// Create a new DocumentAlreadyExists error.
    pub fn document_already_exists(kind: DocumentKind, id: impl Into<String>) -> Self {
        Self::DocumentAlreadyExists {
            kind,
            id: id.into(),
        }
    }

    /// Create a new InvalidData error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a new InvalidData error with a cause.
    pub fn invalid_data_with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Check if this error indicates a conflicting insert.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::DocumentAlreadyExists { .. })
    }
}
