//! Storage abstraction for users, projects, collections and records.
//!
//! The [`DocumentStore`] trait is the contract the registries consume: plain
//! insert / find / update / delete operations over JSON documents, each scoped
//! to one [`DocumentKind`]. Stores know nothing about field schemas, quotas or
//! ownership rules; that logic lives in the provider layer.
//!
//! # Example Usage
//!
//! ```rust
//! use mocknode_core::storage::{DocumentKind, DocumentStore, Filter, InMemoryStorage};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let id = storage
//!     .insert(DocumentKind::Projects, json!({"id": "p1", "userId": "u1", "name": "Demo"}))
//!     .await?;
//! assert_eq!(id, "p1");
//!
//! let owned = storage
//!     .find_many(DocumentKind::Projects, Filter::new().and("userId", "u1"))
//!     .await?;
//! assert_eq!(owned.len(), 1);
//!
//! let deleted = storage.delete_one(DocumentKind::Projects, Filter::by_id("p1")).await?;
//! assert_eq!(deleted, 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;


pub use errors::StorageError;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};

use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;

/// The four logical record kinds held by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    Users,
    Projects,
    Collections,
    Records,
}

impl DocumentKind {
    /// Name of the kind as used by the backing store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Projects => "projects",
            Self::Collections => "collections",
            Self::Records => "records",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conjunction of equality conditions on document attributes.
///
/// Attribute paths use dot notation (`"data.title"`, `"tags.0"`). An empty
/// filter matches every document of a kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching the document whose `id` equals `id`.
    pub fn by_id(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self::new().and("id", id)
    }

    /// Add an equality condition.
    pub fn and(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((attribute.into(), value.into()));
        self
    }

    /// The conditions in declaration order.
    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    /// Whether `document` satisfies every condition.
    pub fn matches(&self, document: &Value) -> bool {
        self.conditions
            .iter()
            .all(|(path, expected)| extract_attribute(document, path) == Some(expected))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("{}");
        }
        let parts: Vec<String> = self
            .conditions
            .iter()
            .map(|(path, value)| format!("{}={}", path, value))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Resolve a dot-notation attribute path inside a document.
fn extract_attribute<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(document, |current, part| match current {
        Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => current.get(part),
    })
}

/// Core trait for document stores.
///
/// Implementations persist JSON documents and answer equality-filtered
/// queries. Every document carries a string `id` attribute assigned by the
/// caller before insertion.
///
/// # Behavior
///
/// - `insert` rejects a document without a string `id` or with an `id`
///   already present for that kind
/// - `update_one` sets the given top-level fields on the first match and
///   leaves other fields untouched
/// - `update_one` and `delete_one` report how many documents they touched
///   (0 or 1) rather than failing on no match
/// - Result order of `find_many` is store-defined
pub trait DocumentStore: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert a new document and return its `id`.
    fn insert(
        &self,
        kind: DocumentKind,
        document: Value,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// First document matching `filter`, if any.
    fn find_one(
        &self,
        kind: DocumentKind,
        filter: Filter,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Every document matching `filter`.
    fn find_many(
        &self,
        kind: DocumentKind,
        filter: Filter,
    ) -> impl Future<Output = Result<Vec<Value>, Self::Error>> + Send;

    /// Set `fields` on the first document matching `filter`.
    ///
    /// Returns the number of matched documents.
    fn update_one(
        &self,
        kind: DocumentKind,
        filter: Filter,
        fields: Map<String, Value>,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Delete the first document matching `filter`.
    ///
    /// Returns the number of deleted documents.
    fn delete_one(
        &self,
        kind: DocumentKind,
        filter: Filter,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Count documents matching `filter`.
    fn count(
        &self,
        kind: DocumentKind,
        filter: Filter,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}
