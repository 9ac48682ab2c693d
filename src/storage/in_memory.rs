//! In-memory document store.
//!
//! Thread-safe implementation of [`DocumentStore`] backed by a `HashMap` per
//! document kind behind a tokio `RwLock`. It is meant for tests, demos and
//! local development; nothing is persisted across restarts.
//!
//! # Example Usage
//!
//! ```rust
//! use mocknode_core::storage::{DocumentKind, DocumentStore, Filter, InMemoryStorage};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! storage
//!     .insert(DocumentKind::Records, json!({"id": "r1", "collectionId": "c1", "data": {}}))
//!     .await?;
//!
//! let count = storage
//!     .count(DocumentKind::Records, Filter::new().and("collectionId", "c1"))
//!     .await?;
//! assert_eq!(count, 1);
//! # Ok(())
//! # }
//! ```

use crate::storage::{DocumentKind, DocumentStore, Filter, StorageError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory document store.
///
/// Structure: `kind` → `id` → `document`. Cloning shares the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<DocumentKind, HashMap<String, Value>>>>,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let data_guard = self.data.read().await;
        let count_of = |kind: DocumentKind| data_guard.get(&kind).map_or(0, HashMap::len);

        InMemoryStorageStats {
            users: count_of(DocumentKind::Users),
            projects: count_of(DocumentKind::Projects),
            collections: count_of(DocumentKind::Collections),
            records: count_of(DocumentKind::Records),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
    }

    /// Matching documents of one kind, ordered by id for stable results.
    fn matching<'a>(
        documents: &'a HashMap<String, Value>,
        filter: &Filter,
    ) -> Vec<(&'a String, &'a Value)> {
        let mut found: Vec<_> = documents
            .iter()
            .filter(|(_, document)| filter.matches(document))
            .collect();
        found.sort_by(|a, b| a.0.cmp(b.0));
        found
    }
}

impl DocumentStore for InMemoryStorage {
    type Error = StorageError;

    async fn insert(&self, kind: DocumentKind, document: Value) -> Result<String, Self::Error> {
        if !document.is_object() {
            return Err(StorageError::invalid_data_with_cause(
                format!("cannot insert into {}", kind),
                "document is not an object",
            ));
        }
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StorageError::invalid_data("document has no string 'id'"))?;

        let mut data_guard = self.data.write().await;
        let documents = data_guard.entry(kind).or_default();
        if documents.contains_key(&id) {
            return Err(StorageError::document_already_exists(kind, id));
        }
        documents.insert(id.clone(), document);

        Ok(id)
    }

    async fn find_one(
        &self,
        kind: DocumentKind,
        filter: Filter,
    ) -> Result<Option<Value>, Self::Error> {
        let data_guard = self.data.read().await;

        let result = data_guard.get(&kind).and_then(|documents| {
            Self::matching(documents, &filter)
                .into_iter()
                .next()
                .map(|(_, document)| document.clone())
        });

        Ok(result)
    }

    async fn find_many(&self, kind: DocumentKind, filter: Filter) -> Result<Vec<Value>, Self::Error> {
        let data_guard = self.data.read().await;

        let results = match data_guard.get(&kind) {
            Some(documents) => Self::matching(documents, &filter)
                .into_iter()
                .map(|(_, document)| document.clone())
                .collect(),
            None => Vec::new(),
        };

        Ok(results)
    }

    async fn update_one(
        &self,
        kind: DocumentKind,
        filter: Filter,
        fields: Map<String, Value>,
    ) -> Result<u64, Self::Error> {
        let mut data_guard = self.data.write().await;

        let Some(documents) = data_guard.get_mut(&kind) else {
            return Ok(0);
        };
        let Some(id) = Self::matching(documents, &filter)
            .into_iter()
            .next()
            .map(|(id, _)| id.clone())
        else {
            return Ok(0);
        };

        if let Some(Value::Object(target)) = documents.get_mut(&id) {
            for (field, value) in fields {
                target.insert(field, value);
            }
        }

        Ok(1)
    }

    async fn delete_one(&self, kind: DocumentKind, filter: Filter) -> Result<u64, Self::Error> {
        let mut data_guard = self.data.write().await;

        let Some(documents) = data_guard.get_mut(&kind) else {
            return Ok(0);
        };
        let target = Self::matching(documents, &filter)
            .into_iter()
            .next()
            .map(|(id, _)| id.clone());

        let deleted = target
            .and_then(|id| documents.remove(&id))
            .map_or(0, |_| 1);

        Ok(deleted)
    }

    async fn count(&self, kind: DocumentKind, filter: Filter) -> Result<u64, Self::Error> {
        let data_guard = self.data.read().await;

        let count = data_guard
            .get(&kind)
            .map_or(0, |documents| Self::matching(documents, &filter).len());

        Ok(count as u64)
    }
}

/// Statistics about the current state of in-memory storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    pub users: usize,
    pub projects: usize,
    pub collections: usize,
    pub records: usize,
}
