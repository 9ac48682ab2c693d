//! Registries over a pluggable document store.
//!
//! Each provider owns a store handle passed in at construction and holds no
//! other state: every read goes to the store, so a collection's field list is
//! always the one currently persisted.
//!
//! # Available Providers
//!
//! * [`UserDirectory`] - Users and their upgrade flag
//! * [`ProjectRegistry`] - Projects scoped to their owner, with a creation quota
//! * [`CollectionRegistry`] - Field schemas scoped to a project, with a creation quota
//! * [`RecordStore`] - Schema-validated records scoped to a collection
//!
//! # Example Usage
//!
//! ```rust
//! use mocknode_core::config::CoreConfig;
//! use mocknode_core::providers::{CollectionRegistry, ProjectRegistry, RecordStore, UserDirectory};
//! use mocknode_core::schema::FieldSchema;
//! use mocknode_core::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! let config = CoreConfig::default();
//!
//! let users = UserDirectory::new(storage.clone());
//! let projects = ProjectRegistry::new(storage.clone(), config.clone());
//! let collections = CollectionRegistry::new(storage.clone(), config);
//! let records = RecordStore::new(storage);
//!
//! let owner = users.create("Ada Lovelace", "ada@example.com").await?;
//! let project = projects.create(&owner.id.to_string(), "Demo", "").await?;
//! let todos = collections
//!     .create(
//!         &project.id.to_string(),
//!         "todos",
//!         vec![FieldSchema::new("task", "string").required()],
//!     )
//!     .await?;
//!
//! let data = json!({"task": "write docs"});
//! let record = records
//!     .create(&todos.id.to_string(), data.as_object().cloned().unwrap_or_default())
//!     .await?;
//! assert_eq!(record.get("task"), Some(&json!("write docs")));
//! # Ok(())
//! # }
//! ```

pub mod collections;
pub mod projects;
pub mod records;
pub mod users;

pub use collections::CollectionRegistry;
pub use projects::ProjectRegistry;
pub use records::RecordStore;
pub use users::UserDirectory;

use crate::error::{CoreError, CoreResult};
use crate::model::from_document;
use crate::storage::{DocumentKind, DocumentStore, Filter};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fetch and decode the first document matching `filter`.
async fn find_entity<S, T>(storage: &S, kind: DocumentKind, filter: Filter) -> CoreResult<Option<T>>
where
    S: DocumentStore,
    T: DeserializeOwned,
{
    storage
        .find_one(kind, filter)
        .await
        .map_err(CoreError::store)?
        .map(from_document)
        .transpose()
}

/// Fetch and decode every document matching `filter`.
async fn find_entities<S, T>(storage: &S, kind: DocumentKind, filter: Filter) -> CoreResult<Vec<T>>
where
    S: DocumentStore,
    T: DeserializeOwned,
{
    storage
        .find_many(kind, filter)
        .await
        .map_err(CoreError::store)?
        .into_iter()
        .map(from_document)
        .collect()
}

/// Timestamp as stored in documents.
fn timestamp(at: DateTime<Utc>) -> CoreResult<Value> {
    Ok(serde_json::to_value(at)?)
}
