//! Common test utilities for registry and record store tests.
//!
//! Provides a wired-up environment over in-memory storage, fixtures for
//! common field lists, and a store that fails every call.

#![allow(dead_code)]

pub mod fixtures;

use mocknode_core::storage::{DocumentKind, DocumentStore, Filter, InMemoryStorage, StorageError};
use mocknode_core::{
    CollectionRegistry, CoreConfig, ProjectRegistry, RecordData, RecordStore, UserDirectory,
};
use serde_json::{Map, Value};
use std::future::Future;

/// All four registries sharing one in-memory store.
pub struct TestEnv {
    pub storage: InMemoryStorage,
    pub users: UserDirectory<InMemoryStorage>,
    pub projects: ProjectRegistry<InMemoryStorage>,
    pub collections: CollectionRegistry<InMemoryStorage>,
    pub records: RecordStore<InMemoryStorage>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config(CoreConfig::default())
    }

    pub fn with_config(config: CoreConfig) -> Self {
        let storage = InMemoryStorage::new();
        Self {
            users: UserDirectory::new(storage.clone()),
            projects: ProjectRegistry::new(storage.clone(), config.clone()),
            collections: CollectionRegistry::new(storage.clone(), config),
            records: RecordStore::new(storage.clone()),
            storage,
        }
    }

    /// Create a non-upgraded user and return its id.
    pub async fn owner(&self) -> String {
        self.users
            .create("Test Owner", "owner@example.com")
            .await
            .expect("create owner")
            .id
            .to_string()
    }

    /// Create an owner with one project and return `(owner_id, project_id)`.
    pub async fn owner_with_project(&self) -> (String, String) {
        let owner_id = self.owner().await;
        let project = self
            .projects
            .create(&owner_id, "Test Project", "")
            .await
            .expect("create project");
        (owner_id, project.id.to_string())
    }

    /// Create a collection in a fresh project and return its id.
    pub async fn collection(&self, fields: Vec<mocknode_core::FieldSchema>) -> String {
        let (_, project_id) = self.owner_with_project().await;
        self.collections
            .create(&project_id, "items", fields)
            .await
            .expect("create collection")
            .id
            .to_string()
    }
}

/// Record data from a JSON object literal.
pub fn data(value: Value) -> RecordData {
    match value {
        Value::Object(map) => map,
        other => panic!("Record data must be an object, got {}", other),
    }
}

/// A store whose every operation fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStorage;

impl UnavailableStorage {
    fn fail<T: Send>() -> impl Future<Output = Result<T, StorageError>> + Send {
        std::future::ready(Err(StorageError::unavailable("connection refused")))
    }
}

impl DocumentStore for UnavailableStorage {
    type Error = StorageError;

    fn insert(
        &self,
        _kind: DocumentKind,
        _document: Value,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        Self::fail::<String>()
    }

    fn find_one(
        &self,
        _kind: DocumentKind,
        _filter: Filter,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send {
        Self::fail::<Option<Value>>()
    }

    fn find_many(
        &self,
        _kind: DocumentKind,
        _filter: Filter,
    ) -> impl Future<Output = Result<Vec<Value>, Self::Error>> + Send {
        Self::fail::<Vec<Value>>()
    }

    fn update_one(
        &self,
        _kind: DocumentKind,
        _filter: Filter,
        _fields: Map<String, Value>,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        Self::fail::<u64>()
    }

    fn delete_one(
        &self,
        _kind: DocumentKind,
        _filter: Filter,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        Self::fail::<u64>()
    }

    fn count(
        &self,
        _kind: DocumentKind,
        _filter: Filter,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        Self::fail::<u64>()
    }
}
