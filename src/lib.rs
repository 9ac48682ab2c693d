//! Dynamic schema validation and storage for mock API backends.
//!
//! Users own projects, projects own collections, and collections own records.
//! A collection declares an ordered list of typed, constrained fields; every
//! record written to it is validated against that list as currently stored.
//! Creation of projects and collections is capped per owner unless the owner
//! has upgraded.
//!
//! # Core Components
//!
//! - [`SchemaValidator`] - Validates record data against a field list
//! - [`CollectionRegistry`] / [`RecordStore`] - Collection and record operations
//! - [`DocumentStore`] - Trait for implementing storage backends
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mocknode_core::{CollectionRegistry, CoreConfig, FieldSchema};
//! use mocknode_core::storage::InMemoryStorage;
//!
//! # async fn example(project_id: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! let collections = CollectionRegistry::new(storage, CoreConfig::from_env());
//!
//! let fields = vec![
//!     FieldSchema::new("title", "string").required(),
//!     FieldSchema::new("status", "enum").with_enum_values(["open", "closed"]),
//! ];
//! let issues = collections.create(project_id, "issues", fields).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod providers;
pub mod quota;
pub mod schema;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use model::{Collection, Project, Record, RecordData, RecordVersion, User};
pub use providers::{CollectionRegistry, ProjectRegistry, RecordStore, UserDirectory};
pub use quota::QuotaPolicy;
pub use schema::{FieldSchema, FieldType, SchemaValidator};
pub use storage::{DocumentKind, DocumentStore, Filter, InMemoryStorage};
