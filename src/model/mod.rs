//! Data model for users, projects, collections and records.
//!
//! # Key Types
//!
//! - [`Collection`] - Named field schema owned by a project
//! - [`Record`] - JSON document owned by a collection
//! - [`RecordVersion`] - Content hash of a record's data, usable as an ETag
//! - [`ProjectId`], [`CollectionId`], [`RecordId`], [`UserId`] - Typed identifiers

pub mod entities;
pub mod ids;
pub mod version;

pub use entities::{Collection, Project, Record, RecordData, User};
pub use ids::{CollectionId, ProjectId, RecordId, UserId};
pub use version::RecordVersion;

use crate::error::CoreResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Convert an entity to its stored document.
pub(crate) fn to_document<T: Serialize>(entity: &T) -> CoreResult<Value> {
    Ok(serde_json::to_value(entity)?)
}

/// Convert a stored document back to its entity.
pub(crate) fn from_document<T: DeserializeOwned>(document: Value) -> CoreResult<T> {
    Ok(serde_json::from_value(document)?)
}
