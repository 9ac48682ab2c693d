//! Persisted entities.
//!
//! Ownership runs user → project → collection → record, each child holding
//! its parent's id. Every entity is stored as one camelCase JSON document.

use super::ids::{CollectionId, ProjectId, RecordId, UserId};
use super::version::RecordVersion;
use crate::schema::FieldSchema;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form record payload: field name to arbitrary JSON value.
pub type RecordData = Map<String, Value>;

/// A user account, as far as quotas are concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    /// Upgraded owners are exempt from creation quotas
    #[serde(default)]
    pub is_upgraded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named, ordered field schema scoped to one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,
    pub project_id: ProjectId,
    pub name: String,
    /// Validation and display order
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One JSON document stored in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub collection_id: CollectionId,
    /// Stored verbatim, including keys no field declares
    #[serde(default)]
    pub data: RecordData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Content version of the record's data.
    pub fn version(&self) -> RecordVersion {
        RecordVersion::from_data(&self.data)
    }

    /// Value stored under `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }
}
