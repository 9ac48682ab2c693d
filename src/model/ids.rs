//! Typed identifiers for users, projects, collections and records.
//!
//! Identifiers are UUIDs. Parsing an identifier supplied by a caller is the
//! only place `InvalidId` errors originate.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Entity kind named in errors.
            pub const KIND: &'static str = $kind;

            /// Generate a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse a caller-supplied identifier.
            pub fn parse(value: &str) -> CoreResult<Self> {
                Uuid::parse_str(value)
                    .map(Self)
                    .map_err(|_| CoreError::invalid_id(Self::KIND, value))
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(id: $name) -> Self {
                serde_json::Value::String(id.to_string())
            }
        }
    };
}

entity_id!(
    /// Identifier of a user account.
    UserId,
    "User"
);
entity_id!(
    /// Identifier of a project.
    ProjectId,
    "Project"
);
entity_id!(
    /// Identifier of a collection.
    CollectionId,
    "Collection"
);
entity_id!(
    /// Identifier of a record.
    RecordId,
    "Record"
);
