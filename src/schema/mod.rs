//! Field schemas and record validation.
//!
//! # Key Types
//!
//! - [`FieldSchema`] - One named field: declared type plus constraints
//! - [`FieldType`] - Closed set of field kinds, with a lax `Unknown` fallback
//! - [`SchemaValidator`] - Validates record data against an ordered field list
//! - [`PresetRecord`] - Static mock records served by category
//!
//! # Examples
//!
//! ```rust
//! use mocknode_core::schema::{FieldSchema, SchemaValidator};
//! use serde_json::json;
//!
//! let fields = vec![FieldSchema::new("bio", "string").with_length(Some(5), None)];
//!
//! let short = json!({"bio": "hi"});
//! assert!(SchemaValidator::validate(&fields, short.as_object().unwrap()).is_err());
//!
//! let long_enough = json!({"bio": "hello!"});
//! assert!(SchemaValidator::validate(&fields, long_enough.as_object().unwrap()).is_ok());
//! ```

pub mod catalog;
pub mod presets;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{FieldTypeInfo, field_type_catalog};
pub use presets::{PresetRecord, PresetValue, preset, preset_categories, presets};
pub use types::{FieldSchema, FieldType};
pub use validation::{CompiledSchema, SchemaValidator};
