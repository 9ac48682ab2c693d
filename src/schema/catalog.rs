//! Static catalog of supported field types.
//!
//! Clients use this list to render collection editors. The validator does
//! not consult it; it dispatches on [`FieldType`](super::FieldType) directly.

use serde::Serialize;

/// Descriptive entry for one field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTypeInfo {
    /// Type name as used in `FieldSchema::field_type`
    #[serde(rename = "type")]
    pub field_type: &'static str,
    /// Short human label
    pub label: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Constraint names a client may offer for this type
    pub options: &'static [&'static str],
}

const CATALOG: &[FieldTypeInfo] = &[
    FieldTypeInfo {
        field_type: "string",
        label: "Text",
        description: "A sequence of characters",
        options: &["minLength", "maxLength", "pattern"],
    },
    FieldTypeInfo {
        field_type: "number",
        label: "Number",
        description: "Any numeric value",
        options: &["minValue", "maxValue"],
    },
    FieldTypeInfo {
        field_type: "boolean",
        label: "Boolean",
        description: "True or False value",
        options: &["default"],
    },
    FieldTypeInfo {
        field_type: "email",
        label: "Email",
        description: "Email format validation",
        options: &[],
    },
    FieldTypeInfo {
        field_type: "url",
        label: "URL",
        description: "Absolute URL or path",
        options: &[],
    },
    FieldTypeInfo {
        field_type: "enum",
        label: "Enum",
        description: "Select from predefined list of values",
        options: &["enumValues", "default"],
    },
    FieldTypeInfo {
        field_type: "array",
        label: "Array",
        description: "A list of items (e.g., strings, numbers)",
        options: &[],
    },
    FieldTypeInfo {
        field_type: "object",
        label: "Object",
        description: "A nested JSON object",
        options: &[],
    },
];

/// All field types clients may offer, in display order.
pub fn field_type_catalog() -> &'static [FieldTypeInfo] {
    CATALOG
}
