//! Field lists used across the integration tests.

use mocknode_core::FieldSchema;

/// An issue tracker collection covering every validated field kind.
pub fn issue_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::new("title", "string")
            .required()
            .with_length(Some(3), Some(120)),
        FieldSchema::new("status", "enum")
            .required()
            .with_enum_values(["open", "closed"]),
        FieldSchema::new("reporter", "email"),
        FieldSchema::new("link", "url"),
        FieldSchema::new("priority", "number").with_range(Some(1.0), Some(5.0)),
        FieldSchema::new("done", "boolean"),
        FieldSchema::new("labels", "array"),
        FieldSchema::new("meta", "object"),
    ]
}

/// Required `status` enum field allowing `open` and `closed`.
pub fn status_field() -> FieldSchema {
    FieldSchema::new("status", "enum")
        .required()
        .with_enum_values(["open", "closed"])
}

/// `bio` string field with a minimum length of 5.
pub fn bio_field() -> FieldSchema {
    FieldSchema::new("bio", "string").with_length(Some(5), None)
}

/// A single optional `title` string field.
pub fn title_field() -> FieldSchema {
    FieldSchema::new("title", "string")
}
