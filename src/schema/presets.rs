//! Static preset datasets.
//!
//! Ready-made mock records clients can serve before defining any collection
//! of their own. Lookups are by category and, optionally, by record id.

use crate::error::{CoreError, CoreResult};
use crate::model::RecordData;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Scalar value of a preset field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresetValue {
    Text(&'static str),
    Integer(i64),
    Flag(bool),
}

impl From<PresetValue> for Value {
    fn from(value: PresetValue) -> Self {
        match value {
            PresetValue::Text(s) => Value::String(s.to_string()),
            PresetValue::Integer(n) => Value::from(n),
            PresetValue::Flag(b) => Value::Bool(b),
        }
    }
}

/// One preset record. Serializes as a flat JSON object with `id` first.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetRecord {
    pub id: &'static str,
    pub fields: &'static [(&'static str, PresetValue)],
}

impl PresetRecord {
    /// The record as JSON object data, including `id`.
    pub fn to_data(&self) -> RecordData {
        let mut data = RecordData::new();
        data.insert("id".to_string(), Value::String(self.id.to_string()));
        for (name, value) in self.fields {
            data.insert(name.to_string(), Value::from(*value));
        }
        data
    }
}

impl Serialize for PresetRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", self.id)?;
        for (name, value) in self.fields {
            match value {
                PresetValue::Text(s) => map.serialize_entry(name, s)?,
                PresetValue::Integer(n) => map.serialize_entry(name, n)?,
                PresetValue::Flag(b) => map.serialize_entry(name, b)?,
            }
        }
        map.end()
    }
}

use PresetValue::{Flag, Integer, Text};

const PRESETS: &[(&str, &[PresetRecord])] = &[
    (
        "users",
        &[
            PresetRecord {
                id: "1",
                fields: &[
                    ("name", Text("Alice")),
                    ("email", Text("alice@example.com")),
                    ("age", Integer(25)),
                    ("isActive", Flag(true)),
                ],
            },
            PresetRecord {
                id: "2",
                fields: &[
                    ("name", Text("Bob")),
                    ("email", Text("bob@example.com")),
                    ("age", Integer(30)),
                    ("isActive", Flag(false)),
                ],
            },
        ],
    ),
    (
        "products",
        &[
            PresetRecord {
                id: "1",
                fields: &[
                    ("title", Text("Wireless Mouse")),
                    ("price", Integer(499)),
                    ("inStock", Flag(true)),
                ],
            },
            PresetRecord {
                id: "2",
                fields: &[
                    ("title", Text("Mechanical Keyboard")),
                    ("price", Integer(1999)),
                    ("inStock", Flag(false)),
                ],
            },
        ],
    ),
    (
        "comments",
        &[
            PresetRecord {
                id: "1",
                fields: &[
                    ("postId", Text("101")),
                    ("author", Text("Alice")),
                    ("content", Text("Nice post!")),
                ],
            },
            PresetRecord {
                id: "2",
                fields: &[
                    ("postId", Text("102")),
                    ("author", Text("Bob")),
                    ("content", Text("I totally agree!")),
                ],
            },
        ],
    ),
    (
        "carts",
        &[
            PresetRecord {
                id: "1",
                fields: &[
                    ("userId", Text("1")),
                    ("productId", Text("2")),
                    ("quantity", Integer(1)),
                ],
            },
            PresetRecord {
                id: "2",
                fields: &[
                    ("userId", Text("2")),
                    ("productId", Text("1")),
                    ("quantity", Integer(2)),
                ],
            },
        ],
    ),
    (
        "posts",
        &[
            PresetRecord {
                id: "1",
                fields: &[
                    ("title", Text("Welcome to MockNode")),
                    ("content", Text("This is a sample post!")),
                ],
            },
            PresetRecord {
                id: "2",
                fields: &[
                    ("title", Text("Building APIs")),
                    ("content", Text("Learn how to mock APIs easily.")),
                ],
            },
        ],
    ),
    (
        "todos",
        &[
            PresetRecord {
                id: "1",
                fields: &[("task", Text("Finish project setup")), ("done", Flag(false))],
            },
            PresetRecord {
                id: "2",
                fields: &[("task", Text("Test API endpoints")), ("done", Flag(true))],
            },
        ],
    ),
];

/// Preset category names, in display order.
pub fn preset_categories() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(category, _)| *category)
}

/// All preset records of `category`.
///
/// Fails `NotFound` for an unknown category.
pub fn presets(category: &str) -> CoreResult<&'static [PresetRecord]> {
    PRESETS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, records)| *records)
        .ok_or_else(|| CoreError::not_found("PresetCategory", category))
}

/// The preset record `id` of `category`.
///
/// Fails `NotFound` for an unknown category or an unknown id.
pub fn preset(category: &str, id: &str) -> CoreResult<&'static PresetRecord> {
    presets(category)?
        .iter()
        .find(|record| record.id == id)
        .ok_or_else(|| CoreError::not_found("Preset", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_category_has_records() {
        let categories: Vec<_> = preset_categories().collect();
        assert_eq!(
            categories,
            ["users", "products", "comments", "carts", "posts", "todos"]
        );
        for category in categories {
            let records = presets(category).unwrap();
            assert_eq!(records.len(), 2, "{}", category);
            assert_eq!(records[0].id, "1");
            assert_eq!(records[1].id, "2");
        }
    }

    #[test]
    fn test_preset_by_id() {
        let bob = preset("users", "2").unwrap();
        assert_eq!(
            serde_json::to_value(bob).unwrap(),
            json!({
                "id": "2",
                "name": "Bob",
                "email": "bob@example.com",
                "age": 30,
                "isActive": false
            })
        );
        assert_eq!(Value::Object(bob.to_data()), serde_json::to_value(bob).unwrap());

        let todo = preset("todos", "2").unwrap();
        assert_eq!(todo.to_data()["done"], json!(true));
    }

    #[test]
    fn test_unknown_category_is_not_found() {
        assert!(matches!(
            presets("invoices"),
            Err(CoreError::NotFound { kind: "PresetCategory", ref id }) if id == "invoices"
        ));
        assert!(matches!(
            preset("invoices", "1"),
            Err(CoreError::NotFound { kind: "PresetCategory", .. })
        ));
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        assert!(matches!(
            preset("products", "3"),
            Err(CoreError::NotFound { kind: "Preset", ref id }) if id == "3"
        ));
        // Ids are compared as strings
        assert!(preset("carts", "01").is_err());
    }

    #[test]
    fn test_category_list_serializes_as_array() {
        let posts = serde_json::to_value(presets("posts").unwrap()).unwrap();
        assert_eq!(posts[0]["title"], "Welcome to MockNode");
        assert_eq!(posts.as_array().map(Vec::len), Some(2));
    }
}
