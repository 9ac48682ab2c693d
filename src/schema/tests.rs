//! Tests for field schema serialization and record validation.

use super::types::{FieldSchema, FieldType};
use super::validation::{SchemaValidator, is_valid_email, is_valid_url};
use super::catalog::field_type_catalog;
use crate::error::{ValidationError, ValueShape};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn validate(fields: &[FieldSchema], data: Value) -> Result<(), ValidationError> {
    SchemaValidator::validate(fields, &object(data))
}

#[test]
fn test_field_schema_deserializes_camel_case() {
    let field: FieldSchema = serde_json::from_value(json!({
        "name": "age",
        "type": "number",
        "required": true,
        "minValue": 0,
        "maxValue": 130,
        "default": 18
    }))
    .unwrap();

    assert_eq!(field.name, "age");
    assert_eq!(field.field_type, FieldType::Number);
    assert!(field.required);
    assert_eq!(field.min_value, Some(0.0));
    assert_eq!(field.max_value, Some(130.0));
    assert_eq!(field.default, Some(json!(18)));
    assert!(field.enum_values.is_empty());
}

#[test]
fn test_unknown_type_round_trips_verbatim() {
    let field: FieldSchema =
        serde_json::from_value(json!({"name": "when", "type": "date"})).unwrap();
    assert_eq!(field.field_type, FieldType::Unknown("date".to_string()));
    assert!(!field.required);

    let back = serde_json::to_value(&field).unwrap();
    assert_eq!(back, json!({"name": "when", "type": "date", "required": false}));
}

#[test]
fn test_field_type_names() {
    for name in ["string", "number", "boolean", "array", "object", "enum", "email", "url"] {
        let field_type = FieldType::from(name);
        assert!(!matches!(field_type, FieldType::Unknown(_)), "{}", name);
        assert_eq!(field_type.to_string(), name);
    }
    assert!(FieldType::Email.is_textual());
    assert!(!FieldType::Enum.is_textual());
}

#[test]
fn test_missing_required_field() {
    let fields = vec![FieldSchema::new("title", "string").required()];

    let result = validate(&fields, json!({"other": 1}));
    assert_eq!(result, Err(ValidationError::missing_field("title")));
}

#[test]
fn test_absent_optional_field_skips_checks() {
    let fields = vec![FieldSchema::new("bio", "string").with_length(Some(5), None)];
    assert!(validate(&fields, json!({})).is_ok());
}

#[test]
fn test_string_length_bounds() {
    let fields = vec![FieldSchema::new("bio", "string").with_length(Some(5), Some(6))];

    let result = validate(&fields, json!({"bio": "hi"}));
    assert_eq!(
        result,
        Err(ValidationError::TooShort {
            field: "bio".to_string(),
            min: 5,
            actual: 2,
        })
    );

    assert!(validate(&fields, json!({"bio": "hello!"})).is_ok());
    assert!(validate(&fields, json!({"bio": "hello"})).is_ok());
    assert!(matches!(
        validate(&fields, json!({"bio": "hello!!"})),
        Err(ValidationError::TooLong { max: 6, actual: 7, .. })
    ));
}

#[test]
fn test_string_length_counts_characters() {
    let fields = vec![FieldSchema::new("name", "string").with_length(None, Some(4))];
    // Four characters, more than four bytes
    assert!(validate(&fields, json!({"name": "žluť"})).is_ok());
}

#[test]
fn test_string_type_mismatch_reports_shape() {
    let fields = vec![FieldSchema::new("title", "string")];

    let result = validate(&fields, json!({"title": {"nested": "secret"}}));
    assert_eq!(
        result,
        Err(ValidationError::InvalidType {
            field: "title".to_string(),
            expected: "a string",
            actual: ValueShape::Object,
        })
    );
}

#[test]
fn test_null_is_a_present_value() {
    let fields = vec![FieldSchema::new("title", "string")];
    assert!(matches!(
        validate(&fields, json!({"title": null})),
        Err(ValidationError::InvalidType { actual: ValueShape::Null, .. })
    ));
}

#[test]
fn test_pattern_is_full_match() {
    let fields = vec![FieldSchema::new("code", "string").with_pattern("[A-Z]{3}")];

    assert!(validate(&fields, json!({"code": "ABC"})).is_ok());
    assert!(matches!(
        validate(&fields, json!({"code": "xABCx"})),
        Err(ValidationError::PatternMismatch { .. })
    ));
    assert!(matches!(
        validate(&fields, json!({"code": "ABCD"})),
        Err(ValidationError::PatternMismatch { .. })
    ));
}

#[test]
fn test_pattern_alternation_stays_anchored() {
    let fields = vec![FieldSchema::new("size", "string").with_pattern("s|m")];

    assert!(validate(&fields, json!({"size": "m"})).is_ok());
    assert!(validate(&fields, json!({"size": "sm"})).is_err());
}

#[test]
fn test_invalid_pattern_fails_field() {
    let fields = vec![FieldSchema::new("code", "string").with_pattern("([a-z")];

    let error = validate(&fields, json!({"code": "abc"})).unwrap_err();
    assert!(matches!(error, ValidationError::InvalidPattern { .. }));
    assert_eq!(error.field(), "code");
}

#[test]
fn test_unbalanced_pattern_cannot_escape_anchors() {
    // Wrapped as `^(?:a)|(b)$` this would compile and match any prefix `a`
    let fields = vec![FieldSchema::new("code", "string").with_pattern("a)|(b")];

    for text in ["a-anything-goes", "anything-goes-b", "a"] {
        let error = validate(&fields, json!({"code": text})).unwrap_err();
        assert!(
            matches!(error, ValidationError::InvalidPattern { ref pattern, .. } if pattern == "a)|(b"),
            "{}: {:?}",
            text,
            error
        );
    }
}

#[test]
fn test_compiled_schema_matches_one_shot_validation() {
    let fields = vec![
        FieldSchema::new("sku", "string").required().with_pattern("[A-Z]{3}-[0-9]+"),
        FieldSchema::new("broken", "string").with_pattern("([a-z"),
        FieldSchema::new("count", "number").with_pattern("x+"),
    ];
    let schema = SchemaValidator::compile(&fields);

    let samples = [
        json!({"sku": "ABC-12"}),
        json!({"sku": "abc-12"}),
        json!({"sku": "ABC-12", "broken": "abc"}),
        json!({"sku": "ABC-1", "count": 3}),
        json!({}),
    ];
    for sample in samples {
        let data = object(sample);
        assert_eq!(schema.validate(&data), SchemaValidator::validate(&fields, &data));
    }

    assert!(schema.validate(&object(json!({"sku": "XYZ-9"}))).is_ok());
    assert!(matches!(
        schema.validate(&object(json!({"sku": "XYZ-9", "broken": "x"}))),
        Err(ValidationError::InvalidPattern { .. })
    ));
}

#[test]
fn test_email_shape() {
    let fields = vec![FieldSchema::new("contact", "email").required()];

    assert!(validate(&fields, json!({"contact": "alice@example.com"})).is_ok());
    assert_eq!(
        validate(&fields, json!({"contact": "alice@localhost"})),
        Err(ValidationError::InvalidEmail {
            field: "contact".to_string()
        })
    );
    assert!(validate(&fields, json!({"contact": 42})).is_err());
}

#[test]
fn test_email_helper() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("a@@example.com"));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@example."));
}

#[test]
fn test_url_field() {
    let fields = vec![FieldSchema::new("homepage", "url")];

    assert!(validate(&fields, json!({"homepage": "https://example.com/a?b=c"})).is_ok());
    assert_eq!(
        validate(&fields, json!({"homepage": "example dot com"})),
        Err(ValidationError::InvalidUrl {
            field: "homepage".to_string()
        })
    );
}

#[test]
fn test_url_helper() {
    assert!(is_valid_url("http://localhost:8080"));
    assert!(is_valid_url("mailto:someone@example.com"));
    assert!(is_valid_url("/relative/to/root"));
    assert!(!is_valid_url(""));
    assert!(!is_valid_url("example.com"));
    assert!(!is_valid_url("1http://example.com"));
    assert!(!is_valid_url("http://exa mple.com"));
}

#[test]
fn test_text_constraints_apply_to_email() {
    let fields = vec![FieldSchema::new("contact", "email").with_length(None, Some(10))];
    assert!(matches!(
        validate(&fields, json!({"contact": "someone@example.com"})),
        Err(ValidationError::TooLong { .. })
    ));
}

#[test]
fn test_number_bounds_inclusive() {
    let fields = vec![FieldSchema::new("age", "number").with_range(Some(0.0), Some(130.0))];

    assert!(validate(&fields, json!({"age": 0})).is_ok());
    assert!(validate(&fields, json!({"age": 130})).is_ok());
    assert!(validate(&fields, json!({"age": 42.5})).is_ok());
    assert!(matches!(
        validate(&fields, json!({"age": -1})),
        Err(ValidationError::BelowMinimum { .. })
    ));
    assert!(matches!(
        validate(&fields, json!({"age": 130.01})),
        Err(ValidationError::AboveMaximum { .. })
    ));
    assert!(matches!(
        validate(&fields, json!({"age": "42"})),
        Err(ValidationError::InvalidType { actual: ValueShape::String, .. })
    ));
}

#[test]
fn test_boolean_array_object_types() {
    let fields = vec![
        FieldSchema::new("done", "boolean"),
        FieldSchema::new("tags", "array"),
        FieldSchema::new("meta", "object"),
    ];

    assert!(
        validate(
            &fields,
            json!({"done": false, "tags": [1, "two", null], "meta": {"any": ["shape"]}})
        )
        .is_ok()
    );
    assert!(validate(&fields, json!({"done": "true"})).is_err());
    assert!(validate(&fields, json!({"done": 1})).is_err());
    assert!(validate(&fields, json!({"tags": {"0": "a"}})).is_err());
    assert!(validate(&fields, json!({"meta": [1, 2]})).is_err());
}

#[test]
fn test_enum_rejection_reports_allowed_set() {
    let fields = vec![
        FieldSchema::new("status", "enum")
            .required()
            .with_enum_values(["open", "closed"]),
    ];

    let error = validate(&fields, json!({"status": "pending"})).unwrap_err();
    assert_eq!(
        error,
        ValidationError::NotInEnum {
            field: "status".to_string(),
            value: "pending".to_string(),
            allowed: vec!["open".to_string(), "closed".to_string()],
        }
    );
    let message = error.to_string();
    assert!(message.contains("status"));
    assert!(message.contains(r#"["open", "closed"]"#));

    assert!(validate(&fields, json!({"status": "open"})).is_ok());
    assert!(validate(&fields, json!({"status": "Open"})).is_err());
    assert!(matches!(
        validate(&fields, json!({"status": 1})),
        Err(ValidationError::InvalidType { .. })
    ));
}

#[test]
fn test_unknown_type_is_pass_through() {
    let fields = vec![
        FieldSchema::new("when", "date")
            .required()
            .with_length(Some(100), None),
    ];

    assert!(validate(&fields, json!({"when": 12})).is_ok());
    assert!(validate(&fields, json!({"when": null})).is_ok());
    // Presence is still enforced
    assert!(validate(&fields, json!({})).is_err());
}

#[test]
fn test_inapplicable_constraints_are_inert() {
    let fields = vec![
        FieldSchema::new("title", "string").with_range(Some(100.0), None),
        FieldSchema::new("count", "number").with_pattern("x+").with_length(Some(99), None),
        FieldSchema::new("flag", "boolean").with_enum_values(["yes"]),
    ];

    assert!(validate(&fields, json!({"title": "a", "count": 1, "flag": true})).is_ok());
}

#[test]
fn test_first_declared_violation_wins() {
    let fields = vec![
        FieldSchema::new("first", "number"),
        FieldSchema::new("second", "string").required(),
    ];

    let error = validate(&fields, json!({"first": "not a number"})).unwrap_err();
    assert_eq!(error.field(), "first");

    let reversed: Vec<FieldSchema> = fields.into_iter().rev().collect();
    let error = validate(&reversed, json!({"first": "not a number"})).unwrap_err();
    assert_eq!(error.field(), "second");
}

#[test]
fn test_undeclared_keys_pass_through() {
    let fields = vec![FieldSchema::new("title", "string")];
    assert!(validate(&fields, json!({"title": "x", "extra": true})).is_ok());
}

#[test]
fn test_empty_field_list_accepts_anything() {
    assert!(validate(&[], json!({"a": [1], "b": {"c": null}})).is_ok());
}

#[test]
fn test_catalog_lists_known_types() {
    let catalog = field_type_catalog();
    assert!(!catalog.is_empty());
    for entry in catalog {
        assert!(
            !matches!(FieldType::from(entry.field_type), FieldType::Unknown(_)),
            "{}",
            entry.field_type
        );
    }
    let string_entry = catalog.iter().find(|e| e.field_type == "string").unwrap();
    assert_eq!(string_entry.options, &["minLength", "maxLength", "pattern"]);

    let serialized = serde_json::to_value(&catalog[0]).unwrap();
    assert_eq!(serialized["type"], "string");
}
