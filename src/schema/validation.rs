//! Record validation against a collection's field schema.
//!
//! Fields are checked in declaration order and the first violation is
//! returned. Keys in the data that no field declares are not inspected.

use super::types::{FieldSchema, FieldType};
use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use serde_json::{Map, Value};

/// Stateless validator for record data.
///
/// # Examples
///
/// ```rust
/// use mocknode_core::schema::{FieldSchema, SchemaValidator};
/// use serde_json::json;
///
/// let fields = vec![
///     FieldSchema::new("title", "string").required().with_length(Some(1), Some(80)),
///     FieldSchema::new("status", "enum").with_enum_values(["open", "closed"]),
/// ];
/// let data = json!({"title": "Fix login", "status": "open"});
///
/// assert!(SchemaValidator::validate(&fields, data.as_object().unwrap()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validate `data` against `fields`, failing on the first violation.
    pub fn validate(fields: &[FieldSchema], data: &Map<String, Value>) -> ValidationResult<()> {
        Self::compile(fields).validate(data)
    }

    /// Compile the field patterns once for validating many records.
    ///
    /// A pattern that does not compile is not an error here; it fails the
    /// field with `InvalidPattern` when a record reaches it.
    pub fn compile(fields: &[FieldSchema]) -> CompiledSchema<'_> {
        let patterns = fields
            .iter()
            .map(|field| match (&field.field_type, &field.pattern) {
                (FieldType::String | FieldType::Email | FieldType::Url, Some(pattern)) => {
                    Some(compile_full_match(pattern))
                }
                _ => None,
            })
            .collect();
        CompiledSchema { fields, patterns }
    }
}

/// A field list with its patterns compiled.
///
/// ```rust
/// use mocknode_core::schema::{FieldSchema, SchemaValidator};
/// use serde_json::json;
///
/// let fields = vec![FieldSchema::new("sku", "string").with_pattern("[A-Z]{3}-[0-9]+")];
/// let schema = SchemaValidator::compile(&fields);
///
/// for sku in ["ABC-1", "XYZ-42"] {
///     let data = json!({"sku": sku});
///     assert!(schema.validate(data.as_object().unwrap()).is_ok());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CompiledSchema<'a> {
    fields: &'a [FieldSchema],
    patterns: Vec<Option<Result<Regex, String>>>,
}

impl CompiledSchema<'_> {
    /// Validate `data`, failing on the first violation in declaration order.
    pub fn validate(&self, data: &Map<String, Value>) -> ValidationResult<()> {
        for (field, pattern) in self.fields.iter().zip(&self.patterns) {
            Self::validate_field(field, pattern.as_ref(), data)?;
        }
        Ok(())
    }

    fn validate_field(
        field: &FieldSchema,
        pattern: Option<&Result<Regex, String>>,
        data: &Map<String, Value>,
    ) -> ValidationResult<()> {
        let Some(value) = data.get(&field.name) else {
            if field.required {
                return Err(ValidationError::missing_field(&field.name));
            }
            return Ok(());
        };

        match &field.field_type {
            FieldType::String | FieldType::Email | FieldType::Url => {
                Self::validate_text(field, pattern, value)
            }
            FieldType::Number => Self::validate_number(field, value),
            FieldType::Boolean => Self::validate_boolean(field, value),
            FieldType::Array => Self::validate_array(field, value),
            FieldType::Object => Self::validate_object(field, value),
            FieldType::Enum => Self::validate_enum(field, value),
            FieldType::Unknown(_) => Ok(()),
        }
    }

    fn validate_text(
        field: &FieldSchema,
        pattern: Option<&Result<Regex, String>>,
        value: &Value,
    ) -> ValidationResult<()> {
        let Some(text) = value.as_str() else {
            return Err(ValidationError::invalid_type(&field.name, "a string", value));
        };

        let length = text.chars().count();
        if let Some(min) = field.min_length {
            if length < min {
                return Err(ValidationError::TooShort {
                    field: field.name.clone(),
                    min,
                    actual: length,
                });
            }
        }
        if let Some(max) = field.max_length {
            if length > max {
                return Err(ValidationError::TooLong {
                    field: field.name.clone(),
                    max,
                    actual: length,
                });
            }
        }

        if let (Some(compiled), Some(source)) = (pattern, &field.pattern) {
            Self::validate_pattern(field, source, compiled, text)?;
        }

        match field.field_type {
            FieldType::Email if !is_valid_email(text) => Err(ValidationError::InvalidEmail {
                field: field.name.clone(),
            }),
            FieldType::Url if !is_valid_url(text) => Err(ValidationError::InvalidUrl {
                field: field.name.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn validate_pattern(
        field: &FieldSchema,
        source: &str,
        compiled: &Result<Regex, String>,
        text: &str,
    ) -> ValidationResult<()> {
        let anchored = compiled
            .as_ref()
            .map_err(|reason| ValidationError::InvalidPattern {
                field: field.name.clone(),
                pattern: source.to_string(),
                reason: reason.clone(),
            })?;

        if anchored.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::PatternMismatch {
                field: field.name.clone(),
                pattern: source.to_string(),
            })
        }
    }

    fn validate_number(field: &FieldSchema, value: &Value) -> ValidationResult<()> {
        let Some(number) = value.as_f64() else {
            return Err(ValidationError::invalid_type(&field.name, "a number", value));
        };

        if let Some(min) = field.min_value {
            if number < min {
                return Err(ValidationError::BelowMinimum {
                    field: field.name.clone(),
                    min,
                    actual: number,
                });
            }
        }
        if let Some(max) = field.max_value {
            if number > max {
                return Err(ValidationError::AboveMaximum {
                    field: field.name.clone(),
                    max,
                    actual: number,
                });
            }
        }
        Ok(())
    }

    fn validate_boolean(field: &FieldSchema, value: &Value) -> ValidationResult<()> {
        if value.is_boolean() {
            Ok(())
        } else {
            Err(ValidationError::invalid_type(&field.name, "a boolean", value))
        }
    }

    fn validate_array(field: &FieldSchema, value: &Value) -> ValidationResult<()> {
        if value.is_array() {
            Ok(())
        } else {
            Err(ValidationError::invalid_type(&field.name, "an array", value))
        }
    }

    fn validate_object(field: &FieldSchema, value: &Value) -> ValidationResult<()> {
        if value.is_object() {
            Ok(())
        } else {
            Err(ValidationError::invalid_type(&field.name, "an object", value))
        }
    }

    fn validate_enum(field: &FieldSchema, value: &Value) -> ValidationResult<()> {
        let Some(choice) = value.as_str() else {
            return Err(ValidationError::invalid_type(
                &field.name,
                "a string for enum type",
                value,
            ));
        };

        if field.enum_values.iter().any(|allowed| allowed == choice) {
            Ok(())
        } else {
            Err(ValidationError::NotInEnum {
                field: field.name.clone(),
                value: choice.to_string(),
                allowed: field.enum_values.clone(),
            })
        }
    }
}

/// Full-string match: the pattern must compile on its own before it is
/// anchored, so unbalanced groups cannot escape `^(?:...)$`.
fn compile_full_match(pattern: &str) -> Result<Regex, String> {
    Regex::new(pattern).map_err(|e| e.to_string())?;
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| e.to_string())
}

/// Simple email shape: `local@domain`, no whitespace, a dot inside the domain.
pub(crate) fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Absolute URI (`scheme:rest`) or absolute path, without whitespace.
pub(crate) fn is_valid_url(value: &str) -> bool {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if value.starts_with('/') {
        return true;
    }

    let Some((scheme, _rest)) = value.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
