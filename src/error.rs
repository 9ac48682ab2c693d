//! Error types for collection and record operations.
//!
//! [`CoreError`] is what every registry and store operation returns.
//! [`ValidationError`] describes why a record's data was rejected by its
//! collection's field schema; it always names the offending field.

use std::fmt;

/// Main error type for registry and record store operations.
///
/// All failures are returned synchronously and none are retried internally.
/// A failed operation never leaves a partial write behind.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller supplied an identifier that is not well formed
    #[error("Invalid {kind} id: '{id}'")]
    InvalidId { kind: &'static str, id: String },

    /// A referenced parent entity does not exist
    #[error("Referenced {kind} '{id}' does not exist")]
    InvalidReference { kind: &'static str, id: String },

    /// Target entity is absent
    #[error("{kind} not found: '{id}'")]
    NotFound { kind: &'static str, id: String },

    /// Owner hit a creation cap
    #[error("{kind} quota exceeded: {current}/{limit}, upgrade to add more")]
    QuotaExceeded {
        kind: &'static str,
        current: u64,
        limit: u64,
    },

    /// Record data does not conform to the collection's fields
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Conditional update lost against a concurrent write
    #[error("Version mismatch: expected {expected}, current {current}")]
    VersionMismatch { expected: String, current: String },

    /// Failure reported by the document store, passed through as-is
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Stored document could not be converted to or from its model
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid identifier error
    pub fn invalid_id(kind: &'static str, id: impl Into<String>) -> Self {
        Self::InvalidId {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid reference error
    pub fn invalid_reference(kind: &'static str, id: impl Into<String>) -> Self {
        Self::InvalidReference {
            kind,
            id: id.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Wrap a document store error
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(error))
    }

    /// Whether this error came from schema validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// The JSON shape of a value, used in error messages instead of the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueShape {
    /// Classify a JSON value.
    pub fn of(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Record data rejected by a field schema.
///
/// Every variant names the field and the constraint it broke. Values are
/// described by shape or size; nested payloads are never echoed back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is absent from the data
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Value has the wrong JSON type for the field
    #[error("field '{field}' must be {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: &'static str,
        actual: ValueShape,
    },

    /// String shorter than `minLength`
    #[error("field '{field}' must be at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    /// String longer than `maxLength`
    #[error("field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    /// String does not fully match `pattern`
    #[error("field '{field}' does not match required pattern '{pattern}'")]
    PatternMismatch { field: String, pattern: String },

    /// The field's `pattern` is not a valid regular expression
    #[error("field '{field}' declares an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        field: String,
        pattern: String,
        reason: String,
    },

    /// Value is not shaped like an email address
    #[error("field '{field}' must be a valid email")]
    InvalidEmail { field: String },

    /// Value is not a well-formed URI
    #[error("field '{field}' must be a valid URL")]
    InvalidUrl { field: String },

    /// Number below `minValue`
    #[error("field '{field}' must be >= {min}, got {actual}")]
    BelowMinimum { field: String, min: f64, actual: f64 },

    /// Number above `maxValue`
    #[error("field '{field}' must be <= {max}, got {actual}")]
    AboveMaximum { field: String, max: f64, actual: f64 },

    /// String not a member of `enumValues`
    #[error("field '{field}' has invalid value '{value}', must be one of {allowed:?}")]
    NotInEnum {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: &serde_json::Value,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
            actual: ValueShape::of(actual),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::InvalidType { field, .. }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::PatternMismatch { field, .. }
            | Self::InvalidPattern { field, .. }
            | Self::InvalidEmail { field }
            | Self::InvalidUrl { field }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::NotInEnum { field, .. } => field,
        }
    }
}

// Result type aliases for convenience
pub type CoreResult<T> = Result<T, CoreError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
