//! Content-derived record versions.
//!
//! A [`RecordVersion`] is a short hash of a record's data. Two records with
//! equal data have equal versions regardless of when they were written, so
//! versions work as weak HTTP ETags for conditional updates.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::fmt;

/// Opaque version identifier for record data.
///
/// # Examples
///
/// ```rust
/// use mocknode_core::model::RecordVersion;
/// use serde_json::json;
///
/// let data = json!({"title": "x"});
/// let version = RecordVersion::from_data(data.as_object().unwrap());
///
/// let etag = version.to_etag();
/// assert_eq!(RecordVersion::parse_etag(&etag), Some(version));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordVersion(String);

impl RecordVersion {
    /// Hash raw content.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();
        // First 8 bytes keep ETags short
        Self(BASE64.encode(&hash[..8]))
    }

    /// Version of a record's data.
    pub fn from_data(data: &Map<String, Value>) -> Self {
        // Map serialization is key-ordered, so equal data hashes equally
        let content = Value::Object(data.clone()).to_string();
        Self::from_content(content.as_bytes())
    }

    /// Parse a version from an ETag header value.
    ///
    /// Accepts weak (`W/"abc"`), strong (`"abc"`) and bare (`abc`) forms.
    pub fn parse_etag(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let unprefixed = trimmed.strip_prefix("W/").unwrap_or(trimmed);
        let opaque = match unprefixed.strip_prefix('"') {
            Some(rest) => rest.strip_suffix('"')?,
            None => unprefixed,
        };

        if opaque.is_empty() || opaque.contains('"') {
            None
        } else {
            Some(Self(opaque.to_string()))
        }
    }

    /// Weak ETag form, `W/"<version>"`.
    pub fn to_etag(&self) -> String {
        format!("W/\"{}\"", self.0)
    }

    /// The opaque version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
