//! Response envelope shared by the detections and recognition endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};
use crate::object_kind::ObjectKind;

/// Dimensions of the submitted image, as the API saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<u32>,
}

/// One element of the heterogeneous `objects` array.
///
/// Kept as raw JSON; the per-category schema is applied by the extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ObjectRecord(pub Value);

impl ObjectRecord {
    /// Raw discriminator value (`type`, falling back to `objectType`).
    pub fn discriminator(&self) -> Option<&str> {
        ObjectKind::DISCRIMINATORS
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    /// Category of this object, if it is one we know.
    pub fn kind(&self) -> Option<ObjectKind> {
        self.discriminator().and_then(|d| d.parse().ok())
    }

    /// Look up a nested value by JSON pointer (`/a/b/c`).
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.0.pointer(path)
    }
}

/// Parsed and validated API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResponse {
    pub image: ImageInfo,
    pub objects: Vec<ObjectRecord>,
    #[serde(rename = "requestId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl DetectionResponse {
    /// Validate a raw response body.
    ///
    /// Fails if `image` or `objects` is absent or mistyped.
    pub fn from_value(value: Value) -> SchemaResult<Self> {
        let map = value.as_object().ok_or(SchemaError::NotAnObject)?;

        for key in ["image", "objects"] {
            if map.get(key).map_or(true, Value::is_null) {
                return Err(SchemaError::missing_field(key));
            }
        }

        serde_json::from_value(value).map_err(|e| SchemaError::malformed(e.to_string()))
    }

    /// Parse and validate a raw body.
    pub fn from_slice(bytes: &[u8]) -> SchemaResult<Self> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| SchemaError::malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// Objects of the given category, in response order.
    pub fn objects_of(&self, kind: ObjectKind) -> impl Iterator<Item = &ObjectRecord> {
        self.objects.iter().filter(move |o| o.kind() == Some(kind))
    }

    /// Number of objects of the given category.
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects_of(kind).count()
    }
}
