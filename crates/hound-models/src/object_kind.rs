//! Object categories returned by the API.
//!
//! Every element of a response's `objects` array carries its category in a
//! discriminator field: `type` on the detections endpoint, `objectType` on
//! the recognition endpoint.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of a detected object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Face,
    Person,
    #[serde(rename = "licenseplate")]
    LicensePlate,
    Vehicle,
}

impl ObjectKind {
    /// All known categories.
    pub const ALL: &'static [ObjectKind] = &[
        ObjectKind::Face,
        ObjectKind::Person,
        ObjectKind::LicensePlate,
        ObjectKind::Vehicle,
    ];

    /// Discriminator field names, in lookup order.
    pub const DISCRIMINATORS: &'static [&'static str] = &["type", "objectType"];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Face => "face",
            ObjectKind::Person => "person",
            ObjectKind::LicensePlate => "licenseplate",
            ObjectKind::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = ObjectKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "face" => Ok(ObjectKind::Face),
            "person" => Ok(ObjectKind::Person),
            "licenseplate" => Ok(ObjectKind::LicensePlate),
            "vehicle" => Ok(ObjectKind::Vehicle),
            _ => Err(ObjectKindParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown object type: {0}")]
pub struct ObjectKindParseError(pub String);
