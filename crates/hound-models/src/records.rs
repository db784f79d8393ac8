//! Flattened per-category output records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::{PixelRect, Polygon};

/// A detected face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Face {
    pub gender: String,
    pub age: u32,
    #[serde(rename = "boundingBox")]
    pub bounding_box: PixelRect,
}

/// A detected person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Person {
    #[serde(rename = "boundingBox")]
    pub bounding_box: PixelRect,
}

/// Image size and request id of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub image_width: u32,
    pub image_height: u32,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

/// A recognized label with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Reading {
    pub name: String,
    pub confidence: f64,
}

/// A license plate returned as a top-level object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LicensePlate {
    #[serde(rename = "boundingBox")]
    pub bounding_box: Polygon,
    /// Plate text
    pub string: Reading,
    /// Issuing region
    pub region: Reading,
}

/// Flat plate reading, the shape older callers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlateReading {
    pub name: String,
    pub confidence: f64,
}

impl From<&LicensePlate> for PlateReading {
    fn from(plate: &LicensePlate) -> Self {
        Self {
            name: plate.string.name.clone(),
            confidence: plate.string.confidence,
        }
    }
}

/// A recognized vehicle.
///
/// `licenseplate` and `region` hold the embedded plate's text and region, or
/// `"unknown"` when the API attached no plate to the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vehicle {
    #[serde(rename = "boundingBox")]
    pub bounding_box: Polygon,
    #[serde(rename = "recognitionConfidence")]
    pub recognition_confidence: f64,
    pub make: String,
    pub model: String,
    pub color: String,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    pub licenseplate: String,
    pub region: String,
}

impl Vehicle {
    /// True if the API attached a plate to this vehicle.
    pub fn has_plate(&self) -> bool {
        self.licenseplate != crate::extract::UNKNOWN
    }
}
