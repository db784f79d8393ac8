//! Sighthound cloud API client.
//!
//! This crate provides:
//! - Base64 image encoding and the raw POST transport
//! - `HoundClient` with `detect` and `recognize`
//! - Configuration from code or environment variables
//! - Status-code error translation and request metrics
//!
//! Response extraction lives in `hound-models` and is re-exported here.

pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod metrics;

pub use client::{submit, HoundClient};
pub use config::HoundConfig;
pub use encoding::encode_image;
pub use error::{HoundError, HoundResult};

pub use hound_models::{
    extract_faces, extract_license_plates, extract_metadata, extract_people,
    extract_plate_readings, extract_vehicles, polygon_to_relative, rect_to_relative,
    DetectionResponse, Endpoint, Mode, ObjectKind, RecognitionStyle, RelativeBox, SchemaError,
};

#[cfg(test)]
mod client_tests;
