//! Data models for the Sighthound cloud API.
//!
//! This crate provides Serde-serializable types for:
//! - The detection/recognition response envelope
//! - Per-category output records (faces, people, plates, vehicles)
//! - Mode, endpoint and object-type selectors
//! - Relative bounding boxes and their pixel-space conversions
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod extract;
pub mod geometry;
pub mod object_kind;
pub mod records;
pub mod response;
pub mod selector;

// Re-export common types
pub use error::{SchemaError, SchemaResult};
pub use extract::{
    extract, extract_faces, extract_license_plates, extract_metadata, extract_people,
    extract_plate_readings, extract_vehicles, Extract, FieldSpec, Source, UNKNOWN,
};
pub use geometry::{polygon_to_relative, rect_to_relative, PixelRect, Point, Polygon, RelativeBox};
pub use object_kind::{ObjectKind, ObjectKindParseError};
pub use records::{Face, LicensePlate, Metadata, Person, PlateReading, Reading, Vehicle};
pub use response::{DetectionResponse, ImageInfo, ObjectRecord};
pub use selector::{Endpoint, Mode, RecognitionStyle, SelectorParseError};
