//! Per-category extraction from the mixed `objects` array.
//!
//! Every category is described by an [`Extract`] impl: the discriminator it
//! matches and a field map from output key to JSON pointer inside the
//! object. [`extract`] applies that map to each matching object and
//! deserializes the flattened result, so a missing or mistyped field fails
//! with a [`SchemaError`] naming the object and path.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{SchemaError, SchemaResult};
use crate::object_kind::ObjectKind;
use crate::records::{Face, LicensePlate, Metadata, Person, PlateReading, Vehicle};
use crate::response::{DetectionResponse, ObjectRecord};

/// Placeholder for vehicle plate fields when no plate is attached.
pub const UNKNOWN: &str = "unknown";

/// Where an output field comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Required value at a JSON pointer.
    Path(&'static str),
    /// Value at `path` if `parent` exists, otherwise [`UNKNOWN`].
    ///
    /// A present `parent` without `path` is still an error.
    OrUnknown {
        parent: &'static str,
        path: &'static str,
    },
}

/// One entry of a category's field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the flattened record
    pub key: &'static str,
    pub source: Source,
}

impl FieldSpec {
    pub const fn path(key: &'static str, path: &'static str) -> Self {
        Self {
            key,
            source: Source::Path(path),
        }
    }

    pub const fn or_unknown(key: &'static str, parent: &'static str, path: &'static str) -> Self {
        Self {
            key,
            source: Source::OrUnknown { parent, path },
        }
    }
}

/// A record type flattened out of objects of one category.
pub trait Extract: DeserializeOwned {
    const KIND: ObjectKind;
    const FIELDS: &'static [FieldSpec];
}

impl Extract for Face {
    const KIND: ObjectKind = ObjectKind::Face;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::path("gender", "/attributes/gender"),
        FieldSpec::path("age", "/attributes/age"),
        FieldSpec::path("boundingBox", "/boundingBox"),
    ];
}

impl Extract for Person {
    const KIND: ObjectKind = ObjectKind::Person;
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::path("boundingBox", "/boundingBox")];
}

impl Extract for LicensePlate {
    const KIND: ObjectKind = ObjectKind::LicensePlate;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::path("boundingBox", "/licenseplateAnnotation/bounding"),
        FieldSpec::path("string", "/licenseplateAnnotation/attributes/system/string"),
        FieldSpec::path("region", "/licenseplateAnnotation/attributes/system/region"),
    ];
}

impl Extract for PlateReading {
    const KIND: ObjectKind = ObjectKind::LicensePlate;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::path("name", "/licenseplateAnnotation/attributes/system/string/name"),
        FieldSpec::path(
            "confidence",
            "/licenseplateAnnotation/attributes/system/string/confidence",
        ),
    ];
}

impl Extract for Vehicle {
    const KIND: ObjectKind = ObjectKind::Vehicle;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::path("boundingBox", "/vehicleAnnotation/bounding"),
        FieldSpec::path(
            "recognitionConfidence",
            "/vehicleAnnotation/recognitionConfidence",
        ),
        FieldSpec::path("make", "/vehicleAnnotation/attributes/system/make/name"),
        FieldSpec::path("model", "/vehicleAnnotation/attributes/system/model/name"),
        FieldSpec::path("color", "/vehicleAnnotation/attributes/system/color/name"),
        FieldSpec::path("vehicleType", "/vehicleAnnotation/attributes/system/vehicleType"),
        FieldSpec::or_unknown(
            "licenseplate",
            "/vehicleAnnotation/licenseplate",
            "/vehicleAnnotation/licenseplate/attributes/system/string/name",
        ),
        FieldSpec::or_unknown(
            "region",
            "/vehicleAnnotation/licenseplate",
            "/vehicleAnnotation/licenseplate/attributes/system/region/name",
        ),
    ];
}

/// Flatten every object of `T::KIND`, preserving response order.
pub fn extract<T: Extract>(response: &DetectionResponse) -> SchemaResult<Vec<T>> {
    response
        .objects
        .iter()
        .enumerate()
        .filter(|(_, obj)| obj.kind() == Some(T::KIND))
        .map(|(index, obj)| flatten::<T>(index, obj))
        .collect()
}

fn flatten<T: Extract>(index: usize, record: &ObjectRecord) -> SchemaResult<T> {
    let missing = |path: &str| SchemaError::MissingObjectField {
        index,
        kind: T::KIND.to_string(),
        path: path.to_string(),
    };

    let mut flat = Map::with_capacity(T::FIELDS.len());
    for field in T::FIELDS {
        let value = match field.source {
            Source::Path(path) => record.pointer(path).ok_or_else(|| missing(path))?.clone(),
            Source::OrUnknown { parent, path } => match record.pointer(parent) {
                None | Some(Value::Null) => Value::String(UNKNOWN.to_string()),
                Some(_) => record.pointer(path).ok_or_else(|| missing(path))?.clone(),
            },
        };
        flat.insert(field.key.to_string(), value);
    }

    serde_json::from_value(Value::Object(flat)).map_err(|e| SchemaError::MalformedObject {
        index,
        kind: T::KIND.to_string(),
        reason: e.to_string(),
    })
}

/// Faces with gender, age and pixel bounding box.
pub fn extract_faces(response: &DetectionResponse) -> SchemaResult<Vec<Face>> {
    extract(response)
}

/// People with pixel bounding box.
pub fn extract_people(response: &DetectionResponse) -> SchemaResult<Vec<Person>> {
    extract(response)
}

/// License plates returned as top-level objects.
pub fn extract_license_plates(response: &DetectionResponse) -> SchemaResult<Vec<LicensePlate>> {
    extract(response)
}

/// License plates in the flat `{name, confidence}` shape.
///
/// Only the plate string is required, so objects without `bounding` or
/// `region` still yield a reading.
pub fn extract_plate_readings(response: &DetectionResponse) -> SchemaResult<Vec<PlateReading>> {
    extract(response)
}

/// Vehicles, with any attached plate flattened into `licenseplate`/`region`.
pub fn extract_vehicles(response: &DetectionResponse) -> SchemaResult<Vec<Vehicle>> {
    extract(response)
}

/// Image size and request id.
pub fn extract_metadata(response: &DetectionResponse) -> SchemaResult<Metadata> {
    let request_id = response
        .request_id
        .clone()
        .ok_or_else(|| SchemaError::missing_field("requestId"))?;

    Ok(Metadata {
        image_width: response.image.width,
        image_height: response.image.height,
        request_id,
    })
}
