//! Normalized output of one API call.

use serde::Serialize;

use hound_models::{
    extract_faces, extract_license_plates, extract_metadata, extract_people, extract_vehicles,
    DetectionResponse, Face, LicensePlate, Metadata, Person, RelativeBox, SchemaError,
    SchemaResult, Vehicle,
};

/// A record together with its relative bounding box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Located<T> {
    #[serde(flatten)]
    pub record: T,
    pub relative_box: RelativeBox,
}

/// Every category found in a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub faces: Vec<Located<Face>>,
    pub people: Vec<Located<Person>>,
    pub license_plates: Vec<Located<LicensePlate>>,
    pub vehicles: Vec<Located<Vehicle>>,
}

fn locate<T>(records: Vec<T>, to_box: impl Fn(&T) -> RelativeBox) -> Vec<Located<T>> {
    records
        .into_iter()
        .map(|record| Located {
            relative_box: to_box(&record),
            record,
        })
        .collect()
}

/// Extract all categories and attach relative boxes.
///
/// `metadata` is omitted when the response carries no request id. A zero
/// image dimension is rejected since no relative box can be computed.
pub fn build_report(response: &DetectionResponse) -> SchemaResult<Report> {
    let (w, h) = (response.image.width, response.image.height);
    if w == 0 || h == 0 {
        return Err(SchemaError::malformed(format!(
            "image has zero dimension ({}x{})",
            w, h
        )));
    }

    Ok(Report {
        metadata: extract_metadata(response).ok(),
        faces: locate(extract_faces(response)?, |f| f.bounding_box.to_relative(w, h)),
        people: locate(extract_people(response)?, |p| p.bounding_box.to_relative(w, h)),
        license_plates: locate(extract_license_plates(response)?, |p| {
            p.bounding_box.to_relative(w, h)
        }),
        vehicles: locate(extract_vehicles(response)?, |v| v.bounding_box.to_relative(w, h)),
    })
}
