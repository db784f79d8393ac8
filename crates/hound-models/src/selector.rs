//! API host and endpoint selectors.
//!
//! - `Mode` picks the API host (`dev` or `prod`)
//! - `Endpoint` picks the path and its fixed query parameters
//! - `RecognitionStyle` picks how the recognition category is sent

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A selector string that is not in its allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} {value} is not allowed, must be one of: {}", .allowed.join(", "))]
pub struct SelectorParseError {
    /// Which selector was being parsed ("Mode", "Endpoint", ...)
    pub kind: &'static str,
    /// The rejected value, as given
    pub value: String,
    /// Accepted values
    pub allowed: &'static [&'static str],
}

impl SelectorParseError {
    fn new(kind: &'static str, value: &str, allowed: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            allowed,
        }
    }
}

// =============================================================================
// Mode
// =============================================================================

/// API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dev,
    Prod,
}

impl Mode {
    /// All accepted mode names.
    pub const ALLOWED: &'static [&'static str] = &["dev", "prod"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Dev => "dev",
            Mode::Prod => "prod",
        }
    }

    /// Base URL of the vendor host for this mode.
    pub fn base_url(&self) -> String {
        format!("https://{}.sighthoundapi.com", self.as_str())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Mode::Dev),
            "prod" => Ok(Mode::Prod),
            _ => Err(SelectorParseError::new("Mode", s, Self::ALLOWED)),
        }
    }
}

// =============================================================================
// Endpoint
// =============================================================================

/// API endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Faces and people.
    Detections,
    /// License plates and vehicles.
    #[default]
    Recognition,
}

impl Endpoint {
    /// All accepted endpoint names.
    pub const ALLOWED: &'static [&'static str] = &["detections", "recognition"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Detections => "detections",
            Endpoint::Recognition => "recognition",
        }
    }

    /// Fixed query parameters sent with a plain `detect` call.
    pub fn default_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Endpoint::Detections => &[("type", "all"), ("faceOption", "gender,age")],
            Endpoint::Recognition => &[("objectType", "licenseplate")],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detections" => Ok(Endpoint::Detections),
            "recognition" => Ok(Endpoint::Recognition),
            _ => Err(SelectorParseError::new("Endpoint", s, Self::ALLOWED)),
        }
    }
}

// =============================================================================
// Recognition call shape
// =============================================================================

/// How the recognition category reaches the API.
///
/// Older API generations take `recognition?objectType=vehicle`, newer ones
/// `recognition/vehicle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionStyle {
    #[default]
    Query,
    Path,
}

impl RecognitionStyle {
    pub const ALLOWED: &'static [&'static str] = &["query", "path"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionStyle::Query => "query",
            RecognitionStyle::Path => "path",
        }
    }
}

impl fmt::Display for RecognitionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecognitionStyle {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(RecognitionStyle::Query),
            "path" => Ok(RecognitionStyle::Path),
            _ => Err(SelectorParseError::new("Recognition style", s, Self::ALLOWED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("dev".parse::<Mode>().unwrap(), Mode::Dev);
        assert_eq!("prod".parse::<Mode>().unwrap(), Mode::Prod);
    }

    #[test]
    fn test_selectors_are_case_sensitive() {
        let err = "PROD".parse::<Mode>().unwrap_err();
        assert_eq!(err.value, "PROD");
        assert!("Dev".parse::<Mode>().is_err());
        assert!("Recognition".parse::<Endpoint>().is_err());
        assert!("DETECTIONS".parse::<Endpoint>().is_err());
        assert!("Path".parse::<RecognitionStyle>().is_err());
        assert!(" dev".parse::<Mode>().is_err());
    }

    #[test]
    fn test_bad_mode_lists_allowed() {
        let err = "bad".parse::<Mode>().unwrap_err();
        assert_eq!(err.value, "bad");
        assert_eq!(err.allowed, &["dev", "prod"]);
        assert_eq!(err.to_string(), "Mode bad is not allowed, must be one of: dev, prod");
    }

    #[test]
    fn test_bad_endpoint_lists_allowed() {
        let err = "faces".parse::<Endpoint>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Endpoint faces is not allowed, must be one of: detections, recognition"
        );
    }

    #[test]
    fn test_mode_base_url() {
        assert_eq!(Mode::Dev.base_url(), "https://dev.sighthoundapi.com");
        assert_eq!(Mode::Prod.base_url(), "https://prod.sighthoundapi.com");
    }

    #[test]
    fn test_endpoint_default_params() {
        assert_eq!(
            Endpoint::Detections.default_params(),
            &[("type", "all"), ("faceOption", "gender,age")]
        );
        assert_eq!(
            Endpoint::Recognition.default_params(),
            &[("objectType", "licenseplate")]
        );
    }

    #[test]
    fn test_defaults_match_legacy_client() {
        assert_eq!(Mode::default(), Mode::Dev);
        assert_eq!(Endpoint::default(), Endpoint::Recognition);
        assert_eq!(RecognitionStyle::default(), RecognitionStyle::Query);
    }

    #[test]
    fn test_recognition_style_parse() {
        assert_eq!("path".parse::<RecognitionStyle>().unwrap(), RecognitionStyle::Path);
        assert!("header".parse::<RecognitionStyle>().is_err());
    }
}
