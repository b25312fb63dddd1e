//! Typed Street View metadata responses.
//!
//! The metadata endpoint is free to query and reports whether imagery
//! exists for a location. Only the `status` field is interpreted; every
//! other field the provider sends is kept verbatim in a passthrough bag so
//! a persisted document round-trips exactly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Status reported by the metadata endpoint.
///
/// `Other` carries any status string this library does not know about, so
/// new provider statuses degrade gracefully instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanoramaStatus {
    /// Imagery exists; the picture endpoint may be called
    Ok,
    /// No panorama near the requested location
    ZeroResults,
    /// The location string could not be resolved
    NotFound,
    /// Quota exceeded
    OverQueryLimit,
    /// Key rejected or API not enabled
    RequestDenied,
    /// Malformed request
    InvalidRequest,
    /// Transient server-side failure
    UnknownError,
    /// Any status string not covered above
    Other(String),
}

impl PanoramaStatus {
    /// The exact status string used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::NotFound => "NOT_FOUND",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }

    /// True only for `OK`, the sole status that opens the picture gate.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<&str> for PanoramaStatus {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "NOT_FOUND" => Self::NotFound,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PanoramaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PanoramaStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PanoramaStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A metadata document for one queried location.
///
/// `status` drives the picture gate; `extra` holds all remaining provider
/// fields (`copyright`, `date`, `location`, `pano_id`, ...) untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanoramaMetadata {
    /// The gate-controlling status
    pub status: PanoramaStatus,
    /// Every other field from the provider document, verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PanoramaMetadata {
    /// True when the status permits fetching the picture.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_FIXTURE: &str = r#"{
        "copyright": "© Google",
        "date": "2023-06",
        "location": { "lat": 55.6050936, "lng": 13.0001566 },
        "pano_id": "tu510ie_z4ptBZYo2BGEJg",
        "status": "OK"
    }"#;

    #[test]
    fn test_deserialize_ok_document() {
        let meta: PanoramaMetadata = serde_json::from_str(OK_FIXTURE).unwrap();

        assert_eq!(meta.status, PanoramaStatus::Ok);
        assert!(meta.is_ok());
        assert_eq!(
            meta.extra.get("pano_id").and_then(|v| v.as_str()),
            Some("tu510ie_z4ptBZYo2BGEJg")
        );
        assert_eq!(
            meta.extra.get("date").and_then(|v| v.as_str()),
            Some("2023-06")
        );
    }

    #[test]
    fn test_deserialize_zero_results() {
        let meta: PanoramaMetadata =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();

        assert_eq!(meta.status, PanoramaStatus::ZeroResults);
        assert!(!meta.is_ok());
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_deserialize_unknown_status_is_preserved() {
        let meta: PanoramaMetadata =
            serde_json::from_str(r#"{"status": "BRAND_NEW_STATUS"}"#).unwrap();

        assert_eq!(
            meta.status,
            PanoramaStatus::Other("BRAND_NEW_STATUS".to_string())
        );
        assert!(!meta.is_ok());
        assert_eq!(meta.status.as_str(), "BRAND_NEW_STATUS");
    }

    #[test]
    fn test_serialize_round_trips_unknown_fields() {
        let original: Value = serde_json::from_str(OK_FIXTURE).unwrap();
        let meta: PanoramaMetadata = serde_json::from_str(OK_FIXTURE).unwrap();

        let reserialized = serde_json::to_value(&meta).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_status_wire_strings() {
        let cases = [
            (PanoramaStatus::Ok, "OK"),
            (PanoramaStatus::ZeroResults, "ZERO_RESULTS"),
            (PanoramaStatus::NotFound, "NOT_FOUND"),
            (PanoramaStatus::OverQueryLimit, "OVER_QUERY_LIMIT"),
            (PanoramaStatus::RequestDenied, "REQUEST_DENIED"),
            (PanoramaStatus::InvalidRequest, "INVALID_REQUEST"),
            (PanoramaStatus::UnknownError, "UNKNOWN_ERROR"),
        ];

        for (status, wire) in cases {
            assert_eq!(status.as_str(), wire);
            assert_eq!(PanoramaStatus::from(wire), status);
            assert_eq!(status.to_string(), wire);
        }
    }

    #[test]
    fn test_only_ok_opens_the_gate() {
        assert!(PanoramaStatus::Ok.is_ok());
        assert!(!PanoramaStatus::ZeroResults.is_ok());
        assert!(!PanoramaStatus::RequestDenied.is_ok());
        assert!(!PanoramaStatus::Other("OKAY".to_string()).is_ok());
    }
}
