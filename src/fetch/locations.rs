/// Wire types of the locations API.
use serde::{Deserialize, Serialize};

use super::errors::FetchError;

/// Rectangle the locations query is restricted to, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub low_lat: i16,
    pub high_lat: i16,
    pub low_lon: i16,
    pub high_lon: i16,
}

/// The United Kingdom: 50–61°N, 8°W–2°E.
pub const UK_BOUNDING_BOX: BoundingBox = BoundingBox {
    low_lat: 50,
    high_lat: 61,
    low_lon: -8,
    high_lon: 2,
};

/// Query string sent to the locations endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct LocationsQuery {
    #[serde(rename = "type")]
    kind: &'static str,
    location_types: &'static str,
    low_lat: i16,
    high_lat: i16,
    low_lon: i16,
    high_lon: i16,
}

impl LocationsQuery {
    pub(crate) fn airports_in(bbox: BoundingBox) -> Self {
        Self {
            kind: "box",
            location_types: "airport",
            low_lat: bbox.low_lat,
            high_lat: bbox.high_lat,
            low_lon: bbox.low_lon,
            high_lon: bbox.high_lon,
        }
    }
}

/// Body of a locations response. Only the fields the join needs are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationEntry>,
}

/// One location entry. The API leaves `code` null for some airfields.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    pub code: Option<String>,
    pub location: Option<LatLon>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Decode a locations response body.
///
/// # Errors
///
/// Returns `FetchError::InvalidJson` if the body is not JSON or has no `locations` array.
pub fn parse_locations(body: &str) -> Result<LocationsResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locations() {
        let body = r#"{
            "locations": [
                {"id": "LHR", "code": "LHR", "name": "Heathrow", "location": {"lat": 51.4775, "lon": -0.461389}},
                {"id": "XYZ", "code": null, "location": {"lat": 55.0, "lon": -3.0}},
                {"code": "NQY"}
            ],
            "meta": {"locale": {"code": "en-US"}}
        }"#;
        let response = parse_locations(body).unwrap();
        assert_eq!(response.locations.len(), 3);
        assert_eq!(response.locations[0].code.as_deref(), Some("LHR"));
        let loc = response.locations[0].location.unwrap();
        assert!((loc.lat - 51.4775).abs() < f64::EPSILON);
        assert!(response.locations[1].code.is_none());
        assert!(response.locations[2].location.is_none());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let result = parse_locations("<html>Bad gateway</html>");
        assert!(matches!(result, Err(FetchError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_rejects_missing_locations() {
        let result = parse_locations(r#"{"error": "rate limited"}"#);
        assert!(matches!(result, Err(FetchError::InvalidJson(_))));
    }

    #[test]
    fn test_query_serializes_bounding_box() {
        let query = serde_json::to_value(LocationsQuery::airports_in(UK_BOUNDING_BOX)).unwrap();
        assert_eq!(query["type"], "box");
        assert_eq!(query["location_types"], "airport");
        assert_eq!(query["low_lat"], 50);
        assert_eq!(query["high_lon"], 2);
        assert_eq!(query["low_lon"], -8);
    }
}
