/// Airport records and the IATA-keyed coordinate index used to build them.
use std::collections::HashMap;

use crate::fetch::LocationsResponse;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One airport scraped from the listing page, with coordinates attached when
/// the locations API knows its IATA code.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    /// City label from the listing row (registry key).
    pub city: String,
    /// Airport display name.
    pub name: String,
    /// IATA code, the join key. Never empty.
    pub iata: String,
    /// `None` when the locations API had no entry for `iata`. Never defaulted to zero.
    pub coordinates: Option<Coordinates>,
}

impl AirportRecord {
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.lat)
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.lon)
    }
}

/// IATA code → coordinates, built once from the locations response.
///
/// Duplicate codes resolve last-write-wins.
#[derive(Debug, Default, Clone)]
pub struct CoordinateIndex {
    by_code: HashMap<String, Coordinates>,
}

impl CoordinateIndex {
    /// Index every location entry that carries both a code and a position.
    #[must_use]
    pub fn from_response(response: &LocationsResponse) -> Self {
        let mut index = Self::default();
        for entry in &response.locations {
            if let (Some(code), Some(loc)) = (entry.code.as_deref(), entry.location) {
                index.insert(code, Coordinates {
                    lat: loc.lat,
                    lon: loc.lon,
                });
            }
        }
        index
    }

    pub fn insert(&mut self, code: &str, coordinates: Coordinates) {
        self.by_code.insert(code.to_owned(), coordinates);
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<Coordinates> {
        self.by_code.get(code).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
