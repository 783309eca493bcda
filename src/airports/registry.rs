/// The airport registry: scraped rows joined with API coordinates, grouped by city.
use std::collections::HashMap;

use log::{debug, warn};

use super::document::{AirportDocument, ScrapedRow};
use super::record::{AirportRecord, CoordinateIndex};

/// City → airports, both in first-seen page order.
///
/// A city is only ever present with at least one airport.
#[derive(Debug, Default, Clone)]
pub struct AirportRegistry {
    cities: Vec<(String, Vec<AirportRecord>)>,
    positions: HashMap<String, usize>,
}

impl AirportRegistry {
    fn push(&mut self, record: AirportRecord) {
        if let Some(&pos) = self.positions.get(&record.city) {
            self.cities[pos].1.push(record);
        } else {
            self.positions.insert(record.city.clone(), self.cities.len());
            self.cities.push((record.city.clone(), vec![record]));
        }
    }

    /// Cities with their airports, in first-seen order.
    pub fn cities(&self) -> impl Iterator<Item = (&str, &[AirportRecord])> {
        self.cities
            .iter()
            .map(|(city, records)| (city.as_str(), records.as_slice()))
    }

    /// All records, city by city.
    pub fn records(&self) -> impl Iterator<Item = &AirportRecord> {
        self.cities.iter().flat_map(|(_, records)| records)
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn get(&self, city: &str) -> Option<&[AirportRecord]> {
        self.positions
            .get(city)
            .map(|&pos| self.cities[pos].1.as_slice())
    }

    /// Total number of airports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.iter().map(|(_, records)| records.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of airports the locations API had coordinates for.
    #[must_use]
    pub fn located_count(&self) -> usize {
        self.records().filter(|r| r.coordinates.is_some()).count()
    }
}

/// Join the listing's airport rows against the coordinate index.
///
/// Rows missing a city, name or IATA code are skipped with a warning.
#[must_use]
pub fn build_registry(document: &impl AirportDocument, index: &CoordinateIndex) -> AirportRegistry {
    let mut registry = AirportRegistry::default();
    for (position, row) in document.airport_rows().into_iter().enumerate() {
        let Some(record) = to_record(row, index) else {
            warn!("skipping malformed airport row #{position}");
            continue;
        };
        registry.push(record);
    }
    debug!(
        "registry: {} airports in {} cities, {} located",
        registry.len(),
        registry.cities().count(),
        registry.located_count()
    );
    registry
}

fn to_record(row: ScrapedRow, index: &CoordinateIndex) -> Option<AirportRecord> {
    let ScrapedRow { city, name, iata } = row;
    let (city, name, iata) = (non_empty(city)?, non_empty(name)?, non_empty(iata)?);
    let coordinates = index.get(&iata);
    Some(AirportRecord {
        city,
        name,
        iata,
        coordinates,
    })
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
