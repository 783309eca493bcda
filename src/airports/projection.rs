/// Field selection and the plain-text rendering of a registry.
///
/// The five output flags collapse into an ordered [`Field`] list once; every
/// output format (text, table, JSON) then walks the same projection.
use std::fmt::Write;

use super::record::AirportRecord;
use super::registry::AirportRegistry;

/// Token printed for coordinates the locations API did not supply.
pub const MISSING_COORDINATE: &str = "None";

/// Which airport fields to print. All `false` selects the default projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputConfig {
    pub show_cities: bool,
    pub show_coords: bool,
    pub show_iata: bool,
    pub show_names: bool,
    pub show_full: bool,
}

/// A printable airport field, in fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    City,
    Name,
    Iata,
    /// Latitude and longitude, always printed as a pair.
    Coords,
}

/// One projected value with its column name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Coordinate(Option<f64>),
}

impl OutputConfig {
    /// Fields to print per airport.
    ///
    /// `show_full` wins over individual flags; no flags at all means name and IATA.
    #[must_use]
    pub fn projection(&self) -> Vec<Field> {
        if self.show_full {
            return vec![Field::City, Field::Name, Field::Iata, Field::Coords];
        }
        if !(self.show_cities || self.show_coords || self.show_iata || self.show_names) {
            return vec![Field::Name, Field::Iata];
        }
        [
            (self.show_cities, Field::City),
            (self.show_names, Field::Name),
            (self.show_iata, Field::Iata),
            (self.show_coords, Field::Coords),
        ]
        .into_iter()
        .filter_map(|(on, field)| on.then_some(field))
        .collect()
    }
}

impl Field {
    /// Column names contributed by this field.
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::City => &["city"],
            Self::Name => &["name"],
            Self::Iata => &["iata"],
            Self::Coords => &["latitude", "longitude"],
        }
    }

    /// Values of this field for `record`, one per entry of [`Field::columns`].
    #[must_use]
    pub fn values(self, record: &AirportRecord) -> Vec<FieldValue<'_>> {
        match self {
            Self::City => vec![FieldValue::Text(&record.city)],
            Self::Name => vec![FieldValue::Text(&record.name)],
            Self::Iata => vec![FieldValue::Text(&record.iata)],
            Self::Coords => vec![
                FieldValue::Coordinate(record.latitude()),
                FieldValue::Coordinate(record.longitude()),
            ],
        }
    }
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // Debug keeps the decimal point on whole degrees (55.0, not 55).
            Self::Coordinate(Some(v)) => write!(f, "{v:?}"),
            Self::Coordinate(None) => f.write_str(MISSING_COORDINATE),
        }
    }
}

/// Render one line per airport, each projected value followed by `", "`.
///
/// Lines carry no trailing newline. An airport still yields a (possibly
/// empty) line when the projection is empty.
#[must_use]
pub fn render_text(config: &OutputConfig, registry: &AirportRegistry) -> Vec<String> {
    let fields = config.projection();
    registry
        .records()
        .map(|record| {
            let mut line = String::new();
            for value in fields.iter().flat_map(|f| f.values(record)) {
                // Writing into a String cannot fail.
                let _ = write!(line, "{value}, ");
            }
            line
        })
        .collect()
}
