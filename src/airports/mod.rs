/// Airports domain layer: listing extraction, coordinate join, field projection.
pub mod document;
pub mod errors;
pub mod projection;
pub mod record;
pub mod registry;

pub use document::{AirportDocument, HtmlAirportPage};
pub use errors::AirportsError;
pub use projection::{Field, FieldValue, OutputConfig, render_text};
pub use record::{AirportRecord, CoordinateIndex};
pub use registry::{AirportRegistry, build_registry};
