/// Fetch layer: HTTP sources for the airport listing and the locations API.
pub mod errors;
pub mod http;
pub mod locations;

pub use errors::FetchError;
pub use http::{AirportSources, FetchConfig, HttpSources};
pub use locations::LocationsResponse;
