/// Blocking HTTP access to the airport listing page and the locations API.
use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use super::errors::FetchError;
use super::locations::{LocationsQuery, LocationsResponse, UK_BOUNDING_BOX, parse_locations};
use crate::airports::{AirportDocument, HtmlAirportPage};

/// Airport directory page for the United Kingdom.
pub const DEFAULT_PAGE_URL: &str = "https://www.prokerala.com/travel/airports/united-kingdom/";

/// Locations API endpoint.
pub const DEFAULT_LOCATIONS_URL: &str = "https://api.skypicker.com/locations/";

/// Per-request timeout unless `--timeout` says otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where to fetch from and how long to wait.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub page_url: String,
    pub locations_url: String,
    pub timeout: Duration,
}

/// The two inputs of a run. Each call is a single attempt.
pub trait AirportSources {
    type Page: AirportDocument;

    /// Fetch and parse the airport listing page.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure or a non-success status.
    fn fetch_page(&self) -> Result<Self::Page, FetchError>;

    /// Fetch airport locations inside the UK bounding box.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure, a non-success status, or a non-JSON body.
    fn fetch_coordinates(&self) -> Result<LocationsResponse, FetchError>;
}

/// [`AirportSources`] over real HTTP.
pub struct HttpSources {
    client: Client,
    config: FetchConfig,
}

impl HttpSources {
    /// Build the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the TLS backend cannot be initialised.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }
}

impl AirportSources for HttpSources {
    type Page = HtmlAirportPage;

    fn fetch_page(&self) -> Result<HtmlAirportPage, FetchError> {
        let response = self.client.get(&self.config.page_url).send()?;
        let body = success(response)?.text()?;
        debug!("airport page: {} bytes from {}", body.len(), self.config.page_url);
        Ok(HtmlAirportPage::parse(&body))
    }

    fn fetch_coordinates(&self) -> Result<LocationsResponse, FetchError> {
        let response = self
            .client
            .get(&self.config.locations_url)
            .header(CONTENT_TYPE, "application/json")
            .query(&LocationsQuery::airports_in(UK_BOUNDING_BOX))
            .send()?;
        let body = success(response)?.text()?;
        let locations = parse_locations(&body)?;
        debug!(
            "locations: {} entries from {}",
            locations.locations.len(),
            self.config.locations_url
        );
        Ok(locations)
    }
}

fn success(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            url: response.url().to_string(),
            status: status.as_u16(),
        })
    }
}
