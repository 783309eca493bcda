/// CLI argument definitions via clap derive.
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::airports::OutputConfig;
use crate::fetch::FetchConfig;
use crate::fetch::http::{DEFAULT_LOCATIONS_URL, DEFAULT_PAGE_URL, DEFAULT_TIMEOUT};

/// ukairports — UK airports with IATA codes and coordinates.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "ukairports",
    about = "List UK airports with their IATA codes and coordinates",
    version
)]
pub struct Cli {
    /// Cities with airport.
    #[arg(long)]
    pub cities: bool,

    /// Coordinates of each airport.
    #[arg(long)]
    pub coords: bool,

    /// IATA codes.
    #[arg(long)]
    pub iata: bool,

    /// Name of the airport.
    #[arg(long)]
    pub names: bool,

    /// Print every detail of each airport.
    #[arg(long)]
    pub full: bool,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,

    /// Log fetch sizes and stage timings to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Airport listing page to scrape.
    #[arg(long, value_name = "URL", env = "UKAIRPORTS_PAGE_URL", default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    /// Locations API endpoint.
    #[arg(long, value_name = "URL", env = "UKAIRPORTS_LOCATIONS_URL", default_value = DEFAULT_LOCATIONS_URL)]
    pub locations_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One comma-separated line per airport.
    #[default]
    Text,
    /// Aligned table with headers.
    Table,
    /// JSON array (pretty-printed).
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

impl Cli {
    /// Field selection from the five output flags.
    #[must_use]
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            show_cities: self.cities,
            show_coords: self.coords,
            show_iata: self.iata,
            show_names: self.names,
            show_full: self.full,
        }
    }

    #[must_use]
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            page_url: self.page_url.clone(),
            locations_url: self.locations_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
