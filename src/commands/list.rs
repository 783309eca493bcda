/// `list` pipeline: fetch both sources, join them, print the result.
use std::io::{self, Write};

use log::{debug, warn};

use crate::airports::{AirportRegistry, AirportsError, CoordinateIndex, OutputConfig, build_registry};
use crate::cli::OutputCtx;
use crate::cli::output::{DebugTimer, write_airports};
use crate::fetch::AirportSources;

/// Run `ukairports`, printing to stdout.
///
/// # Errors
///
/// Returns `AirportsError` if either source fails or stdout cannot be written.
pub fn run(
    sources: &impl AirportSources,
    config: &OutputConfig,
    ctx: &OutputCtx,
) -> Result<(), AirportsError> {
    let stdout = io::stdout();
    run_into(&mut stdout.lock(), sources, config, ctx)
}

/// Run the pipeline, writing to `out`. Nothing is written unless both fetches succeed.
///
/// # Errors
///
/// Returns `AirportsError` if either source fails or `out` cannot be written.
pub fn run_into(
    out: &mut impl Write,
    sources: &impl AirportSources,
    config: &OutputConfig,
    ctx: &OutputCtx,
) -> Result<(), AirportsError> {
    let registry = collect(sources)?;

    let _t_render = DebugTimer::start("render");
    write_airports(out, &registry, config, ctx)?;
    Ok(())
}

/// Fetch the listing, then the coordinates, and join them.
///
/// The coordinates are not requested when the listing fails.
///
/// # Errors
///
/// `PageFetch` or `CoordinateFetch`, whichever source failed first.
pub fn collect(sources: &impl AirportSources) -> Result<AirportRegistry, AirportsError> {
    let _t_page = DebugTimer::start("fetch_page");
    let page = sources.fetch_page().map_err(AirportsError::PageFetch)?;
    drop(_t_page);

    let _t_coords = DebugTimer::start("fetch_coordinates");
    let locations = sources
        .fetch_coordinates()
        .map_err(AirportsError::CoordinateFetch)?;
    drop(_t_coords);

    let _t_join = DebugTimer::start("build_registry");
    let index = CoordinateIndex::from_response(&locations);
    if index.is_empty() {
        warn!("locations API returned no usable airport entries");
    } else {
        debug!("coordinate index: {} airports", index.len());
    }
    let registry = build_registry(&page, &index);
    if registry.is_empty() {
        warn!("no airport rows found on the listing page");
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::airports::document::ScrapedRow;
    use crate::cli::args::OutputFormat;
    use crate::fetch::locations::parse_locations;
    use crate::fetch::{FetchError, LocationsResponse};

    /// Canned sources that count how often each endpoint is hit.
    struct FakeSources {
        page: Option<Vec<ScrapedRow>>,
        locations: Option<&'static str>,
        page_calls: Cell<u32>,
        coordinate_calls: Cell<u32>,
    }

    impl FakeSources {
        fn new(page: Option<Vec<ScrapedRow>>, locations: Option<&'static str>) -> Self {
            Self {
                page,
                locations,
                page_calls: Cell::new(0),
                coordinate_calls: Cell::new(0),
            }
        }
    }

    fn unreachable() -> FetchError {
        FetchError::Status {
            url: "http://test.invalid/".to_owned(),
            status: 502,
        }
    }

    impl AirportSources for FakeSources {
        type Page = Vec<ScrapedRow>;

        fn fetch_page(&self) -> Result<Vec<ScrapedRow>, FetchError> {
            self.page_calls.set(self.page_calls.get() + 1);
            self.page.clone().ok_or_else(unreachable)
        }

        fn fetch_coordinates(&self) -> Result<LocationsResponse, FetchError> {
            self.coordinate_calls.set(self.coordinate_calls.get() + 1);
            parse_locations(self.locations.ok_or_else(unreachable)?)
        }
    }

    fn rows() -> Vec<ScrapedRow> {
        let row = |city: &str, name: &str, iata: &str| ScrapedRow {
            city: Some(city.to_owned()),
            name: Some(name.to_owned()),
            iata: Some(iata.to_owned()),
        };
        vec![
            row("London", "Heathrow", "LHR"),
            row("London", "Gatwick", "LGW"),
            row("Manchester", "Manchester Airport", "MAN"),
        ]
    }

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Text, false, false)
    }

    const HEATHROW_ONLY: &str =
        r#"{"locations":[{"code":"LHR","location":{"lat":51.47,"lon":-0.45}}]}"#;

    #[test]
    fn test_collect_joins_sources() {
        let sources = FakeSources::new(Some(rows()), Some(HEATHROW_ONLY));
        let registry = collect(&sources).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.located_count(), 1);
        assert_eq!(registry.get("London").unwrap()[0].latitude(), Some(51.47));
    }

    #[test]
    fn test_run_writes_default_lines() {
        let sources = FakeSources::new(Some(rows()), Some(HEATHROW_ONLY));
        let mut out = Vec::new();
        run_into(&mut out, &sources, &OutputConfig::default(), &ctx()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Heathrow, LHR, \nGatwick, LGW, \nManchester Airport, MAN, \n"
        );
    }

    #[test]
    fn test_page_failure_skips_coordinate_fetch_and_output() {
        let sources = FakeSources::new(None, Some(HEATHROW_ONLY));
        let mut out = Vec::new();
        let err = run_into(&mut out, &sources, &OutputConfig::default(), &ctx()).unwrap_err();
        assert!(matches!(err, AirportsError::PageFetch(_)));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(sources.page_calls.get(), 1);
        assert_eq!(sources.coordinate_calls.get(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_coordinate_failure_writes_nothing() {
        let sources = FakeSources::new(Some(rows()), Some("not json"));
        let mut out = Vec::new();
        let err = run_into(&mut out, &sources, &OutputConfig::default(), &ctx()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(out.is_empty());
    }

    #[test]
    fn test_malformed_coordinates_exit_4() {
        let sources = FakeSources::new(Some(rows()), Some("not json"));
        let err = collect(&sources).unwrap_err();
        assert!(matches!(
            err,
            AirportsError::CoordinateFetch(FetchError::InvalidJson(_))
        ));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_coordinate_transport_failure() {
        let sources = FakeSources::new(Some(rows()), None);
        let err = collect(&sources).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(sources.coordinate_calls.get(), 1);
    }
}
