/// Errors from the airports pipeline.
use thiserror::Error;

use crate::fetch::FetchError;

/// Failures that end a run. Each maps to a distinct process exit code.
#[derive(Debug, Error)]
pub enum AirportsError {
    /// The airport listing page could not be fetched.
    #[error("Could not fetch the airport listing: {0}")]
    PageFetch(#[source] FetchError),

    /// The locations API could not be fetched or returned an unusable body.
    #[error("Could not fetch airport coordinates: {0}")]
    CoordinateFetch(#[source] FetchError),

    /// Writing the rendered output failed.
    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Exit code mapping for `AirportsError` variants.
impl AirportsError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PageFetch(_) => 3,
            Self::CoordinateFetch(_) => 4,
            Self::Output(_) => 1,
        }
    }

    /// Machine-readable error code (snake_case) for the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PageFetch(_) => "page_fetch_failed",
            Self::CoordinateFetch(_) => "coordinate_fetch_failed",
            Self::Output(_) => "output_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_json() -> FetchError {
        FetchError::InvalidJson(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AirportsError::PageFetch(bad_json()).exit_code(), 3);
        assert_eq!(AirportsError::CoordinateFetch(bad_json()).exit_code(), 4);
        let io = std::io::Error::other("disk on fire");
        assert_eq!(AirportsError::from(io).exit_code(), 1);
    }

    #[test]
    fn test_message_includes_cause() {
        let err = AirportsError::CoordinateFetch(bad_json());
        assert!(err.to_string().starts_with("Could not fetch airport coordinates: "));
        assert_eq!(err.code(), "coordinate_fetch_failed");
    }
}
