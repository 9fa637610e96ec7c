//! Station directory error types.

use crate::digitraffic::DigitrafficError;

/// Errors that can occur when loading the station list.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Fetching from the timetable source failed
    #[error("station list unavailable: {0}")]
    Upstream(#[from] DigitrafficError),

    /// Upstream returned no stations with passenger traffic
    #[error("station list contains no passenger stations")]
    Empty,

    /// Cache operation failed
    #[error("cache error: {message}")]
    Cache { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::from(DigitrafficError::RateLimited);
        assert_eq!(
            err.to_string(),
            "station list unavailable: rate limited by Digitraffic API"
        );

        let err = StationError::Empty;
        assert_eq!(err.to_string(), "station list contains no passenger stations");

        let err = StationError::Cache {
            message: "disk full".into(),
        };
        assert_eq!(err.to_string(), "cache error: disk full");
    }
}
