//! Digitraffic client error types.

/// Errors from fetching timetable data.
#[derive(Debug, thiserror::Error)]
pub enum DigitrafficError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body wasn't the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Too many requests from this client
    #[error("rate limited by Digitraffic API")]
    RateLimited,

    /// Mock data directory couldn't be loaded or has no data for a request
    #[error("mock data error: {0}")]
    Mock(String),
}
