//! Digitraffic rail API HTTP client.
//!
//! Fetches the station list and per-station live trains. Responses are
//! decoded into DTOs and converted to domain types before returning.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{RawTrain, StationCode};

use super::convert::convert_trains;
use super::error::DigitrafficError;
use super::types::{StationDto, TrainDto};

/// Default base URL for the Digitraffic rail API.
const DEFAULT_BASE_URL: &str = "https://rata.digitraffic.fi/api/v1";

/// Default value of the `Digitraffic-User` identification header.
const DEFAULT_USER: &str = "station-board";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Digitraffic client.
#[derive(Debug, Clone)]
pub struct DigitrafficConfig {
    /// Sent as `Digitraffic-User`, which the API asks every client to set
    pub user: String,
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DigitrafficConfig {
    /// Create a new config with the given user identification.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for DigitrafficConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER)
    }
}

/// Digitraffic rail API client.
///
/// Uses a semaphore to limit concurrent requests.
#[derive(Debug, Clone)]
pub struct DigitrafficClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl DigitrafficClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DigitrafficConfig) -> Result<Self, DigitrafficError> {
        let mut headers = HeaderMap::new();

        let user = HeaderValue::from_str(&config.user).map_err(|_| DigitrafficError::Api {
            status: 0,
            message: "Invalid Digitraffic-User header value".to_string(),
        })?;
        headers.insert(HeaderName::from_static("digitraffic-user"), user);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch the full station list.
    pub async fn fetch_stations(&self) -> Result<Vec<StationDto>, DigitrafficError> {
        let url = format!("{}/metadata/stations", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// Fetch the next trains arriving at and departing from a station.
    ///
    /// # Arguments
    ///
    /// * `station` - Station short code
    /// * `arriving` - Number of upcoming arriving trains to include
    /// * `departing` - Number of upcoming departing trains to include
    pub async fn fetch_live_trains(
        &self,
        station: &StationCode,
        arriving: u16,
        departing: u16,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        let url = format!("{}/live-trains", self.base_url);
        let query = live_trains_query(station, arriving, departing);

        let dtos: Vec<TrainDto> = self.get_json(&url, &query).await?;
        debug!(station = %station, count = dtos.len(), "fetched live trains");

        Ok(convert_trains(&dtos))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, DigitrafficError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DigitrafficError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DigitrafficError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigitrafficError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DigitrafficError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Query parameters for `live-trains`: only upcoming trains, no past ones.
fn live_trains_query(
    station: &StationCode,
    arriving: u16,
    departing: u16,
) -> Vec<(&'static str, String)> {
    vec![
        ("arrived_trains", "0".to_string()),
        ("arriving_trains", arriving.to_string()),
        ("departed_trains", "0".to_string()),
        ("departing_trains", departing.to_string()),
        ("station", station.as_str().to_string()),
    ]
}
