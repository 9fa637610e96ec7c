//! Mock Digitraffic client for running without network access.
//!
//! Loads a station list and live-trains responses from JSON files and
//! serves them as if they were API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{RawTrain, StationCode};

use super::convert::convert_trains;
use super::error::DigitrafficError;
use super::types::{StationDto, TrainDto};

/// File holding the station list, in the mock data directory.
const STATIONS_FILE: &str = "stations.json";

/// Mock client that serves data from a directory of JSON files.
///
/// The directory holds `stations.json` (a `metadata/stations` response) and
/// one `{CODE}.json` per station (a `live-trains` response), e.g. `HKI.json`.
#[derive(Debug, Clone)]
pub struct MockDigitrafficClient {
    stations: Arc<Vec<StationDto>>,
    trains: Arc<HashMap<StationCode, Vec<TrainDto>>>,
}

impl MockDigitrafficClient {
    /// Load mock data from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DigitrafficError> {
        let data_dir = data_dir.as_ref();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DigitrafficError::Mock(format!(
                "failed to read mock data directory {:?}: {}",
                data_dir, e
            ))
        })?;

        let mut stations = Vec::new();
        let mut trains = HashMap::new();

        for entry in entries {
            let path = entry
                .map_err(|e| DigitrafficError::Mock(format!("failed to read entry: {}", e)))?
                .path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path)
                .map_err(|e| DigitrafficError::Mock(format!("failed to read {:?}: {}", path, e)))?;

            if path.file_name().and_then(|s| s.to_str()) == Some(STATIONS_FILE) {
                stations = serde_json::from_str(&json).map_err(|e| {
                    DigitrafficError::Mock(format!("failed to parse {:?}: {}", path, e))
                })?;
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| DigitrafficError::Mock(format!("invalid filename: {:?}", path)))?;
            let code = StationCode::parse(stem).map_err(|_| {
                DigitrafficError::Mock(format!("invalid station code in filename: {}", stem))
            })?;
            let list: Vec<TrainDto> = serde_json::from_str(&json)
                .map_err(|e| DigitrafficError::Mock(format!("failed to parse {:?}: {}", path, e)))?;

            trains.insert(code, list);
        }

        if stations.is_empty() && trains.is_empty() {
            return Err(DigitrafficError::Mock(format!(
                "no mock data files found in {:?}",
                data_dir
            )));
        }

        Ok(Self {
            stations: Arc::new(stations),
            trains: Arc::new(trains),
        })
    }

    /// Mimics `DigitrafficClient::fetch_stations`.
    pub async fn fetch_stations(&self) -> Result<Vec<StationDto>, DigitrafficError> {
        Ok(self.stations.as_ref().clone())
    }

    /// Mimics `DigitrafficClient::fetch_live_trains`.
    ///
    /// The window sizes are ignored: mock data is static.
    pub async fn fetch_live_trains(
        &self,
        station: &StationCode,
        _arriving: u16,
        _departing: u16,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        let dtos = self.trains.get(station).ok_or_else(|| {
            DigitrafficError::Mock(format!("no mock data for station {}", station))
        })?;
        Ok(convert_trains(dtos))
    }

    /// Stations with a live-trains file, sorted.
    pub fn available_stations(&self) -> Vec<StationCode> {
        let mut codes: Vec<StationCode> = self.trains.keys().cloned().collect();
        codes.sort();
        codes
    }
}
