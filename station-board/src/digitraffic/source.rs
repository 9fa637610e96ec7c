//! Choice of timetable data source.

use crate::domain::{RawTrain, StationCode};

use super::client::DigitrafficClient;
use super::error::DigitrafficError;
use super::mock::MockDigitrafficClient;
use super::types::StationDto;

/// Where station and train data comes from.
#[derive(Debug, Clone)]
pub enum TimetableSource {
    /// The live Digitraffic API.
    Live(DigitrafficClient),
    /// JSON files on disk.
    Mock(MockDigitrafficClient),
}

impl TimetableSource {
    /// Fetch the full station list.
    pub async fn fetch_stations(&self) -> Result<Vec<StationDto>, DigitrafficError> {
        match self {
            TimetableSource::Live(client) => client.fetch_stations().await,
            TimetableSource::Mock(client) => client.fetch_stations().await,
        }
    }

    /// Fetch the next arriving and departing trains at a station.
    pub async fn fetch_live_trains(
        &self,
        station: &StationCode,
        arriving: u16,
        departing: u16,
    ) -> Result<Vec<RawTrain>, DigitrafficError> {
        match self {
            TimetableSource::Live(client) => {
                client.fetch_live_trains(station, arriving, departing).await
            }
            TimetableSource::Mock(client) => {
                client.fetch_live_trains(station, arriving, departing).await
            }
        }
    }
}

impl From<DigitrafficClient> for TimetableSource {
    fn from(client: DigitrafficClient) -> Self {
        TimetableSource::Live(client)
    }
}

impl From<MockDigitrafficClient> for TimetableSource {
    fn from(client: MockDigitrafficClient) -> Self {
        TimetableSource::Mock(client)
    }
}
