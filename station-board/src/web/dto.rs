//! Data transfer objects for web requests and responses.

use chrono::{SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

use crate::board::{StationBoard, TrainRecord};
use crate::domain::{Direction, Station, TrainCategory, format_hhmm};

/// Query for the station search endpoint.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Substring of the station name or code
    #[serde(default)]
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// Station search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationResult>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station short code, e.g. "HKI"
    pub code: String,

    /// Station name
    pub name: String,
}

impl From<Station> for StationResult {
    fn from(station: Station) -> Self {
        Self {
            code: station.code.to_string(),
            name: station.name,
        }
    }
}

/// A station's board as JSON.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Station short code
    pub station: String,

    /// Station name (falls back to the code when unknown)
    pub station_name: String,

    /// The instant the board was built for (RFC 3339, UTC)
    pub reference_time: String,

    pub arrivals: Vec<BoardRowResult>,
    pub departures: Vec<BoardRowResult>,
}

impl BoardResponse {
    /// Create from a board, showing times in `tz`.
    pub fn from_board<Tz: TimeZone>(
        board: &StationBoard,
        station_name: String,
        tz: &Tz,
    ) -> Self {
        let rows = |direction: Direction| -> Vec<BoardRowResult> {
            board
                .records(direction)
                .iter()
                .map(|r| BoardRowResult::from_record(r, tz))
                .collect()
        };

        Self {
            station: board.station.to_string(),
            station_name,
            reference_time: board
                .reference_time
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            arrivals: rows(Direction::Arrival),
            departures: rows(Direction::Departure),
        }
    }
}

/// One train on a board.
#[derive(Debug, Serialize)]
pub struct BoardRowResult {
    /// "{type} {number}", e.g. "IC 27"
    pub train: String,

    /// "HH:MM" in the server's time zone
    pub time: String,

    pub track: String,

    pub category: TrainCategory,

    /// Full scheduled time (RFC 3339, UTC)
    pub scheduled_time: String,
}

impl BoardRowResult {
    pub fn from_record<Tz: TimeZone>(record: &TrainRecord, tz: &Tz) -> Self {
        Self {
            train: record.label(),
            time: format_hhmm(&record.scheduled_time, tz),
            track: record.track.clone(),
            category: record.category,
            scheduled_time: record
                .scheduled_time
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;
    use crate::domain::{RawTimetableRow, RawTrain, StationCode};
    use chrono::{Duration, Utc};

    fn board() -> StationBoard {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 15, 5, 0, 0).unwrap();
        let trains = vec![RawTrain {
            number: "9611".to_string(),
            train_type: "HL".to_string(),
            category: "Commuter".to_string(),
            operator_code: "vr".to_string(),
            timetable_rows: vec![RawTimetableRow {
                station_code: "HKI".to_string(),
                event_type: Direction::Departure,
                scheduled_time: Some(t0 + Duration::minutes(65)),
                track: Some("11".to_string()),
            }],
        }];
        let hki = StationCode::parse("HKI").unwrap();
        StationBoard::build(&trains, &hki, t0, &BoardConfig::default())
    }

    #[test]
    fn board_response_json() {
        let response = BoardResponse::from_board(&board(), "Helsinki asema".to_string(), &Utc);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["station"], "HKI");
        assert_eq!(json["station_name"], "Helsinki asema");
        assert_eq!(json["reference_time"], "2024-03-15T05:00:00Z");
        assert_eq!(json["arrivals"].as_array().unwrap().len(), 0);

        let departure = &json["departures"][0];
        assert_eq!(departure["train"], "HL 9611");
        assert_eq!(departure["time"], "06:05");
        assert_eq!(departure["track"], "11");
        assert_eq!(departure["category"], "Commuter");
        assert_eq!(departure["scheduled_time"], "2024-03-15T06:05:00Z");
    }

    #[test]
    fn search_request_defaults() {
        let req: StationSearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.q, "");
        assert_eq!(req.limit, None);
    }
}
