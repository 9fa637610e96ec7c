//! Digitraffic rail API response DTOs.
//!
//! These types map directly to the JSON of the `metadata/stations` and
//! `live-trains` endpoints, keeping only the fields a board uses; serde
//! skips the rest. Almost everything is optional: a train with a missing
//! field should drop out of a board, not fail the whole response.

use serde::{Deserialize, Serialize};

/// An entry of `GET /metadata/stations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    /// Short code, e.g. "HKI".
    pub station_short_code: String,

    /// Human-readable name, e.g. "Helsinki asema".
    pub station_name: String,

    /// Whether passenger trains stop here.
    #[serde(default)]
    pub passenger_traffic: bool,

    /// Station type ("STATION", "STOPPING_POINT", "TURNOUT_IN_THE_OPEN_LINE").
    #[serde(rename = "type", default)]
    pub station_type: Option<String>,

    /// UIC station code.
    #[serde(rename = "stationUICCode", default)]
    pub station_uic_code: Option<u32>,

    /// ISO country code, "FI" or "RU".
    #[serde(default)]
    pub country_code: Option<String>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub latitude: Option<f64>,
}

/// A train in a `GET /live-trains` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDto {
    /// Train number, unique per departure date.
    #[serde(default)]
    pub train_number: Option<u32>,

    /// Operator short code, e.g. "vr".
    #[serde(default)]
    pub operator_short_code: Option<String>,

    /// Train type, e.g. "IC", "HL".
    #[serde(default)]
    pub train_type: Option<String>,

    /// Category, e.g. "Long-distance", "Commuter", "Cargo".
    #[serde(default)]
    pub train_category: Option<String>,

    /// The train's full timetable, in stop order.
    #[serde(default)]
    pub time_table_rows: Vec<TimetableRowDto>,
}

/// One arrival or departure in a train's timetable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRowDto {
    /// Station short code.
    #[serde(default)]
    pub station_short_code: Option<String>,

    /// "ARRIVAL" or "DEPARTURE".
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    /// Scheduled time (ISO 8601, UTC).
    #[serde(default)]
    pub scheduled_time: Option<String>,

    /// Track shown to passengers. Often absent until close to the event.
    #[serde(default)]
    pub commercial_track: Option<String>,
}
