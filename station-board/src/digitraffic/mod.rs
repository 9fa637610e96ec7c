//! Digitraffic rail API client.
//!
//! This module provides an HTTP client for the Finnish open rail data API
//! (rata.digitraffic.fi), plus a file-backed mock with the same interface.
//!
//! Key characteristics of the API:
//! - Stations are identified by short codes ("HKI", "PSL")
//! - `live-trains?station=` returns each train's full timetable, not just
//!   the rows for the queried station
//! - Times are ISO 8601 timestamps in UTC

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DigitrafficClient, DigitrafficConfig};
pub use convert::{ConversionError, convert_row, convert_train, convert_trains, passenger_stations};
pub use error::DigitrafficError;
pub use mock::MockDigitrafficClient;
pub use source::TimetableSource;
pub use types::{StationDto, TimetableRowDto, TrainDto};
