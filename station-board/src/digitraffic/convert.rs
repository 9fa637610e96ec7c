//! Conversion from Digitraffic DTOs to domain types.
//!
//! Trains missing a train-level field are skipped. Row-level problems are
//! softer: a row without a station or with an unknown event type can never
//! match a board query so it is dropped, and an unparseable scheduled time
//! becomes an absent one.

use tracing::debug;

use crate::domain::{Direction, RawTimetableRow, RawTrain, Station, StationCode, parse_timestamp};

use super::types::{StationDto, TimetableRowDto, TrainDto};

/// Error converting a train DTO.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert one train.
pub fn convert_train(dto: &TrainDto) -> Result<RawTrain, ConversionError> {
    let number = dto
        .train_number
        .ok_or(ConversionError::MissingField("trainNumber"))?;
    let train_type = dto
        .train_type
        .clone()
        .ok_or(ConversionError::MissingField("trainType"))?;
    let category = dto
        .train_category
        .clone()
        .ok_or(ConversionError::MissingField("trainCategory"))?;
    let operator_code = dto
        .operator_short_code
        .clone()
        .ok_or(ConversionError::MissingField("operatorShortCode"))?;

    let timetable_rows = dto.time_table_rows.iter().filter_map(convert_row).collect();

    Ok(RawTrain {
        number: number.to_string(),
        train_type,
        category,
        operator_code,
        timetable_rows,
    })
}

/// Convert one timetable row, or `None` if it can't match any board.
pub fn convert_row(dto: &TimetableRowDto) -> Option<RawTimetableRow> {
    let station_code = dto.station_short_code.clone()?;
    let event_type = dto.event_type.as_deref().and_then(Direction::parse)?;
    let scheduled_time = dto.scheduled_time.as_deref().and_then(parse_timestamp);

    Some(RawTimetableRow {
        station_code,
        event_type,
        scheduled_time,
        track: dto.commercial_track.clone(),
    })
}

/// Convert a live-trains response, skipping trains that fail conversion.
pub fn convert_trains(dtos: &[TrainDto]) -> Vec<RawTrain> {
    dtos.iter()
        .filter_map(|dto| match convert_train(dto) {
            Ok(train) => Some(train),
            Err(e) => {
                debug!(
                    train_number = ?dto.train_number,
                    error = %e,
                    "skipping train"
                );
                None
            }
        })
        .collect()
}

/// The stations to offer: those with passenger traffic and a valid code.
///
/// Keeps the order of the metadata response.
pub fn passenger_stations(dtos: &[StationDto]) -> Vec<Station> {
    dtos.iter()
        .filter(|s| s.passenger_traffic)
        .filter_map(|s| match StationCode::parse(&s.station_short_code) {
            Ok(code) => Some(Station {
                code,
                name: s.station_name.clone(),
            }),
            Err(e) => {
                debug!(code = %s.station_short_code, error = %e, "skipping station");
                None
            }
        })
        .collect()
}
