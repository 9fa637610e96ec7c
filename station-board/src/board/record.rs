//! Resolving a single train's next scheduled stop.
//!
//! A train's timetable lists every stop it makes, both arrivals and
//! departures. For a board we need one row per train: its next scheduled
//! event of the board's direction at the board's station, together with the
//! track it uses.

use chrono::{DateTime, Utc};

use crate::domain::{Direction, RawTimetableRow, RawTrain, StationCode, TrainCategory};

/// The scheduled time and track of a train's event at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledStop {
    pub time: DateTime<Utc>,
    pub track: String,
}

/// Find the scheduled stop a board should show for a train.
///
/// Scans `rows` in order and returns the first row that is at `station`,
/// has event type `direction`, has a scheduled time strictly after
/// `reference_time`, and has a track. The first such row wins even if a
/// later row has an earlier time.
///
/// Returns `None` when no row qualifies: the train is unavailable for this
/// board.
pub fn resolve_stop(
    direction: Direction,
    station: &StationCode,
    rows: &[RawTimetableRow],
    reference_time: DateTime<Utc>,
) -> Option<ScheduledStop> {
    rows.iter().find_map(|row| {
        if row.station_code != station.as_str() || row.event_type != direction {
            return None;
        }
        let time = row.scheduled_time.filter(|t| *t > reference_time)?;
        let track = row.track.as_ref()?;
        Some(ScheduledStop {
            time,
            track: track.clone(),
        })
    })
}

/// One row of a station board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRecord {
    pub number: String,
    pub train_type: String,
    pub category: TrainCategory,
    pub direction: Direction,
    pub scheduled_time: DateTime<Utc>,
    pub track: String,
}

impl TrainRecord {
    /// Build the board record for a train, or `None` if the train has no
    /// qualifying stop (see [`resolve_stop`]).
    ///
    /// `category` is the train's category as already admitted by the board
    /// configuration.
    pub fn build(
        train: &RawTrain,
        category: TrainCategory,
        direction: Direction,
        station: &StationCode,
        reference_time: DateTime<Utc>,
    ) -> Option<Self> {
        let stop = resolve_stop(direction, station, &train.timetable_rows, reference_time)?;
        Some(Self {
            number: train.number.clone(),
            train_type: train.train_type.clone(),
            category,
            direction,
            scheduled_time: stop.time,
            track: stop.track,
        })
    }

    /// Display label, e.g. "IC 27".
    pub fn label(&self) -> String {
        format!("{} {}", self.train_type, self.number)
    }
}
