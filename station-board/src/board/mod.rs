//! Station board construction.
//!
//! Turns a station's live-trains response into two ordered lists of
//! display-ready records, one for arrivals and one for departures. Everything
//! here is a pure function of its inputs: the reference time is passed in,
//! never read from the clock.

mod assemble;
mod config;
mod record;

pub use assemble::build_train_list;
pub use config::BoardConfig;
pub use record::{ScheduledStop, TrainRecord, resolve_stop};

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Direction, RawTrain, StationCode, format_hhmm};

/// Arrivals and departures for one station at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationBoard {
    pub station: StationCode,
    /// The instant that decided which events count as upcoming.
    pub reference_time: DateTime<Utc>,
    pub arrivals: Vec<TrainRecord>,
    pub departures: Vec<TrainRecord>,
}

impl StationBoard {
    /// Build both lists for a station against a single reference time.
    pub fn build(
        trains: &[RawTrain],
        station: &StationCode,
        reference_time: DateTime<Utc>,
        config: &BoardConfig,
    ) -> Self {
        Self {
            station: station.clone(),
            reference_time,
            arrivals: build_train_list(trains, station, Direction::Arrival, reference_time, config),
            departures: build_train_list(
                trains,
                station,
                Direction::Departure,
                reference_time,
                config,
            ),
        }
    }

    /// The records for one direction.
    pub fn records(&self, direction: Direction) -> &[TrainRecord] {
        match direction {
            Direction::Arrival => &self.arrivals,
            Direction::Departure => &self.departures,
        }
    }
}

/// A board record rendered to its three display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    /// "{type} {number}", e.g. "IC 27"
    pub train: String,
    /// "HH:MM" in the display time zone
    pub time: String,
    pub track: String,
}

impl BoardRow {
    /// Render a record, showing its time in `tz`.
    pub fn from_record<Tz: TimeZone>(record: &TrainRecord, tz: &Tz) -> Self {
        Self {
            train: record.label(),
            time: format_hhmm(&record.scheduled_time, tz),
            track: record.track.clone(),
        }
    }

    /// Render a whole list, keeping its order.
    pub fn from_records<Tz: TimeZone>(records: &[TrainRecord], tz: &Tz) -> Vec<Self> {
        records.iter().map(|r| Self::from_record(r, tz)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawTimetableRow, TrainCategory};
    use chrono::{Duration, FixedOffset};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn row(station: &str, event: Direction, mins: i64, track: &str) -> RawTimetableRow {
        RawTimetableRow {
            station_code: station.to_string(),
            event_type: event,
            scheduled_time: Some(t0() + Duration::minutes(mins)),
            track: Some(track.to_string()),
        }
    }

    fn through_train(number: &str, category: &str, at_hki: i64) -> RawTrain {
        RawTrain {
            number: number.to_string(),
            train_type: "IC".to_string(),
            category: category.to_string(),
            operator_code: "vr".to_string(),
            timetable_rows: vec![
                row("TPE", Direction::Departure, at_hki - 90, "3"),
                row("PSL", Direction::Arrival, at_hki - 5, "6"),
                row("PSL", Direction::Departure, at_hki - 4, "6"),
                row("HKI", Direction::Arrival, at_hki, "8"),
            ],
        }
    }

    fn origin_train(number: &str, at_hki: i64) -> RawTrain {
        RawTrain {
            number: number.to_string(),
            train_type: "R".to_string(),
            category: "Commuter".to_string(),
            operator_code: "vr".to_string(),
            timetable_rows: vec![
                row("HKI", Direction::Departure, at_hki, "11"),
                row("PSL", Direction::Arrival, at_hki + 5, "4"),
            ],
        }
    }

    #[test]
    fn builds_both_directions() {
        let trains = vec![
            through_train("27", "Long-distance", 30),
            through_train("45", "Long-distance", 12),
            origin_train("9611", 7),
        ];
        let hki = StationCode::parse("HKI").unwrap();

        let board = StationBoard::build(&trains, &hki, t0(), &BoardConfig::default());

        assert_eq!(board.station, hki);
        assert_eq!(board.reference_time, t0());

        let arriving: Vec<_> = board.arrivals.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(arriving, vec!["45", "27"]);

        let departing: Vec<_> = board.departures.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(departing, vec!["9611"]);
        assert_eq!(board.departures[0].category, TrainCategory::Commuter);

        assert_eq!(board.records(Direction::Arrival), board.arrivals.as_slice());
        assert_eq!(board.records(Direction::Departure), board.departures.as_slice());
    }

    #[test]
    fn board_rows_render_display_fields() {
        let trains = vec![through_train("27", "Long-distance", 30)];
        let hki = StationCode::parse("HKI").unwrap();
        let board = StationBoard::build(&trains, &hki, t0(), &BoardConfig::default());

        let rows = BoardRow::from_records(&board.arrivals, &Utc);
        assert_eq!(
            rows,
            vec![BoardRow {
                train: "IC 27".to_string(),
                time: "10:30".to_string(),
                track: "8".to_string(),
            }]
        );

        let helsinki = FixedOffset::east_opt(2 * 3600).unwrap();
        let rows = BoardRow::from_records(&board.arrivals, &helsinki);
        assert_eq!(rows[0].time, "12:30");
    }
}
