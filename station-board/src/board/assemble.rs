//! Assembling a station's train list for one direction.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::config::BoardConfig;
use super::record::TrainRecord;
use crate::domain::{Direction, RawTrain, StationCode};

/// Build the board rows for one direction at a station.
///
/// Trains not admitted by `config` are dropped, as are trains with no
/// scheduled event in `direction` at `station` after `reference_time`.
/// The remaining records are sorted soonest first.
///
/// Never fails: incomplete trains are left out rather than reported.
pub fn build_train_list(
    trains: &[RawTrain],
    station: &StationCode,
    direction: Direction,
    reference_time: DateTime<Utc>,
    config: &BoardConfig,
) -> Vec<TrainRecord> {
    let mut records: Vec<TrainRecord> = trains
        .iter()
        .filter_map(|train| {
            let category = config.admit(train)?;
            let record = TrainRecord::build(train, category, direction, station, reference_time);
            if record.is_none() {
                debug!(
                    train = %train.number,
                    station = %station,
                    %direction,
                    "no upcoming scheduled stop, leaving train off the board"
                );
            }
            record
        })
        .collect();

    records.sort_by_key(|r| r.scheduled_time);
    records
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::RawTimetableRow;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Arrival), Just(Direction::Departure)]
    }

    fn arb_row() -> impl Strategy<Value = RawTimetableRow> {
        (
            prop::sample::select(vec!["HKI", "PSL", "TPE"]),
            arb_direction(),
            prop::option::weighted(0.9, -120i64..120),
            prop::option::weighted(0.8, "[0-9]{1,2}"),
        )
            .prop_map(|(station, event, offset, track)| RawTimetableRow {
                station_code: station.to_string(),
                event_type: event,
                scheduled_time: offset.map(|m| t0() + Duration::minutes(m)),
                track,
            })
    }

    fn arb_train() -> impl Strategy<Value = RawTrain> {
        (
            1u32..10000,
            prop::sample::select(vec!["IC", "S", "PYO", "HL"]),
            prop::sample::select(vec!["Long-distance", "Commuter", "Cargo", "Locomotive"]),
            prop::sample::select(vec!["vr", "ralb", "vr-track"]),
            prop::collection::vec(arb_row(), 0..8),
        )
            .prop_map(|(number, train_type, category, operator, rows)| RawTrain {
                number: number.to_string(),
                train_type: train_type.to_string(),
                category: category.to_string(),
                operator_code: operator.to_string(),
                timetable_rows: rows,
            })
    }

    fn arb_station() -> impl Strategy<Value = StationCode> {
        prop::sample::select(vec!["HKI", "PSL", "TPE"])
            .prop_map(|s| StationCode::parse(s).unwrap())
    }

    proptest! {
        /// Trains of other operators never appear
        #[test]
        fn other_operators_excluded(
            trains in prop::collection::vec(arb_train(), 0..20),
            station in arb_station(),
            direction in arb_direction(),
            ref_offset in -60i64..60,
        ) {
            let reference = t0() + Duration::minutes(ref_offset);
            let records = build_train_list(&trains, &station, direction, reference, &BoardConfig::default());

            let admitted: Vec<&str> = trains
                .iter()
                .filter(|t| t.operator_code == "vr")
                .map(|t| t.number.as_str())
                .collect();
            for r in &records {
                prop_assert!(admitted.contains(&r.number.as_str()));
            }
        }

        /// Every record is strictly after the reference time, at the requested direction
        #[test]
        fn records_are_upcoming(
            trains in prop::collection::vec(arb_train(), 0..20),
            station in arb_station(),
            direction in arb_direction(),
            ref_offset in -60i64..60,
        ) {
            let reference = t0() + Duration::minutes(ref_offset);
            let records = build_train_list(&trains, &station, direction, reference, &BoardConfig::default());

            for r in &records {
                prop_assert!(r.scheduled_time > reference);
                prop_assert_eq!(r.direction, direction);
            }
        }

        /// Trains whose rows for the station are all in the past are absent
        #[test]
        fn past_only_trains_absent(
            trains in prop::collection::vec(arb_train(), 0..20),
            station in arb_station(),
            direction in arb_direction(),
        ) {
            let reference = t0() + Duration::minutes(200);
            let records = build_train_list(&trains, &station, direction, reference, &BoardConfig::default());
            prop_assert!(records.is_empty());
        }

        /// Output is sorted by scheduled time
        #[test]
        fn output_sorted_by_time(
            trains in prop::collection::vec(arb_train(), 0..20),
            station in arb_station(),
            direction in arb_direction(),
        ) {
            let records = build_train_list(&trains, &station, direction, t0(), &BoardConfig::default());

            for window in records.windows(2) {
                prop_assert!(window[0].scheduled_time <= window[1].scheduled_time);
            }
        }

        /// Building twice with the same inputs gives the same board
        #[test]
        fn idempotent(
            trains in prop::collection::vec(arb_train(), 0..20),
            station in arb_station(),
            direction in arb_direction(),
        ) {
            let config = BoardConfig::default();
            let first = build_train_list(&trains, &station, direction, t0(), &config);
            let second = build_train_list(&trains, &station, direction, t0(), &config);
            prop_assert_eq!(first, second);
        }

        /// At most one record per input train
        #[test]
        fn bounded_by_input(
            trains in prop::collection::vec(arb_train(), 0..20),
            station in arb_station(),
            direction in arb_direction(),
        ) {
            let records = build_train_list(&trains, &station, direction, t0(), &BoardConfig::default());
            prop_assert!(records.len() <= trains.len());
        }
    }
}
