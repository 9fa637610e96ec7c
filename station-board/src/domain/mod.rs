//! Domain types for the station board.
//!
//! Station and operator codes are validated at construction time. The raw
//! train types mirror the timetable feed and keep its optional fields
//! optional, so incomplete data can be excluded later instead of rejected
//! up front.

mod operator;
mod station;
mod time;
mod train;

pub use operator::{InvalidOperatorCode, OperatorCode};
pub use station::{InvalidStationCode, Station, StationCode};
pub use time::{format_hhmm, parse_timestamp};
pub use train::{Direction, RawTimetableRow, RawTrain, TrainCategory};
