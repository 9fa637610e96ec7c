//! Raw train and timetable row types.
//!
//! These hold the timetable feed's per-train data after JSON decoding but
//! before any filtering. Fields the feed may omit stay optional; the board
//! pipeline decides what to do with incomplete rows.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which timetable event is being looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Arrival,
    Departure,
}

impl Direction {
    /// Both directions, in the order boards show them.
    pub const ALL: [Direction; 2] = [Direction::Arrival, Direction::Departure];

    /// Parse the feed's event type ("ARRIVAL" / "DEPARTURE").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ARRIVAL" => Some(Direction::Arrival),
            "DEPARTURE" => Some(Direction::Departure),
            _ => None,
        }
    }

    /// The feed's spelling of this event type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Arrival => "ARRIVAL",
            Direction::Departure => "DEPARTURE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Train categories shown on station boards.
///
/// Other categories in the feed (cargo, locomotive transfers, ...) have no
/// variant; they never reach a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrainCategory {
    #[serde(rename = "Long-distance")]
    LongDistance,
    #[serde(rename = "Commuter")]
    Commuter,
}

impl TrainCategory {
    /// Parse the feed's category name.
    ///
    /// # Examples
    ///
    /// ```
    /// use station_board::domain::TrainCategory;
    ///
    /// assert_eq!(TrainCategory::parse("Long-distance"), Some(TrainCategory::LongDistance));
    /// assert_eq!(TrainCategory::parse("Commuter"), Some(TrainCategory::Commuter));
    /// assert_eq!(TrainCategory::parse("Cargo"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Long-distance" => Some(TrainCategory::LongDistance),
            "Commuter" => Some(TrainCategory::Commuter),
            _ => None,
        }
    }

    /// The feed's spelling of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainCategory::LongDistance => "Long-distance",
            TrainCategory::Commuter => "Commuter",
        }
    }
}

impl fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled event for a train at a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTimetableRow {
    /// Short code of the station, as sent by the feed.
    pub station_code: String,
    pub event_type: Direction,
    /// `None` when the feed omitted the time or sent one we couldn't parse.
    pub scheduled_time: Option<DateTime<Utc>>,
    /// Commercial track, if one has been announced.
    pub track: Option<String>,
}

/// A train as listed in a station's live-trains response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrain {
    pub number: String,
    /// Train type, e.g. "IC", "HL".
    pub train_type: String,
    /// Category name as sent by the feed, e.g. "Long-distance".
    pub category: String,
    pub operator_code: String,
    /// The train's full timetable, in feed order.
    pub timetable_rows: Vec<RawTimetableRow>,
}
