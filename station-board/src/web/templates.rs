//! Askama templates for the web frontend.

use askama::Template;

use crate::board::BoardRow;
use crate::domain::Station;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: the station list with a search box.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationLink>,
}

/// A station's arriving and departing trains.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub station_name: String,
    pub tables: Vec<BoardTable>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A station entry in the picker.
#[derive(Debug, Clone)]
pub struct StationLink {
    pub code: String,
    pub name: String,
}

impl From<Station> for StationLink {
    fn from(station: Station) -> Self {
        Self {
            code: station.code.to_string(),
            name: station.name,
        }
    }
}

/// One of the two tables on a board page.
#[derive(Debug, Clone)]
pub struct BoardTable {
    /// "Arriving" or "Departing"
    pub heading: &'static str,
    pub rows: Vec<BoardRow>,
}
