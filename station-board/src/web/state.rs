//! Application state for the web layer.

use std::sync::Arc;

use crate::board::BoardConfig;
use crate::cache::CachedTimetable;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached timetable source
    pub timetable: Arc<CachedTimetable>,

    /// Stations users can pick from
    pub stations: StationDirectory,

    /// Which trains boards show
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: CachedTimetable, stations: StationDirectory, config: BoardConfig) -> Self {
        Self {
            timetable: Arc::new(timetable),
            stations,
            config: Arc::new(config),
        }
    }
}
