//! Station list and search.
//!
//! Provides the passenger stations a user can pick a board for, fetched
//! from the timetable source at startup, cached on disk, and refreshed
//! daily.

mod cache;
mod directory;
mod error;

pub use cache::{StationCache, StationCacheConfig};
pub use directory::{StationDirectory, search_stations};
pub use error::StationError;
