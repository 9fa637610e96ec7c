//! Disk cache for the station list.
//!
//! The station list changes rarely, so a copy on disk lets the server start
//! even when the API is briefly unreachable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::digitraffic::StationDto;

use super::error::StationError;

/// Default cache TTL: 24 hours.
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Station list as written to disk.
#[derive(Debug, Serialize, Deserialize)]
struct CachedStations {
    /// Unix timestamp (seconds) when the list was fetched.
    fetched_at: i64,
    stations: Vec<StationDto>,
}

/// Configuration for the station disk cache.
#[derive(Debug, Clone)]
pub struct StationCacheConfig {
    /// Path to the cache file.
    pub path: PathBuf,
    /// How long a cached list stays usable.
    pub ttl: Duration,
}

impl StationCacheConfig {
    /// Create a new cache config with the given path and default TTL (24 hours).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl Default for StationCacheConfig {
    fn default() -> Self {
        Self::new("stations_cache.json")
    }
}

/// Disk cache for the station list.
#[derive(Debug, Clone)]
pub struct StationCache {
    config: StationCacheConfig,
}

impl StationCache {
    pub fn new(config: StationCacheConfig) -> Self {
        Self { config }
    }

    /// Load the cached list if it exists, parses, and is younger than the TTL
    /// at `now`.
    pub fn load_at(&self, now: DateTime<Utc>) -> Option<Vec<StationDto>> {
        let contents = std::fs::read_to_string(&self.config.path).ok()?;
        let cached: CachedStations = serde_json::from_str(&contents).ok()?;

        let age_secs = now.timestamp().saturating_sub(cached.fetched_at);
        let ttl_secs = i64::try_from(self.config.ttl.as_secs()).unwrap_or(i64::MAX);
        if age_secs < 0 || age_secs >= ttl_secs {
            return None;
        }

        Some(cached.stations)
    }

    /// Load the cached list as of the current time.
    pub fn load(&self) -> Option<Vec<StationDto>> {
        self.load_at(Utc::now())
    }

    /// Save a freshly fetched list, stamped with `fetched_at`.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(
        &self,
        stations: &[StationDto],
        fetched_at: DateTime<Utc>,
    ) -> Result<(), StationError> {
        let cached = CachedStations {
            fetched_at: fetched_at.timestamp(),
            stations: stations.to_vec(),
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StationError::Cache {
                message: format!("failed to create cache directory: {}", e),
            })?;
        }

        let json = serde_json::to_string(&cached).map_err(|e| StationError::Cache {
            message: format!("failed to serialize cache: {}", e),
        })?;

        std::fs::write(&self.config.path, json).map_err(|e| StationError::Cache {
            message: format!("failed to write cache file: {}", e),
        })
    }

    /// Get the cache file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}
