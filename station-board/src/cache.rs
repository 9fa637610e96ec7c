//! Caching layer for live-trains responses.
//!
//! A board is rebuilt on every request, but the trains behind it only change
//! when the upstream data does. Caching the raw train list for a short TTL
//! keeps repeated views of a busy station from hitting the API, while the
//! reference time is still taken fresh per request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::digitraffic::{DigitrafficError, TimetableSource};
use crate::domain::{RawTrain, StationCode};

/// Cache key: (station, arriving window, departing window).
type TrainsKey = (StationCode, u16, u16);

/// Cached live-trains entry.
type TrainsEntry = Arc<Vec<RawTrain>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 500,
        }
    }
}

/// Timetable source with caching.
///
/// Wraps a `TimetableSource` and caches live-trains responses.
pub struct CachedTimetable {
    source: TimetableSource,
    trains: MokaCache<TrainsKey, TrainsEntry>,
}

impl CachedTimetable {
    /// Create a new cached source.
    pub fn new(source: TimetableSource, config: &CacheConfig) -> Self {
        let trains = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { source, trains }
    }

    /// Get the live trains for a station, using the cache if available.
    ///
    /// Failed fetches are not cached.
    pub async fn live_trains(
        &self,
        station: &StationCode,
        arriving: u16,
        departing: u16,
    ) -> Result<TrainsEntry, DigitrafficError> {
        let key = (station.clone(), arriving, departing);

        if let Some(cached) = self.trains.get(&key).await {
            debug!(station = %station, "live trains cache hit");
            return Ok(cached);
        }

        let trains = self
            .source
            .fetch_live_trains(station, arriving, departing)
            .await?;
        let entry = Arc::new(trains);

        self.trains.insert(key, entry.clone()).await;
        debug!(
            station = %station,
            entries = self.entry_count(),
            "cached live trains"
        );

        Ok(entry)
    }

    /// Number of cached train lists.
    pub fn entry_count(&self) -> u64 {
        self.trains.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.trains.invalidate_all();
    }
}
