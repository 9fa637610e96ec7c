//! The list of stations users can pick from.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::digitraffic::{StationDto, TimetableSource, passenger_stations};
use crate::domain::{Station, StationCode};

use super::cache::StationCache;
use super::error::StationError;

/// Thread-safe list of passenger stations.
///
/// Loaded once at startup and refreshed in the background.
#[derive(Clone)]
pub struct StationDirectory {
    inner: Arc<RwLock<Vec<Station>>>,
    source: TimetableSource,
    cache: Option<StationCache>,
}

impl StationDirectory {
    /// Load the station list from `source`, falling back to `cache`.
    ///
    /// A successful fetch is written back to the cache. Fails only if the
    /// source is unreachable and there is no usable cached copy.
    pub async fn load(
        source: TimetableSource,
        cache: Option<StationCache>,
    ) -> Result<Self, StationError> {
        let stations = match fetch_and_store(&source, cache.as_ref()).await {
            Ok(stations) => stations,
            Err(e) => {
                let cached = cache.as_ref().and_then(StationCache::load).ok_or(e)?;
                warn!("station list fetch failed, using cached copy");
                checked(passenger_stations(&cached))?
            }
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(stations)),
            source,
            cache,
        })
    }

    /// Create a directory with a fixed station list.
    #[cfg(test)]
    pub(crate) fn from_stations(source: TimetableSource, stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(stations)),
            source,
            cache: None,
        }
    }

    /// Re-fetch the station list.
    ///
    /// On failure the current list is kept and the error returned.
    pub async fn refresh(&self) -> Result<usize, StationError> {
        let stations = fetch_and_store(&self.source, self.cache.as_ref()).await?;
        let count = stations.len();

        let mut guard = self.inner.write().await;
        *guard = stations;

        Ok(count)
    }

    /// All stations, in upstream order.
    pub async fn all(&self) -> Vec<Station> {
        self.inner.read().await.clone()
    }

    /// Look up a station by code.
    pub async fn get(&self, code: &StationCode) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.iter().find(|s| &s.code == code).cloned()
    }

    /// Stations whose name or code contains `query`, ignoring case.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Station> {
        let guard = self.inner.read().await;
        search_stations(&guard, query, limit)
    }
}

async fn fetch_and_store(
    source: &TimetableSource,
    cache: Option<&StationCache>,
) -> Result<Vec<Station>, StationError> {
    let dtos: Vec<StationDto> = source.fetch_stations().await?;
    let stations = checked(passenger_stations(&dtos))?;

    if let Some(cache) = cache
        && let Err(e) = cache.save(&dtos, Utc::now())
    {
        warn!(path = ?cache.path(), error = %e, "failed to write station cache");
    }

    info!(count = stations.len(), "loaded station list");
    Ok(stations)
}

fn checked(stations: Vec<Station>) -> Result<Vec<Station>, StationError> {
    if stations.is_empty() {
        Err(StationError::Empty)
    } else {
        Ok(stations)
    }
}

/// Case-insensitive substring search over station names and codes.
///
/// An empty query matches everything. Keeps the input order.
pub fn search_stations(stations: &[Station], query: &str, limit: usize) -> Vec<Station> {
    let needle = query.trim().to_uppercase();
    stations
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_uppercase().contains(&needle)
                || s.code.as_str().contains(&needle)
        })
        .take(limit)
        .cloned()
        .collect()
}
