use std::net::SocketAddr;
use std::time::Duration;

use station_board::board::BoardConfig;
use station_board::cache::{CacheConfig, CachedTimetable};
use station_board::digitraffic::{
    DigitrafficClient, DigitrafficConfig, MockDigitrafficClient, TimetableSource,
};
use station_board::stations::{StationCache, StationCacheConfig, StationDirectory};
use station_board::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How often to refresh the station list (24 hours).
const STATION_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("STATION_BOARD_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("STATION_BOARD_ADDR is not a socket address");
    let static_dir =
        std::env::var("STATION_BOARD_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let source: TimetableSource = match std::env::var("STATION_BOARD_MOCK_DIR") {
        Ok(dir) => {
            let mock = MockDigitrafficClient::new(&dir).expect("Failed to load mock data");
            info!(%dir, stations = ?mock.available_stations(), "using mock data");
            mock.into()
        }
        Err(_) => {
            let user = std::env::var("DIGITRAFFIC_USER").unwrap_or_else(|_| {
                warn!("DIGITRAFFIC_USER not set, identifying as station-board");
                "station-board".to_string()
            });
            DigitrafficClient::new(DigitrafficConfig::new(user))
                .expect("Failed to create Digitraffic client")
                .into()
        }
    };

    let timetable = CachedTimetable::new(source.clone(), &CacheConfig::default());

    // Fail fast if there is no station list to offer
    info!("fetching station list");
    let station_cache = StationCache::new(StationCacheConfig::default());
    let stations = StationDirectory::load(source, Some(station_cache))
        .await
        .expect("Failed to load station list");

    // Spawn background task to refresh the station list daily
    let stations_refresh = stations.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATION_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match stations_refresh.refresh().await {
                Ok(count) => info!(count, "refreshed station list"),
                Err(e) => warn!(error = %e, "failed to refresh station list"),
            }
        }
    });

    let state = AppState::new(timetable, stations, BoardConfig::default());
    let app = create_router(state, &static_dir);

    info!("station board listening on http://{addr}");
    info!("  GET  /health                - Health check");
    info!("  GET  /api/stations?q=       - Search stations");
    info!("  GET  /stations/:code/board  - Arrivals and departures");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
