//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::{Local, Utc};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::board::{BoardRow, StationBoard};
use crate::domain::{Direction, StationCode};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(search_stations))
        .route("/stations/:code/board", get(station_board))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the station picker.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stations = state
        .stations
        .all()
        .await
        .into_iter()
        .map(StationLink::from)
        .collect();

    let html = IndexTemplate { stations }
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html))
}

/// Search stations by name or code.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let stations = state
        .stations
        .search(&req.q, limit)
        .await
        .into_iter()
        .map(StationResult::from)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Arriving and departing trains for a station.
async fn station_board(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let station = StationCode::parse_normalized(&code).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station code: {}", code),
    })?;

    let station_name = state
        .stations
        .get(&station)
        .await
        .map(|s| s.name)
        .unwrap_or_else(|| station.to_string());

    // Captured once so both directions agree on what "upcoming" means
    let reference_time = Utc::now();

    let config = &state.config;
    let trains = state
        .timetable
        .live_trains(&station, config.arrival_window, config.departure_window)
        .await
        .map_err(|e| {
            warn!(station = %station, error = %e, "live trains fetch failed");
            AppError::NoData {
                station: station_name.clone(),
            }
        })?;

    let board = StationBoard::build(&trains, &station, reference_time, config);

    if accepts_html(&headers) {
        let tables = Direction::ALL
            .into_iter()
            .map(|direction| BoardTable {
                heading: table_heading(direction),
                rows: BoardRow::from_records(board.records(direction), &Local),
            })
            .collect();

        let template = BoardTemplate {
            station_name,
            tables,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(BoardResponse::from_board(&board, station_name, &Local)).into_response())
    }
}

fn table_heading(direction: Direction) -> &'static str {
    match direction {
        Direction::Arrival => "Arriving",
        Direction::Departure => "Departing",
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    /// The timetable source couldn't provide trains for a station
    NoData { station: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NoData { station } => (
                StatusCode::BAD_GATEWAY,
                format!("No data for station {}", station),
            ),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
