//! Web layer for the station board.
//!
//! Provides HTTP endpoints for picking a station and viewing its board.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
