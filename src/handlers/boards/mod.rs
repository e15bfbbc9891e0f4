//! Board management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Board routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Board lifecycle
        .route("/", get(handler::list_boards))
        .route("/", post(handler::load_board))
        .route("/{id}", get(handler::get_board))
        .route("/{id}", delete(handler::discard_board))
        // Standings reads
        .route("/{id}/standings", get(handler::get_standings))
        .route(
            "/{id}/teams/{team_id}/problems/{problem_id}",
            get(handler::get_problem_display),
        )
        // Reveal ceremony
        .route("/{id}/advance", post(handler::advance_reveal))
}
