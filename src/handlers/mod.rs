//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod boards;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/boards", boards::routes())
}
