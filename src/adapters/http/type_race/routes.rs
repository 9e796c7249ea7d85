//! Axum router configuration for type race endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_rotation, get_team};
use crate::adapters::http::state::AppState;

/// Type race routes, suitable for nesting at `/typerace`.
pub fn type_race_routes() -> Router<AppState> {
    Router::new()
        .route("/rotation", get(get_rotation))
        .route("/team", get(get_team))
}
