//! Axum router configuration for the current user.

use axum::{routing::get, Router};

use super::handlers::get_me;
use crate::adapters::http::state::AppState;

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}
