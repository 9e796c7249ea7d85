//! Axum router configuration for shortlink endpoints.

use axum::{routing::get, Router};

use super::handlers::{decode_shortlink, encode_shortlink};
use crate::adapters::http::state::AppState;

/// Shortlink routes, suitable for nesting at `/shortlinks`.
pub fn shortlink_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", get(encode_shortlink))
        .route("/decode", get(decode_shortlink))
}
