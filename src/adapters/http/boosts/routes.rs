//! Axum router configuration for boost endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_boosts, get_click_boosts, get_discord_hyper_mode};
use crate::adapters::http::state::AppState;

/// Boost routes, mounted at the root.
///
/// # Routes
/// - `GET /boosts`
/// - `GET /boosts/clicks`
/// - `GET /discord/hypermode`
pub fn boost_routes() -> Router<AppState> {
    Router::new()
        .route("/boosts", get(get_boosts))
        .route("/boosts/clicks", get(get_click_boosts))
        .route("/discord/hypermode", get(get_discord_hyper_mode))
}
