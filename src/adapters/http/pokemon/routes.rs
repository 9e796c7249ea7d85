//! Axum router configuration for Pokémon endpoints.

use axum::{routing::get, Router};

use super::handlers::get_pokemon_iv;
use crate::adapters::http::state::AppState;

/// Pokémon routes, suitable for nesting at `/pokemon`.
pub fn pokemon_routes() -> Router<AppState> {
    Router::new().route("/iv", get(get_pokemon_iv))
}
