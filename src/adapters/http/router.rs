//! Top-level router assembly.

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};

use super::boosts::boost_routes;
use super::me::me_routes;
use super::middleware::auth_middleware;
use super::pokemon::pokemon_routes;
use super::shortlinks::shortlink_routes;
use super::state::AppState;
use super::type_race::type_race_routes;

/// Builds the full API router.
///
/// Session-protected routes sit behind `auth_middleware`; the health routes
/// and the IV lookup are public and never inspect the `Authorization` header.
pub fn api_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(me_routes())
        .merge(boost_routes())
        .nest("/typerace", type_race_routes())
        .nest("/shortlinks", shortlink_routes())
        .layer(middleware::from_fn_with_state(
            state.session_validator.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/pokemon", pokemon_routes())
        .merge(protected)
        .with_state(state)
}

async fn root() -> &'static str {
    "Hello!"
}

async fn health() -> Json<Value> {
    Json(json!({ "message": "ok" }))
}
