//! HTTP handlers for Pokémon endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::GetPokemonIvQuery;

use super::dto::IvParams;

/// GET /pokemon/iv?id=<shortlink>
pub async fn get_pokemon_iv(
    State(state): State<AppState>,
    Query(params): Query<IvParams>,
) -> Result<impl IntoResponse, ApiError> {
    let lookup = state
        .pokemon_iv_handler()
        .handle(GetPokemonIvQuery {
            shortlink: params.id,
        })
        .await?;

    Ok(Json(lookup))
}
