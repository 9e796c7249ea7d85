//! HTTP handlers for boost endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    GetBoostsQuery, GetClickBoostsQuery, GetDiscordHyperModeQuery,
};
use crate::domain::boosts::BoostError;
use crate::domain::foundation::ErrorCode;

use super::dto::{DiscordHyperModeParams, HyperModeResponse};

/// GET /boosts - Boost snapshot for the authenticated user
pub async fn get_boosts(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.boosts_handler();
    let query = GetBoostsQuery { user_id: user.id };

    // A token for a deleted account is an authentication problem here.
    let snapshot = handler.handle(query).await.map_err(|e| match e {
        BoostError::UserNotFound => {
            ApiError::new(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, e.message())
        }
        other => other.into(),
    })?;

    Ok(Json(snapshot))
}

/// GET /boosts/clicks - Click-game boosts for the authenticated user
pub async fn get_click_boosts(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.click_boosts_handler();
    let result = handler
        .handle(GetClickBoostsQuery { user_id: user.id })
        .await?;

    Ok(Json(result))
}

/// GET /discord/hypermode?id=<discord id>
pub async fn get_discord_hyper_mode(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<DiscordHyperModeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let discord_id = params.discord_id().ok_or_else(ApiError::invalid_request)?;

    let handler = state.discord_hyper_mode_handler();
    let hypermode = handler
        .handle(GetDiscordHyperModeQuery { discord_id })
        .await
        .map_err(|e| match e {
            BoostError::UserNotFound => ApiError::from_code(ErrorCode::UserNotFound, "User not found"),
            other => other.into(),
        })?;

    Ok(Json(HyperModeResponse { hypermode }))
}
