//! HTTP handlers for type race endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetRotationQuery, GetTeamQuery};

use super::dto::{RotationResponse, TeamResponse};

/// GET /typerace/rotation
pub async fn get_rotation(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let rotation = state
        .rotation_handler()
        .handle(GetRotationQuery { user_id: user.id })
        .await?;

    Ok(Json(RotationResponse { rotation }))
}

/// GET /typerace/team
pub async fn get_team(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let team = state
        .team_handler()
        .handle(GetTeamQuery { user_id: user.id })
        .await?;

    Ok(Json(team.map(|team_type| TeamResponse { team_type })))
}
