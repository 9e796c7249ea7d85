//! HTTP handlers for the current user.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::GetMeQuery;

/// GET /me
pub async fn get_me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .me_handler()
        .handle(GetMeQuery { user_id: user.id })
        .await?;

    Ok(Json(profile))
}
