//! HTTP handlers for shortlink endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{DecodeShortLinkQuery, EncodeShortLinkQuery};

use super::dto::{ShortLinkParams, ShortLinkResult};

/// GET /shortlinks/encode?key=<id>
pub async fn encode_shortlink(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ShortLinkParams>,
) -> Result<impl IntoResponse, ApiError> {
    let id = params.id().ok_or_else(ApiError::invalid_request)?;

    let link = state
        .encode_shortlink_handler()
        .handle(EncodeShortLinkQuery {
            requester: user.id,
            id,
        })
        .await?;

    Ok(Json(ShortLinkResult {
        result: link.to_string(),
    }))
}

/// GET /shortlinks/decode?key=<shortlink>
pub async fn decode_shortlink(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ShortLinkParams>,
) -> Result<impl IntoResponse, ApiError> {
    let shortlink = params.key().ok_or_else(ApiError::invalid_request)?;

    let id = state
        .decode_shortlink_handler()
        .handle(DecodeShortLinkQuery {
            requester: user.id,
            shortlink: shortlink.to_string(),
        })
        .await?;

    Ok(Json(ShortLinkResult { result: id }))
}
