//! Error mapping from application errors to HTTP responses.
//!
//! # Status Mapping
//!
//! | ErrorCode | HTTP Status |
//! |-----------|-------------|
//! | ValidationFailed, EncodingOverflow, InvalidSymbol | 400 |
//! | Unauthorized | 401 |
//! | Forbidden | 403 |
//! | UserNotFound, PokemonNotFound | 404 |
//! | DatabaseError, UpstreamUnavailable, InternalError | 500 |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::handlers::IvLookupError;
use crate::domain::boosts::BoostError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Builds an error whose status follows from its code.
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(status_for(code), code, message)
    }

    /// 400 for a missing or malformed query parameter.
    pub fn invalid_request() -> Self {
        Self::from_code(ErrorCode::ValidationFailed, "Invalid request")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::EncodingOverflow | ErrorCode::InvalidSymbol => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::UserNotFound | ErrorCode::PokemonNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DatabaseError | ErrorCode::UpstreamUnavailable | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::from_code(err.code, err.message)
    }
}

impl From<BoostError> for ApiError {
    fn from(err: BoostError) -> Self {
        Self::from_code(err.code(), err.message())
    }
}

impl From<IvLookupError> for ApiError {
    fn from(err: IvLookupError) -> Self {
        match err {
            IvLookupError::Infrastructure(_) => Self::from_code(err.code(), err.message()),
            // Every client-side IV failure is reported as not found.
            _ => Self::new(StatusCode::NOT_FOUND, err.code(), err.message()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code.is_infrastructure() {
            tracing::error!(code = %self.code, "Request failed: {}", self.message);
        }
        let body = ErrorResponse::new(self.code.to_string(), self.message);
        (self.status, Json(body)).into_response()
    }
}
