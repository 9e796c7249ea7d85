//! Domain error type shared by every read path.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Stable machine-readable codes; HTTP status mapping lives in the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    EncodingOverflow,
    InvalidSymbol,

    UserNotFound,
    PokemonNotFound,

    Unauthorized,
    Forbidden,

    DatabaseError,
    UpstreamUnavailable,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EncodingOverflow => "ENCODING_OVERFLOW",
            ErrorCode::InvalidSymbol => "INVALID_SYMBOL",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::PokemonNotFound => "POKEMON_NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Codes that mean the backing store failed rather than the request.
    pub fn is_infrastructure(self) -> bool {
        matches!(
            self,
            ErrorCode::DatabaseError | ErrorCode::UpstreamUnavailable | ErrorCode::InternalError
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coded failure with a human-readable message and optional context.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    /// Extra context for logs; never sent to clients.
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn user_not_found() -> Self {
        Self::new(ErrorCode::UserNotFound, "User not found")
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
