//! Boost-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UserNotFound | 401 on `/boosts`, 404 elsewhere |
//! | UpstreamUnavailable | 500 |

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while assembling a boost snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoostError {
    /// The user row itself is missing; no snapshot can be built.
    UserNotFound,

    /// A data source read failed.
    UpstreamUnavailable(String),
}

impl BoostError {
    pub fn user_not_found() -> Self {
        BoostError::UserNotFound
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        BoostError::UpstreamUnavailable(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BoostError::UserNotFound => ErrorCode::UserNotFound,
            BoostError::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            BoostError::UserNotFound => "No such user".to_string(),
            BoostError::UpstreamUnavailable(msg) => msg.clone(),
        }
    }

    /// No retries happen internally; callers may retry upstream failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BoostError::UpstreamUnavailable(_))
    }
}

impl std::fmt::Display for BoostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BoostError {}

impl From<DomainError> for BoostError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UserNotFound => BoostError::UserNotFound,
            _ => BoostError::UpstreamUnavailable(err.message),
        }
    }
}

impl From<BoostError> for DomainError {
    fn from(err: BoostError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
