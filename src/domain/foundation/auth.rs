//! Identity carried by a verified session token.

use thiserror::Error;

use super::UserId;

/// The caller behind a request, as asserted by the session token.
///
/// Existence of the user row is not implied; handlers look the id up and
/// decide what a missing user means for their route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    /// Login name, if the token includes one
    pub name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, name: Option<String>) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// The validator itself is broken, not the token.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// True when the client's token is at fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AuthError::ServiceUnavailable(_))
    }
}
