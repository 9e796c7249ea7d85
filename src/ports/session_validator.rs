//! Session token verification.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns a bearer token into the user it was issued to.
///
/// The HTTP layer strips any `Bearer ` prefix before calling. Implementations
/// report a bad signature or malformed claims as `InvalidToken` and a past
/// `exp` as `TokenExpired`. `ServiceUnavailable` is reserved for failures
/// unrelated to the token itself.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
