//! Staff-only shortlink conversion handlers.

mod decode_shortlink;
mod encode_shortlink;

pub use decode_shortlink::{DecodeShortLinkHandler, DecodeShortLinkQuery};
pub use encode_shortlink::{EncodeShortLinkHandler, EncodeShortLinkQuery};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserReader;

/// Fails with `Forbidden` unless the user exists and has a staff level.
async fn ensure_staff(users: &dyn UserReader, user_id: &UserId) -> Result<(), DomainError> {
    let is_staff = users
        .find_standing(user_id)
        .await?
        .map(|standing| standing.staff > 0)
        .unwrap_or(false);

    if is_staff {
        Ok(())
    } else {
        tracing::warn!("Non-staff user {} attempted shortlink access", user_id);
        Err(DomainError::new(ErrorCode::Forbidden, "Unauthorized"))
    }
}
