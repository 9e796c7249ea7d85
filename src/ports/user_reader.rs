//! User reader port.
//!
//! Read-only access to the `users` table in the shapes the handlers need.
//! Every method returns `Ok(None)` when no row matches; only infrastructure
//! failures are errors.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::boosts::{ClickProfile, UserStanding};
use crate::domain::foundation::{DiscordId, DomainError, UserId};

/// Reader port for user rows.
#[async_trait]
pub trait UserReader: Send + Sync {
    /// Staff level and `ultimate` expiry for a user.
    async fn find_standing(&self, user_id: &UserId) -> Result<Option<UserStanding>, DomainError>;

    /// Same as [`find_standing`](Self::find_standing), keyed by linked Discord account.
    async fn find_standing_by_discord(
        &self,
        discord_id: &DiscordId,
    ) -> Result<Option<UserStanding>, DomainError>;

    /// Columns needed for click-game boosts.
    async fn find_click_profile(&self, user_id: &UserId)
        -> Result<Option<ClickProfile>, DomainError>;

    /// Public profile for `/me`.
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;
}

/// Public profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub displayname: Option<String>,
    pub staff: i32,
}

impl UserProfile {
    pub fn is_staff(&self) -> bool {
        self.staff > 0
    }
}
