//! Wishforge badge reader port.

use async_trait::async_trait;

use crate::domain::boosts::WishforgeBadge;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait BadgeReader: Send + Sync {
    async fn badges_for(&self, user_id: &UserId) -> Result<Vec<WishforgeBadge>, DomainError>;
}
