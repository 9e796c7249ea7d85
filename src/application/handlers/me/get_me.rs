//! GetMeHandler - public profile of the authenticated user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{UserProfile, UserReader};

#[derive(Debug, Clone)]
pub struct GetMeQuery {
    pub user_id: UserId,
}

pub struct GetMeHandler {
    users: Arc<dyn UserReader>,
}

impl GetMeHandler {
    pub fn new(users: Arc<dyn UserReader>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetMeQuery) -> Result<UserProfile, DomainError> {
        self.users
            .find_profile(&query.user_id)
            .await?
            .ok_or_else(DomainError::user_not_found)
    }
}
