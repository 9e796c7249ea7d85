//! GetDiscordHyperModeHandler - hyper mode lookup by linked Discord account.

use std::sync::Arc;

use crate::domain::boosts::BoostError;
use crate::domain::foundation::{DiscordId, Timestamp};
use crate::ports::UserReader;

#[derive(Debug, Clone)]
pub struct GetDiscordHyperModeQuery {
    pub discord_id: DiscordId,
}

pub struct GetDiscordHyperModeHandler {
    users: Arc<dyn UserReader>,
}

impl GetDiscordHyperModeHandler {
    pub fn new(users: Arc<dyn UserReader>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetDiscordHyperModeQuery) -> Result<bool, BoostError> {
        let standing = self
            .users
            .find_standing_by_discord(&query.discord_id)
            .await?
            .ok_or_else(BoostError::user_not_found)?;

        Ok(standing.has_hyper_mode(&Timestamp::now()))
    }
}
