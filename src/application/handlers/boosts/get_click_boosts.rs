//! GetClickBoostsHandler - Query handler for click-game boosts.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use crate::domain::boosts::{BoostError, ClickBoosts, WishforgeBadge};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{BadgeReader, ForecastReader, UserReader};

#[derive(Debug, Clone)]
pub struct GetClickBoostsQuery {
    pub user_id: UserId,
}

/// Click boosts together with the user's badges and today's V-Wave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickBoostsResult {
    pub boosts: ClickBoosts,
    pub badges: Vec<WishforgeBadge>,
    pub vwave: Option<String>,
}

pub struct GetClickBoostsHandler {
    users: Arc<dyn UserReader>,
    badges: Arc<dyn BadgeReader>,
    forecasts: Arc<dyn ForecastReader>,
}

impl GetClickBoostsHandler {
    pub fn new(
        users: Arc<dyn UserReader>,
        badges: Arc<dyn BadgeReader>,
        forecasts: Arc<dyn ForecastReader>,
    ) -> Self {
        Self {
            users,
            badges,
            forecasts,
        }
    }

    pub async fn handle(&self, query: GetClickBoostsQuery) -> Result<ClickBoostsResult, BoostError> {
        self.handle_at(query, Timestamp::now()).await
    }

    #[instrument(skip(self, query), fields(user_id = %query.user_id))]
    pub async fn handle_at(
        &self,
        query: GetClickBoostsQuery,
        now: Timestamp,
    ) -> Result<ClickBoostsResult, BoostError> {
        let (profile, badges, vwave) = tokio::try_join!(
            self.users.find_click_profile(&query.user_id),
            self.badges.badges_for(&query.user_id),
            self.forecasts.vwave(now.utc_date()),
        )?;

        let profile = profile.ok_or_else(BoostError::user_not_found)?;

        Ok(ClickBoostsResult {
            boosts: ClickBoosts::derive(&profile, &now),
            badges,
            vwave,
        })
    }
}
