//! GetRotationHandler - the user's type rotation for the current epoch.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::type_race::{RotationEpoch, TypeRotation};
use crate::ports::TypeWarReader;

#[derive(Debug, Clone)]
pub struct GetRotationQuery {
    pub user_id: UserId,
}

/// Computes the rotation and marks this month's type war assignment.
pub struct GetRotationHandler {
    type_war: Arc<dyn TypeWarReader>,
}

impl GetRotationHandler {
    pub fn new(type_war: Arc<dyn TypeWarReader>) -> Self {
        Self { type_war }
    }

    pub async fn handle(&self, query: GetRotationQuery) -> Result<Vec<String>, DomainError> {
        self.handle_at(query, Timestamp::now()).await
    }

    #[instrument(skip(self, query), fields(user_id = %query.user_id))]
    pub async fn handle_at(
        &self,
        query: GetRotationQuery,
        now: Timestamp,
    ) -> Result<Vec<String>, DomainError> {
        let epoch = RotationEpoch::from_timestamp(&now);
        let active = self
            .type_war
            .current_team(&query.user_id, now.month_start())
            .await?;

        tracing::debug!("Rotation epoch {} for user {}", epoch, query.user_id);

        Ok(TypeRotation::for_user(query.user_id, epoch).mark_active(active.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockTypeWar;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn october_2026() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn marks_assigned_type_in_current_epoch_rotation() {
        let user = UserId::new(100);
        let mut type_war = MockTypeWar::default();
        type_war.teams.insert(
            (user, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()),
            "steel".to_string(),
        );
        let handler = GetRotationHandler::new(Arc::new(type_war));

        let rotation = handler
            .handle_at(GetRotationQuery { user_id: user }, october_2026())
            .await
            .unwrap();

        // October 2026 lies in epoch 3
        assert_eq!(rotation[0], "flying");
        assert_eq!(rotation[1], "electric");
        assert_eq!(rotation[2], "steel [active]");
        assert_eq!(rotation.len(), 18);
    }

    #[tokio::test]
    async fn unassigned_user_gets_plain_rotation() {
        let handler = GetRotationHandler::new(Arc::new(MockTypeWar::default()));

        let rotation = handler
            .handle_at(
                GetRotationQuery {
                    user_id: UserId::new(100),
                },
                october_2026(),
            )
            .await
            .unwrap();

        assert!(rotation.iter().all(|t| !t.ends_with("[active]")));
    }
}
