//! GetTeamHandler - the user's type war assignment for this month.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::TypeWarReader;

#[derive(Debug, Clone)]
pub struct GetTeamQuery {
    pub user_id: UserId,
}

pub struct GetTeamHandler {
    type_war: Arc<dyn TypeWarReader>,
}

impl GetTeamHandler {
    pub fn new(type_war: Arc<dyn TypeWarReader>) -> Self {
        Self { type_war }
    }

    /// Returns `None` when the user has not joined this month.
    pub async fn handle(&self, query: GetTeamQuery) -> Result<Option<String>, DomainError> {
        let month_start = Timestamp::now().month_start();
        self.type_war.current_team(&query.user_id, month_start).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockTypeWar;

    #[tokio::test]
    async fn returns_current_month_assignment() {
        let user = UserId::new(3);
        let mut type_war = MockTypeWar::default();
        type_war
            .teams
            .insert((user, Timestamp::now().month_start()), "ice".to_string());
        let handler = GetTeamHandler::new(Arc::new(type_war));

        let team = handler.handle(GetTeamQuery { user_id: user }).await.unwrap();

        assert_eq!(team.as_deref(), Some("ice"));
    }

    #[tokio::test]
    async fn returns_none_without_assignment() {
        let handler = GetTeamHandler::new(Arc::new(MockTypeWar::default()));

        let team = handler
            .handle(GetTeamQuery {
                user_id: UserId::new(3),
            })
            .await
            .unwrap();

        assert!(team.is_none());
    }
}
