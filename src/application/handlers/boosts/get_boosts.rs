//! GetBoostsHandler - Query handler for a user's boost snapshot.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::boosts::{
    BoostAggregator, BoostError, BoostFacts, BoostSnapshot, COBALT_AMULET_ITEM, GOLD_AMULET_ITEM,
    SILVER_AMULET_ITEM,
};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{BoostFactReader, ForecastReader, TypeWarReader, UserReader};

const AMULET_ITEMS: [u32; 3] = [SILVER_AMULET_ITEM, GOLD_AMULET_ITEM, COBALT_AMULET_ITEM];

#[derive(Debug, Clone)]
pub struct GetBoostsQuery {
    pub user_id: UserId,
}

/// Reads every boost fact concurrently and aggregates them.
pub struct GetBoostsHandler {
    users: Arc<dyn UserReader>,
    facts: Arc<dyn BoostFactReader>,
    type_war: Arc<dyn TypeWarReader>,
    forecasts: Arc<dyn ForecastReader>,
}

impl GetBoostsHandler {
    pub fn new(
        users: Arc<dyn UserReader>,
        facts: Arc<dyn BoostFactReader>,
        type_war: Arc<dyn TypeWarReader>,
        forecasts: Arc<dyn ForecastReader>,
    ) -> Self {
        Self {
            users,
            facts,
            type_war,
            forecasts,
        }
    }

    pub async fn handle(&self, query: GetBoostsQuery) -> Result<BoostSnapshot, BoostError> {
        self.handle_at(query, Timestamp::now()).await
    }

    /// Aggregates against a fixed `now`. Every read keyed by date uses the
    /// UTC calendar of this same instant.
    #[instrument(skip(self, query), fields(user_id = %query.user_id))]
    pub async fn handle_at(
        &self,
        query: GetBoostsQuery,
        now: Timestamp,
    ) -> Result<BoostSnapshot, BoostError> {
        let user_id = query.user_id;
        let today = now.utc_date();

        let (standing, amulets, radar, type_war, albino_hunt, daily_bonus, potd_forecast) =
            tokio::try_join!(
                self.users.find_standing(&user_id),
                self.facts.amulets(&user_id, &AMULET_ITEMS),
                self.facts.radar_chain(&user_id),
                self.type_war.current_team(&user_id, now.month_start()),
                self.facts.albino_hunt(&user_id),
                self.facts.daily_bonus(),
                self.forecasts.potd(today),
            )
            .map_err(|e| {
                tracing::error!("Boost fact read failed: {}", e);
                BoostError::from(e)
            })?;

        if radar.is_none() {
            tracing::debug!("No radar chain for user {}", user_id);
        }

        BoostAggregator::aggregate(
            &now,
            BoostFacts {
                standing,
                amulets,
                radar,
                type_war,
                albino_hunt,
                daily_bonus,
                potd_forecast,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        MockBoostFacts, MockForecasts, MockTypeWar, MockUsers,
    };
    use crate::domain::boosts::{ItemQuantity, RadarChain, UserStanding};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn now() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap())
    }

    fn user() -> UserId {
        UserId::new(100)
    }

    fn radar() -> RadarChain {
        RadarChain {
            shiny_charm: Some(now().add_days(1)),
            forme_id: "130".to_string(),
            chain: 12,
            uber_charm: None,
            name: "Gyarados".to_string(),
            forme_name: None,
            type1: "water".to_string(),
            type2: Some("flying".to_string()),
        }
    }

    fn handler(
        users: MockUsers,
        facts: MockBoostFacts,
        type_war: Arc<MockTypeWar>,
        forecasts: MockForecasts,
    ) -> GetBoostsHandler {
        GetBoostsHandler::new(
            Arc::new(users),
            Arc::new(facts),
            type_war,
            Arc::new(forecasts),
        )
    }

    #[tokio::test]
    async fn aggregates_facts_from_every_reader() {
        let october = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let mut type_war = MockTypeWar::default();
        type_war.teams.insert((user(), october), "flying".to_string());
        let mut forecasts = MockForecasts::default();
        forecasts.potd.insert(today, "130".to_string());

        let handler = handler(
            MockUsers::with_standing(user(), UserStanding::new(0, Some(now().add_days(3)))),
            MockBoostFacts {
                amulets: vec![ItemQuantity::new(GOLD_AMULET_ITEM, 1)],
                radar: Some(radar()),
                ..Default::default()
            },
            Arc::new(type_war),
            forecasts,
        );

        let snapshot = handler
            .handle_at(GetBoostsQuery { user_id: user() }, now())
            .await
            .unwrap();

        assert!(snapshot.hyper_mode);
        assert!(snapshot.gold_amulet);
        assert!(!snapshot.silver_amulet);
        assert!(snapshot.shiny_charm);
        assert_eq!(snapshot.shiny_chain_name, "Gyarados");
        assert!(snapshot.type_race);
        assert!(snapshot.potd);
    }

    #[tokio::test]
    async fn type_war_is_keyed_by_first_of_month() {
        let type_war = Arc::new(MockTypeWar::default());
        let handler = handler(
            MockUsers::with_standing(user(), UserStanding::new(0, None)),
            MockBoostFacts::default(),
            type_war.clone(),
            MockForecasts::default(),
        );

        handler
            .handle_at(GetBoostsQuery { user_id: user() }, now())
            .await
            .unwrap();

        let requested = type_war.requested.lock().unwrap().clone();
        assert_eq!(requested, vec![NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()]);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = handler(
            MockUsers::default(),
            MockBoostFacts::default(),
            Arc::new(MockTypeWar::default()),
            MockForecasts::default(),
        );

        let result = handler.handle_at(GetBoostsQuery { user_id: user() }, now()).await;

        assert_eq!(result, Err(BoostError::UserNotFound));
    }

    #[tokio::test]
    async fn new_user_gets_empty_snapshot() {
        let handler = handler(
            MockUsers::with_standing(user(), UserStanding::new(0, None)),
            MockBoostFacts::default(),
            Arc::new(MockTypeWar::default()),
            MockForecasts::default(),
        );

        let snapshot = handler
            .handle_at(GetBoostsQuery { user_id: user() }, now())
            .await
            .unwrap();

        assert_eq!(snapshot, BoostSnapshot::default());
    }

    #[tokio::test]
    async fn read_failure_surfaces_as_upstream_unavailable() {
        let handler = handler(
            MockUsers::with_standing(user(), UserStanding::new(0, None)),
            MockBoostFacts {
                fail: true,
                ..Default::default()
            },
            Arc::new(MockTypeWar::default()),
            MockForecasts::default(),
        );

        let result = handler.handle_at(GetBoostsQuery { user_id: user() }, now()).await;

        assert!(matches!(result, Err(BoostError::UpstreamUnavailable(_))));
    }
}
