//! MySQL implementation of BoostFactReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use super::{narrow, query_failed, utc};
use crate::domain::boosts::{AlbinoHunt, DailyBonus, ItemQuantity, RadarChain};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::BoostFactReader;

/// Row id of the seasonal bonus in `counters`.
const SEASONAL_BONUS_COUNTER: u32 = 8;

pub struct MySqlBoostFactReader {
    pool: MySqlPool,
}

impl MySqlBoostFactReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// Nullable numeric columns read as 0 in the conversions below.

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    item: i64,
    quantity: Option<i64>,
}

#[derive(Debug, sqlx::FromRow)]
struct RadarRow {
    shinycharm: Option<NaiveDateTime>,
    radar_id: String,
    radar_chain: Option<i64>,
    ubercharm: Option<NaiveDateTime>,
    name: String,
    formename: Option<String>,
    type1: String,
    type2: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct AlbinoHuntRow {
    level: Option<i64>,
    charged: Option<NaiveDateTime>,
    typeboost: Option<String>,
    typetimestamp: Option<NaiveDateTime>,
}

#[derive(Debug, sqlx::FromRow)]
struct CounterRow {
    bonus: Option<i64>,
    bonusday: Option<NaiveDateTime>,
}

impl TryFrom<ItemRow> for ItemQuantity {
    type Error = DomainError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(ItemQuantity::new(narrow("item", row.item)?, row.quantity.unwrap_or(0)))
    }
}

impl TryFrom<RadarRow> for RadarChain {
    type Error = DomainError;

    fn try_from(row: RadarRow) -> Result<Self, Self::Error> {
        Ok(RadarChain {
            shiny_charm: utc(row.shinycharm),
            forme_id: row.radar_id,
            chain: narrow("radar_chain", row.radar_chain.unwrap_or(0))?,
            uber_charm: utc(row.ubercharm),
            name: row.name,
            forme_name: row.formename,
            type1: row.type1,
            type2: row.type2,
        })
    }
}

impl TryFrom<AlbinoHuntRow> for AlbinoHunt {
    type Error = DomainError;

    fn try_from(row: AlbinoHuntRow) -> Result<Self, Self::Error> {
        Ok(AlbinoHunt {
            level: narrow("level", row.level.unwrap_or(0))?,
            charged: utc(row.charged),
            type_boost: row.typeboost,
            type_expires: utc(row.typetimestamp),
        })
    }
}

impl From<CounterRow> for DailyBonus {
    fn from(row: CounterRow) -> Self {
        DailyBonus {
            bonus: row.bonus.unwrap_or(0),
            bonus_day: utc(row.bonusday),
        }
    }
}

#[async_trait]
impl BoostFactReader for MySqlBoostFactReader {
    async fn amulets(
        &self,
        user_id: &UserId,
        items: &[u32],
    ) -> Result<Vec<ItemQuantity>, DomainError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<MySql>::new(
            "SELECT CAST(item AS SIGNED) AS item, CAST(quantity AS SIGNED) AS quantity \
             FROM inventory WHERE userid = ",
        );
        query.push_bind(user_id.value());
        query.push(" AND item IN (");
        let mut ids = query.separated(", ");
        for item in items {
            ids.push_bind(*item);
        }
        ids.push_unseparated(")");

        let rows: Vec<ItemRow> = query
            .build_query_as::<ItemRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to read inventory"))?;

        rows.into_iter().map(ItemQuantity::try_from).collect()
    }

    async fn radar_chain(&self, user_id: &UserId) -> Result<Option<RadarChain>, DomainError> {
        let row: Option<RadarRow> = sqlx::query_as(
            r#"
            SELECT CAST(u.shinycharm AS DATETIME) AS shinycharm,
                   CAST(u.radar_id AS CHAR) AS radar_id,
                   CAST(u.radar_chain AS SIGNED) AS radar_chain,
                   CAST(u.ubercharm AS DATETIME) AS ubercharm,
                   p.name,
                   p.formename,
                   CAST(p.type1 AS CHAR) AS type1,
                   CAST(p.type2 AS CHAR) AS type2
            FROM users_stats u
            JOIN data_pokemon p ON u.radar_id = p.formeid
            WHERE u.userid = ?
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read radar chain"))?;

        row.map(RadarChain::try_from).transpose()
    }

    async fn albino_hunt(&self, user_id: &UserId) -> Result<Option<AlbinoHunt>, DomainError> {
        let row: Option<AlbinoHuntRow> = sqlx::query_as(
            r#"
            SELECT CAST(level AS SIGNED) AS level,
                   CAST(charged AS DATETIME) AS charged,
                   CAST(typeboost AS CHAR) AS typeboost,
                   CAST(typetimestamp AS DATETIME) AS typetimestamp
            FROM albino_hunt
            WHERE userid = ?
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read albino hunt"))?;

        row.map(AlbinoHunt::try_from).transpose()
    }

    async fn daily_bonus(&self) -> Result<Option<DailyBonus>, DomainError> {
        let row: Option<CounterRow> = sqlx::query_as(
            r#"
            SELECT CAST(bonus AS SIGNED) AS bonus, CAST(bonusday AS DATETIME) AS bonusday
            FROM counters
            WHERE id = ?
            "#,
        )
        .bind(SEASONAL_BONUS_COUNTER)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read seasonal bonus"))?;

        Ok(row.map(DailyBonus::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radar_row() -> RadarRow {
        RadarRow {
            shinycharm: None,
            radar_id: "025".to_string(),
            radar_chain: Some(17),
            ubercharm: None,
            name: "Pikachu".to_string(),
            formename: None,
            type1: "electric".to_string(),
            type2: None,
        }
    }

    #[test]
    fn radar_row_converts() {
        let chain = RadarChain::try_from(radar_row()).unwrap();
        assert_eq!(chain.forme_id, "025");
        assert_eq!(chain.chain, 17);
        assert_eq!(chain.display_name(), "Pikachu");
    }

    #[test]
    fn negative_chain_is_rejected() {
        let row = RadarRow {
            radar_chain: Some(-3),
            ..radar_row()
        };
        assert!(RadarChain::try_from(row).is_err());
    }

    #[test]
    fn item_row_converts() {
        let item = ItemQuantity::try_from(ItemRow {
            item: 1042,
            quantity: Some(0),
        })
        .unwrap();
        assert_eq!(item, ItemQuantity::new(1042, 0));
    }

    #[test]
    fn counter_row_converts() {
        let bonus = DailyBonus::from(CounterRow {
            bonus: Some(15),
            bonusday: None,
        });
        assert_eq!(bonus.bonus, 15);
        assert!(bonus.bonus_day.is_none());
    }

    #[test]
    fn null_counter_bonus_reads_as_zero() {
        let bonus = DailyBonus::from(CounterRow {
            bonus: None,
            bonusday: None,
        });
        assert_eq!(bonus.bonus, 0);
    }

    #[test]
    fn null_chain_length_reads_as_zero() {
        let row = RadarRow {
            radar_chain: None,
            ..radar_row()
        };
        let chain = RadarChain::try_from(row).unwrap();
        assert_eq!(chain.chain, 0);
        assert_eq!(chain.forme_id, "025");
    }

    #[test]
    fn null_albino_level_reads_as_zero() {
        let hunt = AlbinoHunt::try_from(AlbinoHuntRow {
            level: None,
            charged: None,
            typeboost: Some("fire".to_string()),
            typetimestamp: None,
        })
        .unwrap();
        assert_eq!(hunt.level, 0);
        assert_eq!(hunt.type_boost.as_deref(), Some("fire"));
    }

    #[test]
    fn null_item_quantity_reads_as_zero() {
        let item = ItemQuantity::try_from(ItemRow {
            item: 1041,
            quantity: None,
        })
        .unwrap();
        assert_eq!(item, ItemQuantity::new(1041, 0));
    }
}
