//! MySQL implementation of BadgeReader.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::query_failed;
use crate::domain::boosts::WishforgeBadge;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::BadgeReader;

pub struct MySqlBadgeReader {
    pool: MySqlPool,
}

impl MySqlBadgeReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BadgeRow {
    badge_type: String,
    name: String,
}

impl From<BadgeRow> for WishforgeBadge {
    fn from(row: BadgeRow) -> Self {
        WishforgeBadge {
            badge_type: row.badge_type,
            name: row.name,
        }
    }
}

#[async_trait]
impl BadgeReader for MySqlBadgeReader {
    async fn badges_for(&self, user_id: &UserId) -> Result<Vec<WishforgeBadge>, DomainError> {
        let rows: Vec<BadgeRow> = sqlx::query_as(
            r#"
            SELECT CAST(a.type AS CHAR) AS badge_type, b.name
            FROM gemwish_badges a
            JOIN data_gemwish_badges b ON a.level = b.id
            WHERE a.userid = ?
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("Failed to read badges"))?;

        Ok(rows.into_iter().map(WishforgeBadge::from).collect())
    }
}
