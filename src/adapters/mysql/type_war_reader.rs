//! MySQL implementation of TypeWarReader.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use super::query_failed;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::TypeWarReader;

pub struct MySqlTypeWarReader {
    pool: MySqlPool,
}

impl MySqlTypeWarReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TypeWarReader for MySqlTypeWarReader {
    async fn current_team(
        &self,
        user_id: &UserId,
        month_start: NaiveDate,
    ) -> Result<Option<String>, DomainError> {
        let team: Option<Option<String>> = sqlx::query_scalar(
            "SELECT CAST(type AS CHAR) FROM typewar WHERE userid = ? AND month = ? LIMIT 1",
        )
        .bind(user_id.value())
        .bind(month_start)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read type war assignment"))?;

        Ok(team.flatten().filter(|t| !t.is_empty()))
    }
}
