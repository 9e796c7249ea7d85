//! MySQL implementation of ForecastReader.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use super::query_failed;
use crate::domain::foundation::DomainError;
use crate::ports::ForecastReader;

pub struct MySqlForecastReader {
    pool: MySqlPool,
}

impl MySqlForecastReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForecastReader for MySqlForecastReader {
    async fn potd(&self, date: NaiveDate) -> Result<Option<String>, DomainError> {
        let value: Option<Option<String>> =
            sqlx::query_scalar("SELECT CAST(potd AS CHAR) FROM forecast_potd WHERE date = ? LIMIT 1")
                .bind(date)
                .fetch_optional(&self.pool)
                .await
                .map_err(query_failed("Failed to read POTD forecast"))?;

        Ok(value.flatten())
    }

    async fn vwave(&self, date: NaiveDate) -> Result<Option<String>, DomainError> {
        let value: Option<Option<String>> =
            sqlx::query_scalar("SELECT CAST(vwave AS CHAR) FROM forecast_vwave WHERE date = ? LIMIT 1")
                .bind(date)
                .fetch_optional(&self.pool)
                .await
                .map_err(query_failed("Failed to read V-Wave forecast"))?;

        Ok(value.flatten())
    }
}
