//! Forecast reader port for the daily global forecasts.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait ForecastReader: Send + Sync {
    /// Forme id of the Pokémon of the day.
    async fn potd(&self, date: NaiveDate) -> Result<Option<String>, DomainError>;

    /// Today's V-Wave type.
    async fn vwave(&self, date: NaiveDate) -> Result<Option<String>, DomainError>;
}
