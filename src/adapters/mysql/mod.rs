//! MySQL adapters - read-only implementations of the data ports.
//!
//! The schema is owned by the game server. Queries cast integer and
//! datetime columns to `SIGNED` / `DATETIME` so the driver decodes them into
//! the same Rust types regardless of the concrete column width.
//!
//! - `MySqlUserReader` - `users`
//! - `MySqlBoostFactReader` - `inventory`, `users_stats`, `albino_hunt`, `counters`
//! - `MySqlForecastReader` - `forecast_potd`, `forecast_vwave`
//! - `MySqlTypeWarReader` - `typewar`
//! - `MySqlBadgeReader` - `gemwish_badges`
//! - `MySqlPokemonReader` - `pokemon`

mod badge_reader;
mod boost_fact_reader;
mod forecast_reader;
mod pokemon_reader;
mod type_war_reader;
mod user_reader;

pub use badge_reader::MySqlBadgeReader;
pub use boost_fact_reader::MySqlBoostFactReader;
pub use forecast_reader::MySqlForecastReader;
pub use pokemon_reader::MySqlPokemonReader;
pub use type_war_reader::MySqlTypeWarReader;
pub use user_reader::MySqlUserReader;

use chrono::NaiveDateTime;
use sqlx::mysql::MySqlPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Opens a connection pool sized from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = config
        .connect_options()
        .map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;
    config.pool_options().connect_with(options).await
}

/// Logs a driver error and wraps it as a `DatabaseError`.
pub(crate) fn query_failed(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!("{}: {}", context, e);
        DomainError::new(ErrorCode::DatabaseError, format!("{}: {}", context, e))
    }
}

/// Converts a signed column value into a narrower unsigned type.
pub(crate) fn narrow<T: TryFrom<i64>>(column: &'static str, value: i64) -> Result<T, DomainError> {
    T::try_from(value).map_err(|_| {
        DomainError::database(format!("Column {} out of range: {}", column, value))
            .with_detail("column", column)
    })
}

/// Database datetimes are stored in UTC without zone information.
pub(crate) fn utc(value: Option<NaiveDateTime>) -> Option<Timestamp> {
    value.map(Timestamp::from_naive_utc)
}
