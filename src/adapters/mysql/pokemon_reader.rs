//! MySQL implementation of PokemonReader.

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{narrow, query_failed};
use crate::domain::foundation::DomainError;
use crate::ports::PokemonReader;

pub struct MySqlPokemonReader {
    pool: MySqlPool,
}

impl MySqlPokemonReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonReader for MySqlPokemonReader {
    async fn packed_iv(&self, pokemon_id: u64) -> Result<Option<u32>, DomainError> {
        let packed: Option<Option<i64>> = sqlx::query_scalar(
            "SELECT CAST(iv AS SIGNED) FROM pokemon WHERE id = ? AND stage = 'pokemon' LIMIT 1",
        )
        .bind(pokemon_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read IV"))?;

        packed_iv_value(packed)
    }
}

/// A missing row and a NULL `iv` both mean there is nothing to decode.
fn packed_iv_value(packed: Option<Option<i64>>) -> Result<Option<u32>, DomainError> {
    packed.flatten().map(|iv| narrow("iv", iv)).transpose()
}
