//! Pokémon reader port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Reads individual Pokémon rows.
#[async_trait]
pub trait PokemonReader: Send + Sync {
    /// Packed IV block of a Pokémon in the `pokemon` stage.
    ///
    /// Returns `None` for unknown ids and for rows in any other stage.
    async fn packed_iv(&self, pokemon_id: u64) -> Result<Option<u32>, DomainError>;
}
