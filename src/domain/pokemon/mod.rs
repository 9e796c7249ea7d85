//! Pokémon value objects: packed IV spreads and the elemental type list.

mod iv;
mod pokemon_type;

pub use iv::{IvSpread, IV_FIELD_BITS, IV_FIELD_COUNT, IV_FIELD_MASK};
pub use pokemon_type::{PokemonType, UnknownType};
