//! Pokémon query handlers.

mod get_pokemon_iv;

pub use get_pokemon_iv::{GetPokemonIvHandler, GetPokemonIvQuery, IvLookup, IvLookupError};
