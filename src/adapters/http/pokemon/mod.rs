//! HTTP adapter for Pokémon endpoints.
//!
//! - `GET /pokemon/iv?id=<shortlink>` - Packed IV lookup (no authentication)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::pokemon_routes;
