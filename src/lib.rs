//! PKMN API - game state backend
//!
//! Serves per-user game state for the browser game: timed boosts, the
//! rotating type race schedule, shortlink encoding for Pokémon rows and
//! packed IV lookups.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
