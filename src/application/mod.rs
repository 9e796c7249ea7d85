//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates reads across ports and hands the raw facts to the
//! domain layer for derivation.

pub mod handlers;

pub use handlers::{
    GetBoostsHandler, GetBoostsQuery, GetClickBoostsHandler, GetDiscordHyperModeHandler,
    GetMeHandler, GetPokemonIvHandler, GetRotationHandler, GetTeamHandler,
};
