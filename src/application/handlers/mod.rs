//! Application handlers.
//!
//! Query handlers that read through ports and delegate derivation to the
//! domain layer. All endpoints are read-only.

pub mod boosts;
pub mod me;
pub mod pokemon;
pub mod shortlinks;
pub mod type_race;

#[cfg(test)]
pub(crate) mod test_support;

pub use boosts::{
    ClickBoostsResult, GetBoostsHandler, GetBoostsQuery, GetClickBoostsHandler,
    GetClickBoostsQuery, GetDiscordHyperModeHandler, GetDiscordHyperModeQuery,
};
pub use me::{GetMeHandler, GetMeQuery};
pub use pokemon::{GetPokemonIvHandler, GetPokemonIvQuery, IvLookup, IvLookupError};
pub use shortlinks::{
    DecodeShortLinkHandler, DecodeShortLinkQuery, EncodeShortLinkHandler, EncodeShortLinkQuery,
};
pub use type_race::{GetRotationHandler, GetRotationQuery, GetTeamHandler, GetTeamQuery};
