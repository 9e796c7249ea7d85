//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::{
    DecodeShortLinkHandler, EncodeShortLinkHandler, GetBoostsHandler, GetClickBoostsHandler,
    GetDiscordHyperModeHandler, GetMeHandler, GetPokemonIvHandler, GetRotationHandler,
    GetTeamHandler,
};
use crate::ports::{
    BadgeReader, BoostFactReader, ForecastReader, IvCache, PokemonReader, SessionValidator,
    TypeWarReader, UserReader,
};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every port is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserReader>,
    pub boost_facts: Arc<dyn BoostFactReader>,
    pub forecasts: Arc<dyn ForecastReader>,
    pub type_war: Arc<dyn TypeWarReader>,
    pub badges: Arc<dyn BadgeReader>,
    pub pokemon: Arc<dyn PokemonReader>,
    pub iv_cache: Arc<dyn IvCache>,
    pub session_validator: Arc<dyn SessionValidator>,
}

impl AppState {
    pub fn boosts_handler(&self) -> GetBoostsHandler {
        GetBoostsHandler::new(
            self.users.clone(),
            self.boost_facts.clone(),
            self.type_war.clone(),
            self.forecasts.clone(),
        )
    }

    pub fn click_boosts_handler(&self) -> GetClickBoostsHandler {
        GetClickBoostsHandler::new(
            self.users.clone(),
            self.badges.clone(),
            self.forecasts.clone(),
        )
    }

    pub fn discord_hyper_mode_handler(&self) -> GetDiscordHyperModeHandler {
        GetDiscordHyperModeHandler::new(self.users.clone())
    }

    pub fn rotation_handler(&self) -> GetRotationHandler {
        GetRotationHandler::new(self.type_war.clone())
    }

    pub fn team_handler(&self) -> GetTeamHandler {
        GetTeamHandler::new(self.type_war.clone())
    }

    pub fn encode_shortlink_handler(&self) -> EncodeShortLinkHandler {
        EncodeShortLinkHandler::new(self.users.clone())
    }

    pub fn decode_shortlink_handler(&self) -> DecodeShortLinkHandler {
        DecodeShortLinkHandler::new(self.users.clone())
    }

    pub fn pokemon_iv_handler(&self) -> GetPokemonIvHandler {
        GetPokemonIvHandler::new(self.pokemon.clone(), self.iv_cache.clone())
    }

    pub fn me_handler(&self) -> GetMeHandler {
        GetMeHandler::new(self.users.clone())
    }
}
