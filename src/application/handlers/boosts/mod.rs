//! Boost query handlers.

mod get_boosts;
mod get_click_boosts;
mod get_discord_hyper_mode;

pub use get_boosts::{GetBoostsHandler, GetBoostsQuery};
pub use get_click_boosts::{ClickBoostsResult, GetClickBoostsHandler, GetClickBoostsQuery};
pub use get_discord_hyper_mode::{GetDiscordHyperModeHandler, GetDiscordHyperModeQuery};
