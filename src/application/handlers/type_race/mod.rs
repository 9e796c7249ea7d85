//! Type race query handlers.

mod get_rotation;
mod get_team;

pub use get_rotation::{GetRotationHandler, GetRotationQuery};
pub use get_team::{GetTeamHandler, GetTeamQuery};
