//! HTTP adapter for boost endpoints.
//!
//! - `GET /boosts` - Timed boost snapshot for the current user
//! - `GET /boosts/clicks` - Click-game boosts, badges and today's V-Wave
//! - `GET /discord/hypermode?id=<discord id>` - Hyper mode for a linked Discord account

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::boost_routes;
