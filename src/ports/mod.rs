//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `UserReader` - User standing, click profile and public profile
//! - `BoostFactReader` - Optional per-user boost facts and the global bonus
//! - `ForecastReader` - Daily POTD and V-Wave forecasts
//! - `TypeWarReader` - Monthly type war assignment
//! - `BadgeReader` - Wishforge badges
//! - `PokemonReader` - Packed IV blocks
//!
//! ## Infrastructure Ports
//!
//! - `IvCache` - Memoization of decoded IV lookups
//! - `SessionValidator` - Access token validation

mod badge_reader;
mod boost_fact_reader;
mod forecast_reader;
mod iv_cache;
mod pokemon_reader;
mod session_validator;
mod type_war_reader;
mod user_reader;

pub use badge_reader::BadgeReader;
pub use boost_fact_reader::BoostFactReader;
pub use forecast_reader::ForecastReader;
pub use iv_cache::IvCache;
pub use pokemon_reader::PokemonReader;
pub use session_validator::SessionValidator;
pub use type_war_reader::TypeWarReader;
pub use user_reader::{UserProfile, UserReader};
