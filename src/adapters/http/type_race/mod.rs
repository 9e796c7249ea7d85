//! HTTP adapter for type race endpoints.
//!
//! - `GET /typerace/rotation` - The user's type rotation for the current epoch
//! - `GET /typerace/team` - The user's type war assignment for this month

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::type_race_routes;
