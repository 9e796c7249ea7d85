//! HTTP adapter for the current user.
//!
//! - `GET /me` - Public profile of the authenticated user

pub mod handlers;
pub mod routes;

pub use routes::me_routes;
