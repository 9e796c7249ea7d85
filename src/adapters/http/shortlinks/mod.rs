//! HTTP adapter for staff shortlink tools.
//!
//! - `GET /shortlinks/encode?key=<id>` - Row id to shortlink
//! - `GET /shortlinks/decode?key=<shortlink>` - Shortlink to row id

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::shortlink_routes;
