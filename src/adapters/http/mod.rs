//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with DTOs, axum handlers and
//! routes; `router` assembles them behind the auth middleware.

pub mod boosts;
pub mod error;
pub mod me;
pub mod middleware;
pub mod pokemon;
pub mod router;
pub mod shortlinks;
pub mod state;
pub mod type_race;

pub use error::{ApiError, ErrorResponse};
pub use router::api_router;
pub use state::AppState;
