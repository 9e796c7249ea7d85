//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `mysql` - Readers over the game's MySQL schema (sqlx)
//! - `cache` - In-process IV memoization
//! - `auth` - Session token validation (jsonwebtoken)
//! - `http` - axum routers, middleware and error mapping

pub mod auth;
pub mod cache;
pub mod http;
pub mod mysql;

pub use auth::JwtSessionValidator;
pub use cache::InMemoryIvCache;
pub use http::{api_router, AppState};
