//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types shared by every
//! other domain module.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode};
pub use ids::{DiscordId, UserId};
pub use timestamp::Timestamp;
