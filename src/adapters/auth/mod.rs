//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 shared-secret validation of game-server session tokens

mod jwt;

pub use jwt::JwtSessionValidator;
