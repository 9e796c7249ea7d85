//! Current-user query handlers.

mod get_me;

pub use get_me::{GetMeHandler, GetMeQuery};
