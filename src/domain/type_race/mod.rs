//! Type race - per-user rotating type schedule.
//!
//! Each user gets a reproducible shuffle of the eighteen types. The shuffle
//! is reseeded every 18 calendar months (a rotation epoch), in lockstep for
//! all users, and needs no stored state.

mod epoch;
mod lcg;
mod rotation;

pub use epoch::{RotationEpoch, EPOCH_LENGTH_MONTHS, EPOCH_OFFSET};
pub use lcg::Lcg;
pub use rotation::{TypeRotation, ACTIVE_MARKER};
