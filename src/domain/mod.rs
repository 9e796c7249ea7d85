//! Domain layer containing the derivation logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `shortlink` - Base-54 shortlink codec for public row ids
//! - `pokemon` - Packed IV decoding and the elemental type catalogue
//! - `type_race` - Per-user seeded type rotation
//! - `boosts` - Entitlement aggregation into boost snapshots

pub mod boosts;
pub mod foundation;
pub mod pokemon;
pub mod shortlink;
pub mod type_race;
