//! Boosts module - consolidated per-user entitlement snapshots.
//!
//! Raw facts are read from several independent tables and reduced into one
//! [`BoostSnapshot`] by [`BoostAggregator`]. Every fact except the user's own
//! standing is optional; a missing fact degrades to its default.

mod aggregator;
mod click;
mod errors;
mod facts;
mod rules;
mod snapshot;

pub use aggregator::{BoostAggregator, COBALT_AMULET_ITEM, GOLD_AMULET_ITEM, SILVER_AMULET_ITEM};
pub use click::{
    ClickBoosts, ClickProfile, WishforgeBadge, BIRTHDAY_WINDOW_DAYS, HELPING_HAND_FLAG,
    NITRO_BOOST_FLAG, WIKI_EDITOR_FLAG,
};
pub use errors::BoostError;
pub use facts::{
    AlbinoHunt, BoostFacts, DailyBonus, ItemQuantity, RadarChain, TypePair, UserStanding,
};
pub use rules::{bit_set, expires_after, same_day};
pub use snapshot::BoostSnapshot;
