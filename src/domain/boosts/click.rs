//! Click-game boosts derived from the user row.

use serde::Serialize;

use super::{bit_set, expires_after};
use crate::domain::foundation::Timestamp;

/// `staff_sub` flag for wiki editors.
pub const WIKI_EDITOR_FLAG: u32 = 1;

/// `staff_sub` flag for helping hands.
pub const HELPING_HAND_FLAG: u32 = 2;

/// `staff_sub` flag for Discord nitro boosters.
pub const NITRO_BOOST_FLAG: u32 = 8;

/// Days after the birthday (inclusive) during which the bonus applies.
pub const BIRTHDAY_WINDOW_DAYS: f64 = 7.0;

/// The `users` columns the click boosts are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickProfile {
    pub staff: i32,
    pub staff_sub: u32,
    pub dob: Option<Timestamp>,
    pub joined: Timestamp,
    pub ultimate: Option<Timestamp>,
}

impl ClickProfile {
    /// Date of birth when known, otherwise the join date.
    pub fn birthday_reference(&self) -> &Timestamp {
        self.dob.as_ref().unwrap_or(&self.joined)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClickBoosts {
    pub hypermode: bool,
    pub wikieditor: bool,
    pub helpinghand: bool,
    pub birthday: bool,
    pub nitroboost: bool,
}

impl ClickBoosts {
    pub fn derive(profile: &ClickProfile, now: &Timestamp) -> Self {
        let days = now.days_since(profile.birthday_reference());

        Self {
            hypermode: profile.staff > 0 || expires_after(profile.ultimate.as_ref(), now),
            wikieditor: bit_set(profile.staff_sub, WIKI_EDITOR_FLAG),
            helpinghand: bit_set(profile.staff_sub, HELPING_HAND_FLAG),
            birthday: (0.0..=BIRTHDAY_WINDOW_DAYS).contains(&days),
            nitroboost: bit_set(profile.staff_sub, NITRO_BOOST_FLAG),
        }
    }
}

/// A wishforge badge the user has earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishforgeBadge {
    #[serde(rename = "type")]
    pub badge_type: String,
    pub name: String,
}
