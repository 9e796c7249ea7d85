//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric user identifier (primary key of the `users` table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Creates a UserId from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Discord account snowflake linked to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscordId(u64);

impl DiscordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DiscordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_from_valid_string() {
        let id: UserId = "4217".parse().unwrap();
        assert_eq!(id.value(), 4217);
        assert_eq!(id.to_string(), "4217");
    }

    #[test]
    fn user_id_rejects_non_numeric_string() {
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&UserId::new(12)).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn discord_id_displays_value() {
        let id = DiscordId::new(80351110224678912);
        assert_eq!(format!("{}", id), "80351110224678912");
    }
}
