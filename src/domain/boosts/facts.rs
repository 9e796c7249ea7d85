//! Raw fact records as supplied by the data layer.
//!
//! Optional facts are `Option`s here; defaults are substituted only inside
//! the aggregator.

use crate::domain::foundation::Timestamp;

/// Role and subscription state from the `users` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStanding {
    pub staff: i32,
    pub ultimate: Option<Timestamp>,
}

impl UserStanding {
    pub fn new(staff: i32, ultimate: Option<Timestamp>) -> Self {
        Self { staff, ultimate }
    }

    /// Staff always have hyper mode; everyone else needs an unexpired
    /// `ultimate` subscription.
    pub fn has_hyper_mode(&self, now: &Timestamp) -> bool {
        self.staff > 0 || super::expires_after(self.ultimate.as_ref(), now)
    }
}

/// One inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemQuantity {
    pub item: u32,
    pub quantity: i64,
}

impl ItemQuantity {
    pub fn new(item: u32, quantity: i64) -> Self {
        Self { item, quantity }
    }
}

/// The user's current shiny chain (`users_stats` joined with the targeted
/// species).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarChain {
    pub shiny_charm: Option<Timestamp>,
    pub forme_id: String,
    pub chain: u32,
    pub uber_charm: Option<Timestamp>,
    pub name: String,
    pub forme_name: Option<String>,
    pub type1: String,
    pub type2: Option<String>,
}

impl RadarChain {
    /// Species name, with the forme in brackets when it has one.
    pub fn display_name(&self) -> String {
        match self.forme_name.as_deref() {
            Some(forme) if !forme.is_empty() => format!("{} [{}]", self.name, forme),
            _ => self.name.clone(),
        }
    }

    pub fn types(&self) -> TypePair {
        TypePair::new(self.type1.clone(), self.type2.clone())
    }
}

/// Primary and optional secondary type of the chained species.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypePair {
    primary: Option<String>,
    secondary: Option<String>,
}

impl TypePair {
    /// An empty secondary is dropped, so `contains("")` is always false.
    /// The legacy game server built `[type1, type2 || ""]` and would match an
    /// empty assignment against a single-typed species; here an empty
    /// assignment never matches.
    pub fn new(primary: impl Into<String>, secondary: Option<String>) -> Self {
        Self {
            primary: Some(primary.into()),
            secondary: secondary.filter(|s| !s.is_empty()),
        }
    }

    /// Whether `value` is one of the two types.
    pub fn contains(&self, value: &str) -> bool {
        self.primary.as_deref() == Some(value) || self.secondary.as_deref() == Some(value)
    }
}

/// Row from `albino_hunt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbinoHunt {
    pub level: u32,
    pub charged: Option<Timestamp>,
    pub type_boost: Option<String>,
    pub type_expires: Option<Timestamp>,
}

/// The global seasonal bonus counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBonus {
    pub bonus: i64,
    pub bonus_day: Option<Timestamp>,
}

/// Everything the aggregator needs for one user at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoostFacts {
    pub standing: Option<UserStanding>,
    pub amulets: Vec<ItemQuantity>,
    pub radar: Option<RadarChain>,
    pub type_war: Option<String>,
    pub albino_hunt: Option<AlbinoHunt>,
    pub daily_bonus: Option<DailyBonus>,
    pub potd_forecast: Option<String>,
}
