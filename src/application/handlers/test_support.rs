//! In-memory port implementations shared by handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::boosts::{
    AlbinoHunt, ClickProfile, DailyBonus, ItemQuantity, RadarChain, UserStanding, WishforgeBadge,
};
use crate::domain::foundation::{DiscordId, DomainError, UserId};
use crate::domain::pokemon::IvSpread;
use crate::ports::{
    BadgeReader, BoostFactReader, ForecastReader, IvCache, PokemonReader, TypeWarReader,
    UserProfile, UserReader,
};

fn simulated_failure() -> DomainError {
    DomainError::database("Simulated read failure")
}

// ════════════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockUsers {
    pub standings: HashMap<UserId, UserStanding>,
    pub discord: HashMap<DiscordId, UserStanding>,
    pub click_profiles: HashMap<UserId, ClickProfile>,
    pub profiles: HashMap<UserId, UserProfile>,
    pub fail: bool,
}

impl MockUsers {
    pub fn with_standing(user_id: UserId, standing: UserStanding) -> Self {
        let mut users = Self::default();
        users.standings.insert(user_id, standing);
        users
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl UserReader for MockUsers {
    async fn find_standing(&self, user_id: &UserId) -> Result<Option<UserStanding>, DomainError> {
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.standings.get(user_id).cloned())
    }

    async fn find_standing_by_discord(
        &self,
        discord_id: &DiscordId,
    ) -> Result<Option<UserStanding>, DomainError> {
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.discord.get(discord_id).cloned())
    }

    async fn find_click_profile(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ClickProfile>, DomainError> {
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.click_profiles.get(user_id).cloned())
    }

    async fn find_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.profiles.get(user_id).cloned())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Boost facts
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockBoostFacts {
    pub amulets: Vec<ItemQuantity>,
    pub radar: Option<RadarChain>,
    pub albino: Option<AlbinoHunt>,
    pub bonus: Option<DailyBonus>,
    pub fail: bool,
}

#[async_trait]
impl BoostFactReader for MockBoostFacts {
    async fn amulets(
        &self,
        _user_id: &UserId,
        items: &[u32],
    ) -> Result<Vec<ItemQuantity>, DomainError> {
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self
            .amulets
            .iter()
            .filter(|row| items.contains(&row.item))
            .copied()
            .collect())
    }

    async fn radar_chain(&self, _user_id: &UserId) -> Result<Option<RadarChain>, DomainError> {
        Ok(self.radar.clone())
    }

    async fn albino_hunt(&self, _user_id: &UserId) -> Result<Option<AlbinoHunt>, DomainError> {
        Ok(self.albino.clone())
    }

    async fn daily_bonus(&self) -> Result<Option<DailyBonus>, DomainError> {
        Ok(self.bonus.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Forecasts, type war, badges
// ════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockForecasts {
    pub potd: HashMap<NaiveDate, String>,
    pub vwave: HashMap<NaiveDate, String>,
}

#[async_trait]
impl ForecastReader for MockForecasts {
    async fn potd(&self, date: NaiveDate) -> Result<Option<String>, DomainError> {
        Ok(self.potd.get(&date).cloned())
    }

    async fn vwave(&self, date: NaiveDate) -> Result<Option<String>, DomainError> {
        Ok(self.vwave.get(&date).cloned())
    }
}

/// Records the month key it was asked for.
#[derive(Default)]
pub struct MockTypeWar {
    pub teams: HashMap<(UserId, NaiveDate), String>,
    pub requested: Mutex<Vec<NaiveDate>>,
}

#[async_trait]
impl TypeWarReader for MockTypeWar {
    async fn current_team(
        &self,
        user_id: &UserId,
        month_start: NaiveDate,
    ) -> Result<Option<String>, DomainError> {
        self.requested.lock().unwrap().push(month_start);
        Ok(self.teams.get(&(*user_id, month_start)).cloned())
    }
}

#[derive(Default)]
pub struct MockBadges {
    pub badges: Vec<WishforgeBadge>,
}

#[async_trait]
impl BadgeReader for MockBadges {
    async fn badges_for(&self, _user_id: &UserId) -> Result<Vec<WishforgeBadge>, DomainError> {
        Ok(self.badges.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Pokémon and IV cache
// ════════════════════════════════════════════════════════════════════════════

/// Counts reads so tests can tell cache hits from misses.
#[derive(Default)]
pub struct MockPokemon {
    pub ivs: HashMap<u64, u32>,
    pub reads: Mutex<u32>,
    pub fail: bool,
}

#[async_trait]
impl PokemonReader for MockPokemon {
    async fn packed_iv(&self, pokemon_id: u64) -> Result<Option<u32>, DomainError> {
        *self.reads.lock().unwrap() += 1;
        if self.fail {
            return Err(simulated_failure());
        }
        Ok(self.ivs.get(&pokemon_id).copied())
    }
}

#[derive(Default)]
pub struct MockIvCache {
    pub entries: Mutex<HashMap<String, IvSpread>>,
}

#[async_trait]
impl IvCache for MockIvCache {
    async fn get(&self, shortlink: &str) -> Option<IvSpread> {
        self.entries.lock().unwrap().get(shortlink).copied()
    }

    async fn put(&self, shortlink: String, spread: IvSpread) {
        self.entries.lock().unwrap().insert(shortlink, spread);
    }
}
