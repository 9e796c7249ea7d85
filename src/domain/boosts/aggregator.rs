//! Reduces raw boost facts into a [`BoostSnapshot`].
//!
//! The pipeline runs in a fixed order. The radar chain step produces a
//! [`ChainOutcome`] that later steps consume; the POTD comparison reads the
//! chain's forme id from it rather than from the half-built snapshot.

use super::{
    expires_after, same_day, AlbinoHunt, BoostError, BoostFacts, BoostSnapshot, DailyBonus,
    ItemQuantity, RadarChain, TypePair,
};
use crate::domain::foundation::Timestamp;

/// Inventory item id of the Silver Amulet.
pub const SILVER_AMULET_ITEM: u32 = 1041;

/// Inventory item id of the Gold Amulet.
pub const GOLD_AMULET_ITEM: u32 = 1042;

/// Inventory item id of the Cobalt Amulet.
pub const COBALT_AMULET_ITEM: u32 = 1043;

/// Stateless boost aggregation.
pub struct BoostAggregator;

/// Output of the radar chain step, carried forward to later steps.
#[derive(Debug, Default)]
struct ChainOutcome {
    shiny_charm: bool,
    uber_charm: bool,
    name: String,
    count: u32,
    forme_id: Option<String>,
    types: TypePair,
}

#[derive(Debug, Default)]
struct Amulets {
    silver: bool,
    gold: bool,
    cobalt: bool,
}

#[derive(Debug, Default)]
struct AlbinoOutcome {
    level: u32,
    z_crystal: bool,
}

impl BoostAggregator {
    /// Builds the snapshot for one user at `now`.
    ///
    /// Fails only when the user's standing is missing. Every other absent
    /// fact resolves to false, zero or empty.
    pub fn aggregate(now: &Timestamp, facts: BoostFacts) -> Result<BoostSnapshot, BoostError> {
        let standing = facts.standing.ok_or_else(BoostError::user_not_found)?;

        let hyper_mode = standing.has_hyper_mode(now);
        let amulets = Self::amulets(&facts.amulets);
        let chain = Self::radar_chain(facts.radar.as_ref(), now);
        let type_race = Self::type_race(facts.type_war.as_deref(), &chain);
        let albino = Self::albino_hunt(facts.albino_hunt.as_ref(), &chain, now);
        let sei_power = Self::sei_power(facts.daily_bonus.as_ref(), now);
        let potd = Self::potd(facts.potd_forecast.as_deref(), &chain);

        Ok(BoostSnapshot {
            hyper_mode,
            silver_amulet: amulets.silver,
            gold_amulet: amulets.gold,
            cobalt_amulet: amulets.cobalt,
            shiny_charm: chain.shiny_charm,
            shiny_chain_name: chain.name,
            shiny_chain_count: chain.count,
            shiny_chain_forme: chain.forme_id.unwrap_or_default(),
            uber_charm: chain.uber_charm,
            type_race,
            albino_level: albino.level,
            z_crystal: albino.z_crystal,
            sei_power,
            potd,
        })
    }

    /// Later rows win when an item appears twice.
    fn amulets(items: &[ItemQuantity]) -> Amulets {
        items.iter().fold(Amulets::default(), |mut acc, row| {
            let held = row.quantity > 0;
            match row.item {
                SILVER_AMULET_ITEM => acc.silver = held,
                GOLD_AMULET_ITEM => acc.gold = held,
                COBALT_AMULET_ITEM => acc.cobalt = held,
                _ => {}
            }
            acc
        })
    }

    fn radar_chain(radar: Option<&RadarChain>, now: &Timestamp) -> ChainOutcome {
        let Some(radar) = radar else {
            return ChainOutcome::default();
        };

        ChainOutcome {
            shiny_charm: expires_after(radar.shiny_charm.as_ref(), now),
            uber_charm: expires_after(radar.uber_charm.as_ref(), now),
            name: radar.display_name(),
            count: radar.chain,
            forme_id: Some(radar.forme_id.clone()),
            types: radar.types(),
        }
    }

    fn type_race(assignment: Option<&str>, chain: &ChainOutcome) -> bool {
        assignment.map(|ty| chain.types.contains(ty)).unwrap_or(false)
    }

    fn albino_hunt(hunt: Option<&AlbinoHunt>, chain: &ChainOutcome, now: &Timestamp) -> AlbinoOutcome {
        let Some(hunt) = hunt else {
            return AlbinoOutcome::default();
        };

        let level = if same_day(hunt.charged.as_ref(), now) {
            hunt.level
        } else {
            0
        };
        let boosted_type = hunt
            .type_boost
            .as_deref()
            .map(|ty| chain.types.contains(ty))
            .unwrap_or(false);

        AlbinoOutcome {
            level,
            z_crystal: expires_after(hunt.type_expires.as_ref(), now) && boosted_type,
        }
    }

    fn sei_power(bonus: Option<&DailyBonus>, now: &Timestamp) -> i64 {
        bonus
            .filter(|b| same_day(b.bonus_day.as_ref(), now))
            .map(|b| b.bonus)
            .unwrap_or(0)
    }

    fn potd(forecast: Option<&str>, chain: &ChainOutcome) -> bool {
        match (forecast, chain.forme_id.as_deref()) {
            (Some(potd), Some(forme)) => potd == forme,
            _ => false,
        }
    }
}
