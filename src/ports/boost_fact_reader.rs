//! Boost fact reader port.
//!
//! One method per optional fact table. Absent rows come back as `None` (or an
//! empty list) and the aggregator substitutes the default.

use async_trait::async_trait;

use crate::domain::boosts::{AlbinoHunt, DailyBonus, ItemQuantity, RadarChain};
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait BoostFactReader: Send + Sync {
    /// Inventory rows for the given item ids.
    async fn amulets(&self, user_id: &UserId, items: &[u32])
        -> Result<Vec<ItemQuantity>, DomainError>;

    /// Current shiny chain joined with the targeted species.
    async fn radar_chain(&self, user_id: &UserId) -> Result<Option<RadarChain>, DomainError>;

    async fn albino_hunt(&self, user_id: &UserId) -> Result<Option<AlbinoHunt>, DomainError>;

    /// The global seasonal bonus counter.
    async fn daily_bonus(&self) -> Result<Option<DailyBonus>, DomainError>;
}
