//! Type war reader port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, UserId};

/// Reads the per-user, per-month type war assignment.
#[async_trait]
pub trait TypeWarReader: Send + Sync {
    /// Assigned type for the month starting on `month_start`.
    async fn current_team(
        &self,
        user_id: &UserId,
        month_start: NaiveDate,
    ) -> Result<Option<String>, DomainError>;
}
