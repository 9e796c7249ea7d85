//! MySQL implementation of UserReader.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::MySqlPool;

use super::{narrow, query_failed, utc};
use crate::domain::boosts::{ClickProfile, UserStanding};
use crate::domain::foundation::{DiscordId, DomainError, Timestamp, UserId};
use crate::ports::{UserProfile, UserReader};

pub struct MySqlUserReader {
    pool: MySqlPool,
}

impl MySqlUserReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct StandingRow {
    staff: i64,
    ultimate: Option<NaiveDateTime>,
}

#[derive(Debug, sqlx::FromRow)]
struct ClickProfileRow {
    staff: i64,
    staff_sub: i64,
    dob: Option<NaiveDateTime>,
    joined: NaiveDateTime,
    ultimate: Option<NaiveDateTime>,
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
    displayname: Option<String>,
    staff: i64,
}

impl TryFrom<StandingRow> for UserStanding {
    type Error = DomainError;

    fn try_from(row: StandingRow) -> Result<Self, Self::Error> {
        Ok(UserStanding::new(narrow("staff", row.staff)?, utc(row.ultimate)))
    }
}

impl TryFrom<ClickProfileRow> for ClickProfile {
    type Error = DomainError;

    fn try_from(row: ClickProfileRow) -> Result<Self, Self::Error> {
        Ok(ClickProfile {
            staff: narrow("staff", row.staff)?,
            staff_sub: narrow("staff_sub", row.staff_sub)?,
            dob: utc(row.dob),
            joined: Timestamp::from_naive_utc(row.joined),
            ultimate: utc(row.ultimate),
        })
    }
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            id: UserId::new(narrow("id", row.id)?),
            name: row.name,
            displayname: row.displayname,
            staff: narrow("staff", row.staff)?,
        })
    }
}

#[async_trait]
impl UserReader for MySqlUserReader {
    async fn find_standing(&self, user_id: &UserId) -> Result<Option<UserStanding>, DomainError> {
        let row: Option<StandingRow> = sqlx::query_as(
            r#"
            SELECT CAST(staff AS SIGNED) AS staff, CAST(ultimate AS DATETIME) AS ultimate
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read user standing"))?;

        row.map(UserStanding::try_from).transpose()
    }

    async fn find_standing_by_discord(
        &self,
        discord_id: &DiscordId,
    ) -> Result<Option<UserStanding>, DomainError> {
        let row: Option<StandingRow> = sqlx::query_as(
            r#"
            SELECT CAST(staff AS SIGNED) AS staff, CAST(ultimate AS DATETIME) AS ultimate
            FROM users
            WHERE discordid = ?
            LIMIT 1
            "#,
        )
        .bind(discord_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read user by discord id"))?;

        row.map(UserStanding::try_from).transpose()
    }

    async fn find_click_profile(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ClickProfile>, DomainError> {
        let row: Option<ClickProfileRow> = sqlx::query_as(
            r#"
            SELECT CAST(staff AS SIGNED) AS staff,
                   CAST(staff_sub AS SIGNED) AS staff_sub,
                   CAST(dob AS DATETIME) AS dob,
                   CAST(joined AS DATETIME) AS joined,
                   CAST(ultimate AS DATETIME) AS ultimate
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read click profile"))?;

        row.map(ClickProfile::try_from).transpose()
    }

    async fn find_profile(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT CAST(id AS SIGNED) AS id,
                   name,
                   name_display AS displayname,
                   CAST(staff AS SIGNED) AS staff
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("Failed to read user profile"))?;

        row.map(UserProfile::try_from).transpose()
    }
}
