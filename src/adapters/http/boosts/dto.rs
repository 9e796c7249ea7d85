//! HTTP DTOs for boost endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DiscordId;

/// Query string for `/discord/hypermode`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscordHyperModeParams {
    #[serde(default)]
    pub id: Option<String>,
}

impl DiscordHyperModeParams {
    /// The Discord id, when present and numeric.
    pub fn discord_id(&self) -> Option<DiscordId> {
        self.id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(DiscordId::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyperModeResponse {
    pub hypermode: bool,
}
