//! HTTP DTOs for Pokémon endpoints.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IvParams {
    #[serde(default)]
    pub id: Option<String>,
}
