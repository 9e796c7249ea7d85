//! HTTP DTOs for type race endpoints.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationResponse {
    pub rotation: Vec<String>,
}

/// This month's assignment. Serialized as `null` when unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamResponse {
    #[serde(rename = "type")]
    pub team_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_serializes_type_key() {
        let json = serde_json::to_string(&TeamResponse {
            team_type: "fire".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"fire"}"#);
    }

    #[test]
    fn missing_team_serializes_as_null() {
        let team: Option<TeamResponse> = None;
        assert_eq!(serde_json::to_string(&team).unwrap(), "null");
    }
}
