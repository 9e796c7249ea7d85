//! The consolidated boost snapshot returned to clients.

use serde::Serialize;

/// All of a user's active boosts at one instant.
///
/// `Default` is the profile of a brand-new user with nothing active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostSnapshot {
    pub hyper_mode: bool,
    pub silver_amulet: bool,
    pub gold_amulet: bool,
    pub cobalt_amulet: bool,
    pub shiny_charm: bool,
    pub shiny_chain_name: String,
    pub shiny_chain_count: u32,
    pub shiny_chain_forme: String,
    pub uber_charm: bool,
    pub type_race: bool,
    pub albino_level: u32,
    pub z_crystal: bool,
    pub sei_power: i64,
    pub potd: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(BoostSnapshot::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in [
            "hyperMode",
            "silverAmulet",
            "goldAmulet",
            "cobaltAmulet",
            "shinyCharm",
            "shinyChainName",
            "shinyChainCount",
            "shinyChainForme",
            "uberCharm",
            "typeRace",
            "albinoLevel",
            "zCrystal",
            "seiPower",
            "potd",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(keys.len(), 14);
    }

    #[test]
    fn default_snapshot_is_empty_profile() {
        let json = serde_json::to_value(BoostSnapshot::default()).unwrap();
        assert_eq!(json["hyperMode"], false);
        assert_eq!(json["shinyChainName"], "");
        assert_eq!(json["albinoLevel"], 0);
        assert_eq!(json["seiPower"], 0);
    }
}
