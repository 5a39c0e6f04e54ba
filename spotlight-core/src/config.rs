use crate::params::MergePolicy;
use serde::{Deserialize, Serialize};

const ROUTER_CONFIG_JSON: &str = include_str!("../assets/router.json");

/// Tunables for the router shell, shipped as a static asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub splash_ms: u32,
    pub merge_policy: MergePolicy,
    pub history_limit: usize,
    pub search_min_chars: usize,
    pub search_result_limit: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl RouterConfig {
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            splash_ms: 2_500,
            merge_policy: MergePolicy::Accumulate,
            history_limit: 8,
            search_min_chars: 3,
            search_result_limit: 20,
        }
    }

    /// Parse a config document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid config document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the bundled asset, falling back to defaults if it fails to parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(ROUTER_CONFIG_JSON).unwrap_or_else(|err| {
            log::warn!("router config asset invalid ({err}); using defaults");
            Self::default_config()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_asset_matches_defaults() {
        assert_eq!(RouterConfig::load_from_static(), RouterConfig::default_config());
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let cfg = RouterConfig::from_json(r#"{ "merge_policy": "reset", "splash_ms": 0 }"#).unwrap();
        assert_eq!(cfg.merge_policy, MergePolicy::Reset);
        assert_eq!(cfg.splash_ms, 0);
        assert_eq!(cfg.history_limit, 8);
        assert!(RouterConfig::from_json("not json").is_err());
    }
}
