//! Runtime configuration passed in by the host page.
//!
//! `start()` receives a JSON object; every field is optional and an empty
//! string means "all defaults".

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2/pokemon";

/// Highest national dex number the data service is queried for.
pub const DEFAULT_MAX_CREATURE_ID: u32 = 807;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL; the creature id is appended as the last path segment.
    pub api_base: String,
    /// Ids are drawn uniformly from `1..=max_creature_id`.
    pub max_creature_id: u32,
    /// `EnvFilter` directive string, e.g. `"debug"` or `"creature_battle=trace"`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_creature_id: DEFAULT_MAX_CREATURE_ID,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config object. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AppConfig = serde_json::from_str(json).map_err(AppError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_creature_id == 0 {
            return Err(AppError::InvalidConfig(
                "max_creature_id must be at least 1".to_string(),
            ));
        }
        if self.api_base.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_base is empty".to_string()));
        }
        Ok(())
    }

    /// Full record URL for one creature id.
    pub fn creature_url(&self, id: u32) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), id)
    }
}
