// src/config.rs
//
// Platform configuration
//
// Every field has a default, so an empty JSON object (or no file at all)
// yields the stock behaviour: "user-N"/"stream-N" ids and one real second
// per simulated minute of playback.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppResult, AppResultExt};
use crate::services::SleepDelay;

/// Environment variable the binary reads the config path from
pub const CONFIG_ENV_VAR: &str = "STREAMHUB_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub user_id_prefix: String,
    pub item_id_prefix: String,
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Real seconds slept per simulated minute; 0 disables sleeping
    pub seconds_per_minute: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            user_id_prefix: "user".to_string(),
            item_id_prefix: "stream".to_string(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seconds_per_minute: 1,
        }
    }
}

impl PlatformConfig {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .context(format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&raw).context(format!("failed to parse config {}", path.display()))
    }
}

impl PlaybackConfig {
    pub fn delay(&self) -> SleepDelay {
        SleepDelay::new(Duration::from_secs(self.seconds_per_minute))
    }
}
