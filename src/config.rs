use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

pub const DEFAULT_API_BASE: &str = "https://api.swarma.org/api";
pub const DEFAULT_PORTAL_API_BASE: &str = "https://pattern.swarma.org/api";
pub const DEFAULT_STUDY_GROUPS_TIMEOUT_SECS: u64 = 15;

/// Optional override file, `pattern-hub.json`. Any field may be omitted.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub portal_api_base: Option<String>,
    #[serde(default)]
    pub study_groups_timeout_secs: Option<u64>,
}

/// Resolved endpoints for the three fetchers. `api_base` serves the paths
/// and papers listings, `portal_api_base` the study-group listing.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub api_base: String,
    pub portal_api_base: String,
    pub study_groups_timeout_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            portal_api_base: DEFAULT_PORTAL_API_BASE.to_string(),
            study_groups_timeout_secs: DEFAULT_STUDY_GROUPS_TIMEOUT_SECS,
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolves the effective config. Without an explicit path, a missing
    /// `pattern-hub.json` just yields the defaults; an explicit path must
    /// exist.
    pub fn resolve(path: Option<&str>) -> Result<HubConfig, HubError> {
        let config_path = match path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from("pattern-hub.json"),
        };

        if path.is_none() && !config_path.exists() {
            return Ok(HubConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| HubError::ConfigRead(config_path.clone()))?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|err| HubError::ConfigParse(err.to_string()))?;

        Ok(Self::resolve_file(file))
    }

    pub fn resolve_file(file: ConfigFile) -> HubConfig {
        let defaults = HubConfig::default();
        HubConfig {
            api_base: file.api_base.unwrap_or(defaults.api_base),
            portal_api_base: file.portal_api_base.unwrap_or(defaults.portal_api_base),
            study_groups_timeout_secs: file
                .study_groups_timeout_secs
                .unwrap_or(defaults.study_groups_timeout_secs),
        }
    }
}
