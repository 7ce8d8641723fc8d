use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::registry::{self, City};

/// Timezone sent to the forecast endpoint when none is configured.
pub const DEFAULT_TIMEZONE: &str = "America/Guayaquil";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "guayaquil"
/// timezone = "America/Guayaquil"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// City shown when the user does not pick one, e.g. "quito".
    pub default_city: Option<String>,

    /// IANA timezone passed to the forecast endpoint.
    pub timezone: Option<String>,

    /// API key for the chat-assistant integration. Stored here so the file
    /// survives upgrades; the assistant itself is not part of the dashboard
    /// core.
    pub assistant_api_key: Option<String>,
}

impl Config {
    /// The configured default city, falling back to the registry default
    /// when unset or no longer registered. A stale configured city should
    /// not kill the dashboard, so the fallback is logged, not an error.
    pub fn resolved_city(&self) -> &'static City {
        match self.default_city.as_deref() {
            None => registry::default_city(),
            Some(key) => registry::find(key).unwrap_or_else(|| {
                tracing::warn!(city = key, "configured default city is not registered");
                registry::default_city()
            }),
        }
    }

    pub fn resolved_timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skywatch", "skywatch")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.resolved_city().key, "guayaquil");
        assert_eq!(cfg.resolved_timezone(), DEFAULT_TIMEZONE);
    }

    #[test]
    fn configured_city_and_timezone_win() {
        let cfg = Config {
            default_city: Some("cuenca".to_string()),
            timezone: Some("America/Lima".to_string()),
            assistant_api_key: None,
        };
        assert_eq!(cfg.resolved_city().key, "cuenca");
        assert_eq!(cfg.resolved_timezone(), "America/Lima");
    }

    #[test]
    fn unregistered_city_falls_back_to_default() {
        let cfg = Config { default_city: Some("atlantis".to_string()), ..Config::default() };
        assert_eq!(cfg.resolved_city().key, "guayaquil");
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            default_city: Some("manta".to_string()),
            timezone: None,
            assistant_api_key: Some("secret".to_string()),
        };

        let text = toml::to_string_pretty(&cfg).expect("config must serialize");
        let back: Config = toml::from_str(&text).expect("config must parse back");

        assert_eq!(back.default_city.as_deref(), Some("manta"));
        assert_eq!(back.timezone, None);
        assert_eq!(back.assistant_api_key.as_deref(), Some("secret"));
    }
}
