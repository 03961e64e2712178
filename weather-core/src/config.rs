use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::time::DEFAULT_TIMEZONE;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const TIMEZONE_ENV: &str = "WEATHER_TIMEZONE";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// timezone = "Asia/Kolkata"
/// ```
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeatherMap `appid`.
    pub api_key: Option<String>,

    /// IANA zone sunrise/sunset are shown in.
    pub timezone: Option<String>,

    /// Override for the API host, mostly useful against a local mock.
    pub base_url: Option<String>,

    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timezone", &self.timezone)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlay values injected through the environment.
    ///
    /// Takes a lookup function so callers decide where variables come from.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(zone) = lookup(TIMEZONE_ENV).filter(|v| !v.trim().is_empty()) {
            self.timezone = Some(zone);
        }
        self
    }

    /// Load from disk and overlay the process environment.
    pub fn load_with_env() -> Result<Self> {
        Ok(Self::load()?.with_env(|name| std::env::var(name).ok()))
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `weather configure` or set {API_KEY_ENV}."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The zone local times are rendered in; defaults to Asia/Kolkata.
    pub fn display_zone(&self) -> Result<Tz> {
        match self.timezone.as_deref() {
            None => Ok(DEFAULT_TIMEZONE),
            Some(name) => parse_timezone(name),
        }
    }

    pub fn set_timezone(&mut self, zone: Tz) {
        self.timezone = Some(zone.name().to_string());
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Parse an IANA zone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow!("Unknown timezone '{name}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("weather configure"));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let cfg = cfg.with_env(env(&[
            (API_KEY_ENV, "ENV_KEY"),
            (TIMEZONE_ENV, "Europe/Berlin"),
        ]));

        assert_eq!(cfg.api_key().unwrap(), "ENV_KEY");
        assert_eq!(cfg.display_zone().unwrap(), chrono_tz::Europe::Berlin);
    }

    #[test]
    fn blank_env_value_does_not_clobber_file_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let cfg = cfg.with_env(env(&[(API_KEY_ENV, "  ")]));
        assert_eq!(cfg.api_key().unwrap(), "FILE_KEY");
    }

    #[test]
    fn display_zone_defaults_and_validates() {
        let mut cfg = Config::default();
        assert_eq!(cfg.display_zone().unwrap(), chrono_tz::Asia::Kolkata);

        cfg.timezone = Some("Mars/Olympus_Mons".into());
        let err = cfg.display_zone().unwrap_err();
        assert!(err.to_string().contains("Unknown timezone"));

        cfg.set_timezone(chrono_tz::America::Chicago);
        assert_eq!(cfg.timezone.as_deref(), Some("America/Chicago"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("SUPER_SECRET".into());

        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("SUPER_SECRET"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.set_timezone(chrono_tz::Asia::Tokyo);
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key().unwrap(), "KEY");
        assert_eq!(loaded.display_zone().unwrap(), chrono_tz::Asia::Tokyo);
        assert_eq!(loaded.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
    }
}
