use crate::{Error, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "WALINK_CONFIG";
const APP_DIR: &str = "walink";
const FALLBACK_DIR: &str = ".walink";
const MAX_CLOCK_REFRESH_SECS: u64 = 86_400;
const MAX_RESET_AFTER_MS: u64 = 3_600_000;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. WALINK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.walink/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join(APP_DIR).join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(FALLBACK_DIR).join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Directory for the interactive session log file.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join(APP_DIR));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(FALLBACK_DIR));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Fixed UTC offset of the preview clock, `+HH:MM` / `-HH:MM`.
    pub utc_offset: String,
    pub clock_refresh_secs: u64,
    /// Narrowest terminal (in columns) that still shows the phone preview.
    pub min_width: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            utc_offset: "-03:00".to_string(),
            clock_refresh_secs: 60,
            min_width: 90,
        }
    }
}

impl PreviewConfig {
    pub fn offset(&self) -> Result<FixedOffset> {
        self.utc_offset.parse::<FixedOffset>().map_err(|e| {
            Error::Config(format!(
                "preview.utc_offset '{}' is not a valid offset: {}",
                self.utc_offset, e
            ))
        })
    }

    pub fn clock_refresh(&self) -> Duration {
        Duration::from_secs(self.clock_refresh_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub reset_after_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            reset_after_ms: 2000,
        }
    }
}

impl ClipboardConfig {
    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preview: PreviewConfig,
    pub clipboard: ClipboardConfig,
    pub log: LogConfig,
}

impl Config {
    /// Missing file means defaults; a present file must parse and validate.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.preview.offset()?;

        if !(1..=MAX_CLOCK_REFRESH_SECS).contains(&self.preview.clock_refresh_secs) {
            return Err(Error::Config(format!(
                "preview.clock_refresh_secs must be between 1 and {}",
                MAX_CLOCK_REFRESH_SECS
            )));
        }

        if self.clipboard.reset_after_ms > MAX_RESET_AFTER_MS {
            return Err(Error::Config(format!(
                "clipboard.reset_after_ms must be at most {}",
                MAX_RESET_AFTER_MS
            )));
        }

        Ok(())
    }

    /// Log file for the interactive UI: `log.file` or `<data_dir>/walink.log`.
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log.file {
            Some(file) => Ok(file.clone()),
            None => Ok(resolve_data_dir()?.join("walink.log")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.preview.utc_offset, "-03:00");
        assert_eq!(config.preview.clock_refresh(), Duration::from_secs(60));
        assert_eq!(config.clipboard.reset_after(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_offset_is_three_hours_west() {
        let offset = PreviewConfig::default().offset().unwrap();
        assert_eq!(offset.local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.preview.min_width = 120;
        config.clipboard.reset_after_ms = 500;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml"))?;
        assert_eq!(loaded, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[preview]\nutc_offset = \"+01:00\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.preview.utc_offset, "+01:00");
        assert_eq!(loaded.preview.min_width, 90);
        assert_eq!(loaded.clipboard, ClipboardConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_offset_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[preview]\nutc_offset = \"brasilia\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_zero_refresh_is_rejected() {
        let mut config = Config::default();
        config.preview.clock_refresh_secs = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_refresh_longer_than_a_day_is_rejected() {
        let mut config = Config::default();
        config.preview.clock_refresh_secs = MAX_CLOCK_REFRESH_SECS;
        assert!(config.validate().is_ok());

        config.preview.clock_refresh_secs = u64::MAX;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_huge_reset_window_is_rejected() {
        let mut config = Config::default();
        config.clipboard.reset_after_ms = u64::MAX;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/walink-test/config.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/walink-test/config.toml"));
        Ok(())
    }
}
