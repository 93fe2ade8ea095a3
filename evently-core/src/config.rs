//! Global evently configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REFRESH_DELAY_MS;
use crate::error::{EventlyError, EventlyResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/evently";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_refresh_delay_ms() -> u64 {
    DEFAULT_REFRESH_DELAY_MS
}

fn is_default_refresh_delay(ms: &u64) -> bool {
    *ms == DEFAULT_REFRESH_DELAY_MS
}

/// Global configuration at ~/.config/evently/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventlyConfig {
    /// Where the catalog is stored
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Wait before `refresh` reloads the catalog
    #[serde(
        default = "default_refresh_delay_ms",
        skip_serializing_if = "is_default_refresh_delay"
    )]
    pub refresh_delay_ms: u64,
}

impl Default for EventlyConfig {
    fn default() -> Self {
        EventlyConfig {
            data_dir: default_data_dir(),
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
        }
    }
}

impl EventlyConfig {
    pub fn config_path() -> EventlyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventlyError::Config("Could not determine config directory".into()))?
            .join("evently");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/evently/config.toml, creating a commented-out default on first run.
    pub fn load() -> EventlyResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> EventlyResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| EventlyError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventlyError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Save the current config to ~/.config/evently/config.toml
    pub fn save(&self) -> EventlyResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> EventlyResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EventlyError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventlyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| EventlyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventlyResult<()> {
        let contents = format!(
            "\
# evently configuration

# Where the event catalog is stored:
# data_dir = \"{}\"

# Milliseconds to wait before `evently refresh` reloads events:
# refresh_delay_ms = {}
",
            DEFAULT_DATA_DIR, DEFAULT_REFRESH_DELAY_MS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventlyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventlyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evently/config.toml");

        EventlyConfig::create_default_config(&path).unwrap();
        let config = EventlyConfig::load_from(&path).unwrap();

        assert_eq!(config, EventlyConfig::default());
        assert_eq!(config.refresh_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EventlyConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, EventlyConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/evently\"\nrefresh_delay_ms = 0\n").unwrap();

        let config = EventlyConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/evently"));
        assert_eq!(config.refresh_delay(), Duration::ZERO);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = EventlyConfig {
            data_dir: PathBuf::from("/srv/events"),
            refresh_delay_ms: 250,
        };

        config.save_to(&path).unwrap();
        assert_eq!(EventlyConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_defaults_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        EventlyConfig::default().save_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "");
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let config = EventlyConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
