//! Configuration management for larder.
//!
//! Configuration is read from `~/.config/larder/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::domain::Mode;
use crate::views::SortMode;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub list: ListConfig,
}

/// Where the database lives.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
}

/// List presentation defaults, used when the matching CLI flag is absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Scope applied by default. Unset means every item is shown.
    pub default_mode: Option<Mode>,
    pub default_sort: SortMode,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. If the config file exists but is invalid, returns an
    /// error. Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/larder/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("larder").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Larder configuration

[storage]
# Database file path. Defaults to the platform data directory
# (e.g. ~/.local/share/larder/larder.db).
# path = "/home/me/larder.db"

[list]
# Scope applied when --mode is not given: "grocery" or "home".
# Leave unset to show every item.
# default_mode = "grocery"

# Ordering applied when --sort is not given: "category" or "alphabetical".
default_sort = "category"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.list.default_sort, SortMode::Category);
        assert_eq!(config.list.default_mode, None);
        assert_eq!(config.storage.path, None);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[list]
default_mode = "home"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        // Custom value
        assert_eq!(config.list.default_mode, Some(Mode::Home));
        // Default values
        assert_eq!(config.list.default_sort, SortMode::Category);
        assert_eq!(config.storage.path, None);
    }

    #[test]
    fn test_empty_config() {
        let content = "";
        let config: Config = toml::from_str(content).expect("Empty config should work");

        assert_eq!(config.list.default_mode, None);
        assert_eq!(config.list.default_sort, SortMode::Category);
    }

    #[test]
    fn test_invalid_mode_is_an_error() {
        let content = r##"
[list]
default_mode = "garage"
"##;
        assert!(toml::from_str::<Config>(content).is_err());
    }
}
