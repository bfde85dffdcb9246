//! Configuration management for Geoscan.
//!
//! Configuration is loaded from the platform config directory with defaults
//! for every field, so an absent or partial file is fine.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Geoscan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Traversal settings
    pub scan: ScanConfig,

    /// Report settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.geoscan.geoscan/config.toml
    /// - Linux: ~/.config/geoscan/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\geoscan\config\config.toml
    ///
    /// Falls back to ~/.geoscan/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "geoscan", "geoscan")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                let home = shellexpand::tilde("~").into_owned();
                PathBuf::from(home).join(".geoscan").join("config.toml")
            })
    }

    /// Write the config as TOML to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.scan.extensions,
            vec![".jpg", ".jpeg", ".png", ".gif"]
        );
        assert!(!config.scan.follow_links);
        assert!(config.output.csv);
        assert!(!config.output.html);
        assert_eq!(config.output.csv_file_name, "lat_long.csv");
        assert_eq!(config.output.html_file_name, "lat_long.html");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[scan]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("[output]\nhtml = true\n").unwrap();
        assert!(config.output.html);
        assert!(config.output.csv);
        assert_eq!(config.scan.extensions.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\nextensions = [\".JPG\"]\nfollow_links = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scan.extensions, vec![".JPG"]);
        assert!(config.scan.follow_links);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.output.html = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.output.html);
        assert_eq!(loaded.output.csv_file_name, "lat_long.csv");
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let err = Config::from_toml("[scan\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/geoscan.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_default_path_file_name() {
        assert!(Config::default_path().ends_with("config.toml"));
    }
}
