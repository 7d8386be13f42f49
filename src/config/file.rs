//! Configuration file management
//!
//! Handles finding, loading, and validating configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::output::OutputFormat;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./cuisine-tour.yaml",
    "./cuisine-tour.yml",
    "./.cuisine-tour.yaml",
];

/// Application settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// API base URL
    pub base_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Default output format
    pub format: String,

    /// Enable verbose logging by default
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            format: "table".to_string(),
            verbose: false,
        }
    }
}

/// Full configuration file structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Application settings
    #[serde(default)]
    pub app: AppConfig,
}

impl ConfigFile {
    /// Create a new config file with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Load configuration from default location, falling back to defaults
    /// when no file is present
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml_file(path) {
            serde_yaml::to_string(self).context("Failed to serialize config")?
        } else {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.app.base_url.starts_with("http://") && !self.app.base_url.starts_with("https://")
        {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.app.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        if OutputFormat::from_str(&self.app.format).is_none() {
            anyhow::bail!(
                "Unknown output format '{}'. Use table, json, json-pretty, csv, or summary",
                self.app.format
            );
        }

        Ok(())
    }

    /// Generate example configuration
    pub fn example() -> Self {
        Self {
            app: AppConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 10,
                format: "table".to_string(),
                verbose: false,
            },
        }
    }
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_default() {
        let config = ConfigFile::default();
        assert_eq!(config.app.base_url, "http://localhost:3000/api");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_save_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = ConfigFile::example();
        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.app.base_url, config.app.base_url);
        assert_eq!(loaded.app.timeout_secs, 10);
    }

    #[test]
    fn test_config_file_save_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ConfigFile::example();
        config.save(&path).unwrap();

        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.app.base_url, config.app.base_url);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = ConfigFile::default();
        config.app.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ConfigFile::default();
        config.app.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut config = ConfigFile::default();
        config.app.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "app: [not, a, map]").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }
}
