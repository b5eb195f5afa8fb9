use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Host configuration for the Links widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application used to open links; the system default when unset
    #[serde(default)]
    pub browser: Option<String>,

    /// File holding the serialized widget state
    #[serde(default)]
    pub state_file: Option<PathBuf>,

    /// Pretty-print the state file
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: None,
            state_file: None,
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        // An empty or comment-only file parses to null
        if contents.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from default location (~/.config/links-widget/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::config_path();

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path, e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// The configured state file, or the default data location
    pub fn state_path(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(crate::utils::default_state_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.browser, None);
        assert_eq!(config.state_file, None);
        assert!(config.pretty);
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        let original = Config {
            browser: Some("firefox".to_string()),
            state_file: Some(PathBuf::from("/tmp/links.json")),
            pretty: false,
        };

        original.save_to_path(config_path).unwrap();
        let loaded = Config::load_from_path(config_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "invalid: yaml: content:").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "browser: chromium\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.browser.as_deref(), Some("chromium"));
        // Should use defaults for missing fields
        assert_eq!(config.state_file, None);
        assert!(config.pretty);
    }

    #[test]
    fn test_load_comment_only_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "# Empty config\n").unwrap();

        assert_eq!(Config::load_from_path(config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_state_path_prefers_configured_file() {
        let config = Config {
            state_file: Some(PathBuf::from("/srv/dash/links.json")),
            ..Config::default()
        };
        assert_eq!(config.state_path(), PathBuf::from("/srv/dash/links.json"));
    }
}
