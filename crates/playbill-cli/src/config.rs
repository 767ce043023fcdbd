//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_ocr_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// CLI configuration, stored at `~/.playbill/config.toml`.
///
/// Only endpoints and file locations live here; the extraction settings
/// themselves are persisted in the store's sync scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the recognizer backend
    #[serde(default = "default_ocr_url")]
    pub ocr_url: String,

    /// Database file; defaults to `playbill.db` next to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("could not find home directory".into()))?;
        Ok(home.join(".playbill").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location when
    /// `path` is `None`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Effective database path.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => {
                let home = dirs::home_dir()
                    .ok_or_else(|| CliError::Config("could not find home directory".into()))?;
                Ok(home.join(".playbill").join("playbill.db"))
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr_url: default_ocr_url(),
            db_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.ocr_url, "http://127.0.0.1:5000");
        assert!(config.db_path.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.ocr_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "db_path = \"/tmp/playbill-test.db\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.ocr_url, "http://127.0.0.1:5000");
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/playbill-test.db")));
    }

    #[test]
    fn explicit_db_path_wins() {
        let config = Config {
            ocr_url: default_ocr_url(),
            db_path: Some(PathBuf::from("/data/playbill.db")),
        };
        assert_eq!(config.db_path().unwrap(), PathBuf::from("/data/playbill.db"));
    }
}
