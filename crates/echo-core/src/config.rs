use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Result, anyhow};

use crate::dispatch::DEFAULT_TIMEOUT;
use crate::selection::{Selection, DEFAULT_SCENARIO, DEFAULT_TONE};
use crate::templater::PhrasingProfile;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub use_mock: Option<bool>,
    pub phrasing: Option<PhrasingProfile>,
    pub default_tone: Option<String>,
    pub default_scenario: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    /// Apply `ECHO_API_URL` and `USE_MOCK` from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("ECHO_API_URL") {
            if !url.trim().is_empty() {
                self.api_url = Some(url);
            }
        }
        if let Ok(flag) = std::env::var("USE_MOCK") {
            self.use_mock = Some(flag == "true");
        }
        self
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn use_mock(&self) -> bool {
        self.use_mock.unwrap_or(false)
    }

    pub fn phrasing(&self) -> PhrasingProfile {
        self.phrasing.unwrap_or_default()
    }

    pub fn initial_selection(&self) -> Selection {
        Selection {
            tone: self.default_tone.clone().unwrap_or_else(|| DEFAULT_TONE.to_string()),
            scenario: self
                .default_scenario
                .clone()
                .unwrap_or_else(|| DEFAULT_SCENARIO.to_string()),
        }
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("echo").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(70));
        assert!(!config.use_mock());
        assert_eq!(config.phrasing(), PhrasingProfile::Standard);
        assert_eq!(config.initial_selection(), Selection::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "api_url": "https://echo.example.com",
                "timeout_secs": 15,
                "use_mock": true,
                "phrasing": "casual",
                "default_tone": "Friendly"
            }"#,
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url(), "https://echo.example.com");
        assert_eq!(loaded.timeout(), Duration::from_secs(15));
        assert!(loaded.use_mock());
        assert_eq!(loaded.phrasing(), PhrasingProfile::Casual);
        assert_eq!(loaded.initial_selection().tone, "Friendly");
        assert_eq!(loaded.initial_selection().scenario, "general");
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = Config {
            timeout_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_phrasing_reads_lowercase() {
        let config: Config = serde_json::from_str(r#"{"phrasing":"casual"}"#).unwrap();
        assert_eq!(config.phrasing(), PhrasingProfile::Casual);
    }
}
