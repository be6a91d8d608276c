use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Key the picker writes and the chat screen reads
pub const SCENARIO_KEY: &str = "echo.selectedScenario";

/// Tiny local key/value file used to hand the picked scenario to the chat
/// screen.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    path: PathBuf,
}

impl ScenarioStore {
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| anyhow!("Could not determine local data directory"))?;

        Ok(Self::at(data_dir.join("echo").join("local_storage.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save_scenario(&self, scenario: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(SCENARIO_KEY.to_string(), scenario.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        tracing::info!(scenario, path = %self.path.display(), "saved scenario selection");
        Ok(())
    }

    pub fn load_scenario(&self) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(SCENARIO_KEY))
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
