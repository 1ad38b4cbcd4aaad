// Settings store holding the persistent application configuration

use crate::constants;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Persistent application settings, stored as a JSON object.
///
/// Only `INSTALLED_APPS` is written. Every other key, and the order of all
/// keys, is carried through a load/save cycle unchanged.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsStore {
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Load the store at `path`, starting empty if the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let store = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Invalid settings store {}: {}", path.display(), e))?;
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| Error::write_failed(dir.display().to_string(), e))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|e| Error::write_failed(path.display().to_string(), e))?;
        Ok(())
    }

    pub fn installed_apps(&self) -> Option<&Value> {
        self.values.get(constants::INSTALLED_APPS_KEY)
    }

    /// Replace the installed apps with `plugins`. Any previous value, list or
    /// not, is discarded.
    pub fn set_installed_apps(&mut self, plugins: Vec<String>) {
        self.values.insert(
            constants::INSTALLED_APPS_KEY.to_string(),
            Value::from(plugins),
        );
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}
