use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::{EngineError, EngineResult};

/// One persisted conventional-installation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallEntry {
    pub name: String,
    pub path: PathBuf,
}

/// One persisted launcher-config entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfigEntry {
    #[serde(rename = "configFile")]
    pub config_file: PathBuf,
}

/// The engine's persisted settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub installations: Vec<InstallEntry>,
    pub launcher_configs: Vec<LauncherConfigEntry>,
    pub current_install_path: PathBuf,
    pub current_version: String,
    pub current_resource_pack: String,
    pub allow_experimental_versions: bool,
}

/// Disk-backed settings store. Loading never fails: a missing or corrupt
/// document yields defaults. Saving rewrites the whole document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    pub data: Settings,
}

impl SettingsStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Corrupt settings at {:?}, starting fresh: {}", path, e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        };
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> EngineResult<()> {
        let payload = serde_json::to_vec_pretty(&self.data)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EngineError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, payload).map_err(|source| EngineError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_document_loads_as_default() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json"));
        assert!(store.data.installations.is_empty());
        assert!(!store.data.allow_experimental_versions);
    }

    #[test]
    fn corrupt_document_loads_as_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, b"{ not json").unwrap();
        let store = SettingsStore::load(&path);
        assert!(store.data.installations.is_empty());
    }

    #[test]
    fn launcher_entries_persist_under_their_wire_name() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::load(dir.path().join("settings.json"));
        store.data.launcher_configs.push(LauncherConfigEntry {
            config_file: PathBuf::from("/opt/mmc/multimc.cfg"),
        });
        store.save().unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("configFile"));

        let reloaded = SettingsStore::load(store.path());
        assert_eq!(reloaded.data.launcher_configs, store.data.launcher_configs);
    }
}
