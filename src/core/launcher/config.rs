use std::path::{Path, PathBuf};

use tracing::warn;

use super::cfg::read_cfg;
use super::instance::LauncherInstance;
use super::{scan_jar_versions, version_jar_path};

/// Why a launcher config cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum LauncherConfigError {
    #[error("launcher config file does not exist: {0:?}")]
    MissingConfig(PathBuf),

    #[error("failed to read launcher config {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("launcher config {0:?} does not set InstanceDir")]
    MissingInstanceDir(PathBuf),
}

/// One third-party launcher installation, located by its main cfg file.
///
/// Instances live under `instance_dir`; every instance shares the single
/// `versions/` tree next to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub config_path: PathBuf,
    pub instance_dir: PathBuf,
    pub versions_dir: PathBuf,
    pub display_name: String,
}

impl LauncherConfig {
    /// Parse the launcher's cfg file. Fails when the file is missing or
    /// unreadable, or when it does not name an instance directory.
    /// A relative `InstanceDir` resolves against the config's own folder.
    pub fn open(config_path: impl Into<PathBuf>) -> Result<Self, LauncherConfigError> {
        let config_path = config_path.into();
        if !config_path.exists() {
            return Err(LauncherConfigError::MissingConfig(config_path));
        }
        let values = read_cfg(&config_path).map_err(|source| LauncherConfigError::Unreadable {
            path: config_path.clone(),
            source,
        })?;

        let instance_dir = values.get("InstanceDir").map(String::as_str).unwrap_or("");
        if instance_dir.is_empty() {
            return Err(LauncherConfigError::MissingInstanceDir(config_path));
        }

        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let instance_dir = if Path::new(instance_dir).is_absolute() {
            PathBuf::from(instance_dir)
        } else {
            base_dir.join(instance_dir)
        };
        let display_name = base_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "(launcher)".to_string());

        Ok(Self {
            versions_dir: base_dir.join("versions"),
            config_path,
            instance_dir,
            display_name,
        })
    }

    /// Version ids available to this launcher's instances.
    pub fn versions(&self) -> Vec<String> {
        scan_jar_versions(&self.versions_dir)
    }

    /// Path composition only; the jar may not exist.
    pub fn version_jar_path(&self, version: &str) -> PathBuf {
        version_jar_path(&self.versions_dir, version)
    }

    /// Enumerate instances by re-scanning the instance directory on every
    /// call. Subdirectories that fail to parse are skipped with a warning;
    /// a single bad entry never aborts the scan.
    pub fn instances(&self) -> Vec<LauncherInstance> {
        let entries = match std::fs::read_dir(&self.instance_dir) {
            Ok(entries) => entries,
            Err(source) => {
                warn!(
                    "Cannot list launcher instances at {:?}: {}",
                    self.instance_dir, source
                );
                return Vec::new();
            }
        };
        entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter_map(|path| match LauncherInstance::open(self, &path) {
                Ok(instance) => Some(instance),
                Err(e) => {
                    warn!("Skipping launcher instance at {:?}: {}", path, e);
                    None
                }
            })
            .collect()
    }
}
