use std::path::{Path, PathBuf};

use tracing::warn;

use super::cfg::read_cfg;
use super::config::LauncherConfig;
use super::{scan_jar_versions, version_jar_path};
use crate::core::error::{EngineError, EngineResult};
use crate::core::loader::{LayerPlan, ResourceLoader};
use crate::core::version::GameVersion;

/// Why a launcher instance cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum LauncherInstanceError {
    #[error("instance.cfg not found: {0:?}")]
    MissingInstanceConfig(PathBuf),

    #[error("failed to read instance config {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("instance {0:?} has no IntendedVersion")]
    MissingVersion(PathBuf),
}

/// One launcher-managed instance: a single pinned version plus its own
/// saves and mods directories.
///
/// Immutable value record. It carries the owning launcher's shared
/// `versions/` directory by value, so it stays valid on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherInstance {
    pub version: String,
    pub display_name: String,
    pub instance_dir: PathBuf,
    pub save_file_dir: PathBuf,
    pub mods_dir: PathBuf,
    versions_dir: PathBuf,
}

impl LauncherInstance {
    /// Parse `<dir>/instance.cfg`. Fails when the file is absent or does
    /// not pin a version.
    pub fn open(config: &LauncherConfig, dir: &Path) -> Result<Self, LauncherInstanceError> {
        let instance_cfg = dir.join("instance.cfg");
        if !instance_cfg.exists() {
            return Err(LauncherInstanceError::MissingInstanceConfig(instance_cfg));
        }
        let values = read_cfg(&instance_cfg).map_err(|source| LauncherInstanceError::Unreadable {
            path: instance_cfg.clone(),
            source,
        })?;

        let version = values.get("IntendedVersion").cloned().unwrap_or_default();
        if version.is_empty() {
            return Err(LauncherInstanceError::MissingVersion(dir.to_path_buf()));
        }
        let display_name = values
            .get("name")
            .cloned()
            .unwrap_or_else(|| "(unnamed)".to_string());

        Ok(Self {
            version,
            display_name,
            instance_dir: dir.to_path_buf(),
            save_file_dir: dir.join("minecraft").join("saves"),
            mods_dir: dir.join("minecraft").join("mods"),
            versions_dir: config.versions_dir.clone(),
        })
    }

    /// Jar for the pinned version in the launcher's shared versions tree.
    pub fn version_jar_path(&self) -> PathBuf {
        version_jar_path(&self.versions_dir, &self.version)
    }

    /// Assemble this instance's asset search path. `resource_pack` is a
    /// full path here; launcher packs are not tied to an install root.
    /// The instance's mods directory is always the trailing layer.
    pub fn resource_loader(
        &self,
        resource_pack: Option<&Path>,
        reference_jar: Option<&Path>,
    ) -> EngineResult<ResourceLoader> {
        let mut jar_path = self.version_jar_path();
        let mut substituted_version = None;
        if !jar_path.exists() {
            match scan_jar_versions(&self.versions_dir).into_iter().next() {
                Some(fallback) => {
                    warn!(
                        "Version {} not found for instance {}, falling back to {}",
                        self.version, self.display_name, fallback
                    );
                    jar_path = version_jar_path(&self.versions_dir, &fallback);
                    substituted_version = Some(fallback);
                }
                None => {
                    return Err(EngineError::MissingVersionJar {
                        owner: self.display_name.clone(),
                        version: self.version.clone(),
                    })
                }
            }
        }

        ResourceLoader::assemble(LayerPlan {
            resource_pack: resource_pack.map(Path::to_path_buf),
            jar_path,
            requested: GameVersion::parse(&self.version),
            reference_jar: reference_jar.map(Path::to_path_buf),
            mods_dir: Some(self.mods_dir.clone()),
            substituted_version,
        })
    }
}
