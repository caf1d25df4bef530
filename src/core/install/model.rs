use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::error::{EngineError, EngineResult};
use crate::core::loader::{LayerPlan, ResourceLoader};
use crate::core::version::GameVersion;

/// Why a conventional installation cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("game folder does not exist: {0:?}")]
    MissingRoot(PathBuf),

    #[error("versions folder does not exist: {0:?}")]
    MissingVersionsDir(PathBuf),

    #[error("no usable game versions under {0:?}")]
    NoUsableVersions(PathBuf),
}

/// One conventional installation root (a `.minecraft`-style tree).
///
/// Immutable value record. Renames and re-paths are replace operations on
/// the owning [`InstallGroup`](super::InstallGroup), which also persists
/// them; the root path is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub name: String,
    pub root: PathBuf,
}

impl Installation {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    pub fn versions_dir(&self) -> PathBuf {
        self.root.join("versions")
    }

    /// Validate that this root is a usable installation, logging the
    /// versions it finds. Must pass before the installation is retained.
    pub fn check_usable(&self, allow_experimental: bool) -> Result<(), InstallError> {
        info!("Checking install at {:?}", self.root);
        if !self.root.exists() {
            return Err(InstallError::MissingRoot(self.root.clone()));
        }
        let versions_dir = self.versions_dir();
        if !versions_dir.exists() {
            return Err(InstallError::MissingVersionsDir(versions_dir));
        }
        let versions = self.versions(allow_experimental);
        if versions.is_empty() {
            return Err(InstallError::NoUsableVersions(versions_dir));
        }
        info!("Found versions: {:?}", versions);
        Ok(())
    }

    /// Installed version ids in directory-listing order. A version counts
    /// only when its jar is on disk and it passes the usability policy
    /// (or experimental versions are allowed).
    pub fn versions(&self, allow_experimental: bool) -> Vec<String> {
        let entries = match std::fs::read_dir(self.versions_dir()) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|v| self.version_jar_path(v).exists())
            .filter(|v| allow_experimental || GameVersion::parse(v).is_usable())
            .collect()
    }

    /// `<root>/versions/<v>/<v>.jar`; path composition only.
    pub fn version_jar_path(&self, version: &str) -> PathBuf {
        self.versions_dir()
            .join(version)
            .join(format!("{version}.jar"))
    }

    pub fn resource_pack_path(&self, file_name: &str) -> PathBuf {
        self.root.join("resourcepacks").join(file_name)
    }

    /// File names of the resource packs shipped inside this root.
    pub fn resource_packs(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(self.root.join("resourcepacks")) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    pub fn save_dirs(&self) -> Vec<PathBuf> {
        vec![self.root.join("saves")]
    }

    /// Assemble the asset search path for one of this root's versions.
    /// `resource_pack` is a file name under `resourcepacks/`. When the
    /// requested version's jar is missing, the first usable version is
    /// layered instead and reported via
    /// [`ResourceLoader::substituted_version`].
    pub fn resource_loader(
        &self,
        version: &str,
        resource_pack: Option<&str>,
        reference_jar: Option<&Path>,
        allow_experimental: bool,
    ) -> EngineResult<ResourceLoader> {
        let mut jar_path = self.version_jar_path(version);
        let mut substituted_version = None;
        if !jar_path.exists() {
            match self.versions(allow_experimental).into_iter().next() {
                Some(fallback) => {
                    warn!(
                        "Version {} not found in {:?}, falling back to {}",
                        version, self.root, fallback
                    );
                    jar_path = self.version_jar_path(&fallback);
                    substituted_version = Some(fallback);
                }
                None => {
                    return Err(EngineError::MissingVersionJar {
                        owner: self.name.clone(),
                        version: version.to_string(),
                    })
                }
            }
        }

        ResourceLoader::assemble(LayerPlan {
            resource_pack: resource_pack.map(|f| self.resource_pack_path(f)),
            jar_path,
            requested: GameVersion::parse(version),
            reference_jar: reference_jar.map(Path::to_path_buf),
            mods_dir: None,
            substituted_version,
        })
    }
}
