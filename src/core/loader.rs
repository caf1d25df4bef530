use std::fs::File;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use tracing::{info, warn};

use crate::core::error::{EngineError, EngineResult};
use crate::core::version::GameVersion;

/// How a search-path member is read by the asset-composition component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// A zip/jar archive.
    Archive,
    /// A plain directory tree (a launcher instance's mods folder, or a
    /// mods folder probed next to a world).
    Directory,
}

/// One member of the ordered asset search path.
#[derive(Debug, Clone)]
pub struct ResourceLayer {
    pub source_path: PathBuf,
    pub kind: LayerKind,
    /// MD5 over the raw archive bytes. Directories are not hashed.
    pub content_digest: Option<String>,
}

/// An ordered list of asset layers. Earlier layers win; later layers are
/// fallbacks consulted only when an asset is not found before them.
#[derive(Debug, Clone, Default)]
pub struct ResourceLoader {
    layers: Vec<ResourceLayer>,
    substituted_version: Option<String>,
}

/// Input to [`ResourceLoader::assemble`], prepared by the owning
/// installation or launcher instance.
#[derive(Debug)]
pub(crate) struct LayerPlan {
    pub resource_pack: Option<PathBuf>,
    /// Resolved jar for the version being loaded (substitution already
    /// applied by the owner).
    pub jar_path: PathBuf,
    /// The version that was asked for, substitution or not.
    pub requested: GameVersion,
    pub reference_jar: Option<PathBuf>,
    pub mods_dir: Option<PathBuf>,
    pub substituted_version: Option<String>,
}

impl ResourceLoader {
    pub fn layers(&self) -> &[ResourceLayer] {
        &self.layers
    }

    /// Set when the requested version's jar was missing and another usable
    /// version was layered in its place.
    pub fn substituted_version(&self) -> Option<&str> {
        self.substituted_version.as_deref()
    }

    /// Append a mods directory as a trailing filesystem-backed layer.
    /// Existence is the consuming component's concern, not checked here.
    pub fn add_mods_dir(&mut self, path: &Path) {
        self.layers.push(ResourceLayer {
            source_path: path.to_path_buf(),
            kind: LayerKind::Directory,
            content_digest: None,
        });
    }

    /// Build the ordered search path: resource pack first (best effort),
    /// then the version jar, then the reference jar for every version that
    /// is not 1.9 itself, then the mods directory.
    pub(crate) fn assemble(plan: LayerPlan) -> EngineResult<Self> {
        let mut loader = Self {
            layers: Vec::new(),
            substituted_version: plan.substituted_version,
        };

        if let Some(pack) = &plan.resource_pack {
            loader.try_push_archive(pack);
        }

        loader.push_archive(&plan.jar_path)?;

        // 1.9 is the only version that ships multi-part block model
        // definitions of its own; everything else needs the reference
        // archive behind it.
        if plan.requested.pair() != (1, 9) {
            match &plan.reference_jar {
                Some(reference) => loader.push_archive(reference)?,
                None => return Err(EngineError::ReferenceVersionUnavailable),
            }
        }

        if let Some(mods_dir) = &plan.mods_dir {
            loader.add_mods_dir(mods_dir);
        }

        loader.log_search_path();
        Ok(loader)
    }

    /// A loader over exactly one archive.
    pub(crate) fn single_archive(path: &Path) -> EngineResult<Self> {
        let mut loader = Self::default();
        loader.push_archive(path)?;
        loader.log_search_path();
        Ok(loader)
    }

    fn push_archive(&mut self, path: &Path) -> EngineResult<()> {
        let digest = md5_digest(path)?;
        self.layers.push(ResourceLayer {
            source_path: path.to_path_buf(),
            kind: LayerKind::Archive,
            content_digest: Some(digest),
        });
        Ok(())
    }

    /// Resource packs are best effort: a pack that is not a readable
    /// archive is skipped and the loader assembles without it.
    fn try_push_archive(&mut self, path: &Path) {
        if !is_archive(path) {
            warn!("Failed to open resource pack {:?}, skipping it", path);
            return;
        }
        match md5_digest(path) {
            Ok(digest) => self.layers.push(ResourceLayer {
                source_path: path.to_path_buf(),
                kind: LayerKind::Archive,
                content_digest: Some(digest),
            }),
            Err(e) => warn!("Failed to read resource pack {:?}, skipping it: {}", path, e),
        }
    }

    fn log_search_path(&self) {
        let summary = self
            .layers
            .iter()
            .map(|layer| match &layer.content_digest {
                Some(digest) => format!("{} ({})", layer.source_path.display(), digest),
                None => format!("{} (directory)", layer.source_path.display()),
            })
            .collect::<Vec<_>>()
            .join(",\n");
        info!("Assembled resource loader with search path:\n{}", summary);
    }
}

/// Structural archive check: the file opens and its central directory
/// parses. Contents are not inspected.
pub(crate) fn is_archive(path: &Path) -> bool {
    match File::open(path) {
        Ok(file) => zip::ZipArchive::new(file).is_ok(),
        Err(_) => false,
    }
}

fn md5_digest(path: &Path) -> EngineResult<String> {
    let bytes = std::fs::read(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Md5::new();
    hasher.update(bytes);
    Ok(format!("{:x}", hasher.finalize()))
}
