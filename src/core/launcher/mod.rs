mod cfg;
mod config;
mod instance;

pub use config::{LauncherConfig, LauncherConfigError};
pub use instance::{LauncherInstance, LauncherInstanceError};

use std::path::{Path, PathBuf};

/// Version ids under a shared `versions/` tree that have their jar on
/// disk, in directory-listing order. The launcher manages this tree
/// itself, so no usability filter applies here.
pub(crate) fn scan_jar_versions(versions_dir: &Path) -> Vec<String> {
    let entries = match std::fs::read_dir(versions_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|v| version_jar_path(versions_dir, v).exists())
        .collect()
}

/// `<versions_dir>/<v>/<v>.jar`; path composition only.
pub(crate) fn version_jar_path(versions_dir: &Path, version: &str) -> PathBuf {
    versions_dir.join(version).join(format!("{version}.jar"))
}
