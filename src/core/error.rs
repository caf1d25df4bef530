use std::path::PathBuf;
use thiserror::Error;

use crate::core::install::InstallError;
use crate::core::launcher::{LauncherConfigError, LauncherInstanceError};

/// Central error type for the engine.
/// Fallible operations that cross module boundaries return
/// `Result<T, EngineError>`.
#[derive(Debug, Error)]
pub enum EngineError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Settings ────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Discovery ───────────────────────────────────────
    #[error(transparent)]
    Install(#[from] InstallError),

    #[error(transparent)]
    LauncherConfig(#[from] LauncherConfigError),

    #[error(transparent)]
    LauncherInstance(#[from] LauncherInstanceError),

    // ── Resource loading ────────────────────────────────
    #[error("no jar on disk for version {version} of {owner}, and no usable fallback")]
    MissingVersionJar { owner: String, version: String },

    #[error("no full-release version 1.9 or newer is installed anywhere")]
    ReferenceVersionUnavailable,
}

/// Convenience alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
