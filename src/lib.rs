pub mod core;

pub use crate::core::error::{EngineError, EngineResult};
pub use crate::core::install::{
    InstallError, InstallGroup, InstallSource, Installation, LoaderRequest, DEFAULT_INSTALL_NAME,
};
pub use crate::core::launcher::{
    LauncherConfig, LauncherConfigError, LauncherInstance, LauncherInstanceError,
};
pub use crate::core::loader::{LayerKind, ResourceLayer, ResourceLoader};
pub use crate::core::paths::default_install_dir;
pub use crate::core::settings::{InstallEntry, LauncherConfigEntry, Settings, SettingsStore};
pub use crate::core::version::GameVersion;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for embedders that do not bring their own
/// subscriber. Call at most once per process.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mcresolve=debug")),
        )
        .init();
}
