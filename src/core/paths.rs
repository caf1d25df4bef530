use std::path::PathBuf;

/// Platform-default location of the conventional game installation:
/// `%APPDATA%\.minecraft` on Windows, `~/Library/Application Support/minecraft`
/// on macOS, `~/.minecraft` elsewhere.
///
/// This is a probe target only. The directory may not exist; callers
/// validate with [`Installation::check_usable`](crate::core::install::Installation::check_usable).
pub fn default_install_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minecraft")
    } else if cfg!(target_os = "windows") {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".minecraft")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".minecraft")
    }
}
