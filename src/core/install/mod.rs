mod group;
mod model;

pub use group::{InstallGroup, InstallSource, LoaderRequest, DEFAULT_INSTALL_NAME};
pub use model::{InstallError, Installation};
