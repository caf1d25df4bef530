// ─── mcresolve Core ───
// Synchronous discovery of game installations and assembly of the layered
// asset search paths consumed by the asset-composition component.
//
// Architecture:
//   core/
//     version   — version id parsing + usability policy
//     install   — conventional install roots + the group orchestrator
//     launcher  — MultiMC-style launcher configs and instances
//     loader    — ordered archive-layer assembly + content digests
//     settings  — persisted settings document
//     paths     — platform-default install location
//     error     — central error taxonomy

pub mod error;
pub mod install;
pub mod launcher;
pub mod loader;
pub mod paths;
pub mod settings;
pub mod version;
