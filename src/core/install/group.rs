use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::model::{InstallError, Installation};
use crate::core::error::{EngineError, EngineResult};
use crate::core::launcher::{LauncherConfig, LauncherInstance};
use crate::core::loader::{is_archive, ResourceLoader};
use crate::core::paths::default_install_dir;
use crate::core::settings::{InstallEntry, LauncherConfigEntry, SettingsStore};
use crate::core::version::GameVersion;

/// Name given to the auto-discovered platform-default installation.
pub const DEFAULT_INSTALL_NAME: &str = "(Default)";

/// The closed set of things an asset search path can be built from:
/// a conventional install root, or a launcher-managed instance.
#[derive(Debug, Clone)]
pub enum InstallSource {
    Install(Installation),
    Instance(LauncherInstance),
}

/// Parameters for [`InstallSource::resource_loader`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderRequest<'a> {
    /// Version to load. `None` means the source's own choice: an
    /// instance's pinned version, an installation's first usable version.
    pub version: Option<&'a str>,
    /// For installations a file name under `resourcepacks/`; for
    /// instances a full path.
    pub resource_pack: Option<&'a str>,
    pub reference_jar: Option<&'a Path>,
    pub allow_experimental: bool,
}

impl InstallSource {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Install(install) => &install.name,
            Self::Instance(instance) => &instance.display_name,
        }
    }

    pub fn versions(&self, allow_experimental: bool) -> Vec<String> {
        match self {
            Self::Install(install) => install.versions(allow_experimental),
            Self::Instance(instance) => vec![instance.version.clone()],
        }
    }

    pub fn resource_loader(&self, request: &LoaderRequest) -> EngineResult<ResourceLoader> {
        match self {
            Self::Install(install) => {
                let version = match request.version {
                    Some(v) => v.to_string(),
                    None => install
                        .versions(request.allow_experimental)
                        .into_iter()
                        .next()
                        .ok_or_else(|| InstallError::NoUsableVersions(install.versions_dir()))?,
                };
                install.resource_loader(
                    &version,
                    request.resource_pack,
                    request.reference_jar,
                    request.allow_experimental,
                )
            }
            Self::Instance(instance) => instance.resource_loader(
                request.resource_pack.map(Path::new),
                request.reference_jar,
            ),
        }
    }
}

/// Everything the engine knows about game installations: the persisted
/// conventional roots, the persisted launcher configs, and the current
/// selection.
///
/// Constructed once by the embedding application and passed around by
/// reference; both candidate lists are re-persisted after every mutation.
#[derive(Debug)]
pub struct InstallGroup {
    settings: SettingsStore,
    installations: Vec<Installation>,
    launcher_configs: Vec<LauncherConfig>,
    default_probed: bool,
}

impl InstallGroup {
    /// Load persisted candidates, drop the unusable ones, reconcile the
    /// current-install pointer, and probe the platform-default root.
    pub fn load(settings: SettingsStore) -> Self {
        Self::load_with_default_dir(settings, Some(default_install_dir()))
    }

    /// [`InstallGroup::load`] with an injectable default-install location;
    /// `None` disables the probe. Lets tests control the probe target.
    pub fn load_with_default_dir(settings: SettingsStore, default_dir: Option<PathBuf>) -> Self {
        let mut group = Self {
            settings,
            installations: Vec::new(),
            launcher_configs: Vec::new(),
            default_probed: false,
        };

        let allow_experimental = group.allow_experimental();
        for entry in group.settings.data.installations.clone() {
            let install = Installation::new(entry.name, entry.path);
            match install.check_usable(allow_experimental) {
                Ok(()) => group.installations.push(install),
                Err(e) => warn!("Not using install {:?}: {}", install.root, e),
            }
        }

        for entry in group.settings.data.launcher_configs.clone() {
            match LauncherConfig::open(&entry.config_file) {
                Ok(config) => group.launcher_configs.push(config),
                Err(e) => warn!("Not using launcher config {:?}: {}", entry.config_file, e),
            }
        }

        if group.reconcile_current_install() {
            if let Err(e) = group.settings.save() {
                warn!("Failed to persist settings: {}", e);
            }
        }

        if let Some(dir) = default_dir {
            group.probe_default_install(dir);
        }

        group
    }

    // ── Accessors ───────────────────────────────────────

    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    pub fn launcher_configs(&self) -> &[LauncherConfig] {
        &self.launcher_configs
    }

    /// Launcher instances across all configs, re-enumerated from the
    /// filesystem on every call.
    pub fn instances(&self) -> Vec<LauncherInstance> {
        self.launcher_configs
            .iter()
            .flat_map(|config| config.instances())
            .collect()
    }

    /// Every loadable source: installations first, then launcher
    /// instances, in stored order.
    pub fn sources(&self) -> Vec<InstallSource> {
        self.installations
            .iter()
            .cloned()
            .map(InstallSource::Install)
            .chain(self.instances().into_iter().map(InstallSource::Instance))
            .collect()
    }

    pub fn get_install(&self, path: &Path) -> Option<&Installation> {
        self.installations.iter().find(|i| i.root == path)
    }

    /// The selected installation, falling back to the first one.
    pub fn current_install(&self) -> Option<&Installation> {
        let current = &self.settings.data.current_install_path;
        if !current.as_os_str().is_empty() {
            if let Some(install) = self.get_install(current) {
                return Some(install);
            }
        }
        self.installations.first()
    }

    pub fn allow_experimental(&self) -> bool {
        self.settings.data.allow_experimental_versions
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    // ── Mutations (each persists immediately) ───────────

    /// Validate and adopt a new conventional installation. The typed
    /// error carries the reason for display.
    pub fn add_install(&mut self, name: &str, root: impl Into<PathBuf>) -> EngineResult<()> {
        let install = Installation::new(name, root);
        install.check_usable(self.allow_experimental())?;
        self.installations.push(install);
        self.persist_lists()
    }

    /// Remove the installation rooted at `path` and rewrite the persisted
    /// list. The current-install pointer is reconciled if it was removed.
    pub fn remove_install(&mut self, path: &Path) -> EngineResult<()> {
        self.installations.retain(|i| i.root != path);
        self.reconcile_current_install();
        self.persist_lists()
    }

    /// Rename the installation rooted at `path` (replace-in-collection).
    pub fn rename_install(&mut self, path: &Path, new_name: &str) -> EngineResult<()> {
        for install in &mut self.installations {
            if install.root == path {
                *install = Installation::new(new_name, install.root.clone());
            }
        }
        self.persist_lists()
    }

    /// Re-root the installation at `old_path`. The replacement root must
    /// itself pass the usability check; the current-install pointer
    /// follows. Unknown paths are a no-op.
    pub fn relocate_install(
        &mut self,
        old_path: &Path,
        new_root: impl Into<PathBuf>,
    ) -> EngineResult<()> {
        let Some(index) = self.installations.iter().position(|i| i.root == old_path) else {
            return Ok(());
        };
        let replacement = Installation::new(self.installations[index].name.clone(), new_root);
        replacement.check_usable(self.allow_experimental())?;
        if self.settings.data.current_install_path == old_path {
            self.settings.data.current_install_path = replacement.root.clone();
        }
        self.installations[index] = replacement;
        self.persist_lists()
    }

    pub fn add_launcher_config(&mut self, config_path: impl Into<PathBuf>) -> EngineResult<()> {
        let config = LauncherConfig::open(config_path)?;
        self.launcher_configs.push(config);
        self.persist_lists()
    }

    pub fn remove_launcher_config(&mut self, index: usize) -> EngineResult<()> {
        if index < self.launcher_configs.len() {
            self.launcher_configs.remove(index);
        }
        self.persist_lists()
    }

    /// Select the installation the loader queries should use. Paths that
    /// do not name a known installation fall back like any stale pointer.
    pub fn set_current_install(&mut self, path: &Path) -> EngineResult<()> {
        self.settings.data.current_install_path = path.to_path_buf();
        self.reconcile_current_install();
        self.settings.save()
    }

    pub fn set_current_version(&mut self, version: &str) -> EngineResult<()> {
        self.settings.data.current_version = version.to_string();
        self.settings.save()
    }

    pub fn set_current_resource_pack(&mut self, pack: &str) -> EngineResult<()> {
        self.settings.data.current_resource_pack = pack.to_string();
        self.settings.save()
    }

    pub fn set_allow_experimental(&mut self, allow: bool) -> EngineResult<()> {
        self.settings.data.allow_experimental_versions = allow;
        self.settings.save()
    }

    // ── Cross-cutting queries ───────────────────────────

    /// Find one readable full-release 1.9+ jar across every known source,
    /// installations first, each version list in listing order. That
    /// archive supplies the multi-part block model definitions every
    /// other version lacks. `None` is the "not ready" signal, not an
    /// error.
    pub fn find_reference_jar(&self) -> Option<PathBuf> {
        let allow = self.allow_experimental();
        for install in &self.installations {
            for version in install.versions(allow) {
                if !GameVersion::parse(&version).is_full_release() {
                    continue;
                }
                let jar = install.version_jar_path(&version);
                if is_archive(&jar) {
                    return Some(jar);
                }
            }
        }
        for config in &self.launcher_configs {
            for version in config.versions() {
                if !GameVersion::parse(&version).is_full_release() {
                    continue;
                }
                let jar = config.version_jar_path(&version);
                if is_archive(&jar) {
                    return Some(jar);
                }
            }
        }
        None
    }

    /// Whether a reference jar exists at all. The embedding application
    /// is expected to prompt for an installation when this is false.
    pub fn is_ready(&self) -> bool {
        self.find_reference_jar().is_some()
    }

    /// Minimal loader over just the reference jar.
    pub fn default_resource_loader(&self) -> EngineResult<ResourceLoader> {
        let jar = self
            .find_reference_jar()
            .ok_or(EngineError::ReferenceVersionUnavailable)?;
        ResourceLoader::single_archive(&jar)
    }

    /// Loader for the persisted selection: current install, current
    /// version (first usable when unset), current resource pack. Falls
    /// back to the default loader when no installation is known.
    pub fn selected_resource_loader(&self) -> EngineResult<ResourceLoader> {
        let Some(install) = self.current_install() else {
            return self.default_resource_loader();
        };
        let allow = self.allow_experimental();
        let version = if self.settings.data.current_version.is_empty() {
            install
                .versions(allow)
                .into_iter()
                .next()
                .ok_or_else(|| InstallError::NoUsableVersions(install.versions_dir()))?
        } else {
            self.settings.data.current_version.clone()
        };
        let pack = self.settings.data.current_resource_pack.as_str();
        let pack = (!pack.is_empty()).then_some(pack);
        install.resource_loader(
            &version,
            pack,
            self.find_reference_jar().as_deref(),
            allow,
        )
    }

    /// Loader for a world on disk. A world inside a launcher instance's
    /// saves directory always gets that instance's loader, whatever the
    /// current selection. Any other world gets the selected loader plus a
    /// `mods/` directory probed two levels above the world. Both answers
    /// are re-derived from the filesystem on every call.
    pub fn resource_loader_for_world_path(&self, world: &Path) -> EngineResult<ResourceLoader> {
        for instance in self.instances() {
            if world.starts_with(&instance.save_file_dir) {
                return instance.resource_loader(None, self.find_reference_jar().as_deref());
            }
        }

        let mut loader = self.selected_resource_loader()?;
        let world_dir = if world.is_dir() {
            world
        } else {
            world.parent().unwrap_or(world)
        };
        if let Some(game_dir) = world_dir.parent().and_then(Path::parent) {
            let mods_dir = game_dir.join("mods");
            if mods_dir.is_dir() {
                info!("Loading mods from {:?}", mods_dir);
                loader.add_mods_dir(&mods_dir);
            }
        }
        Ok(loader)
    }

    // ── Internals ───────────────────────────────────────

    /// Probe the platform-default root and adopt it when it is usable and
    /// not already persisted (compared by its `{name, path}` entry). Runs
    /// at most once per group.
    fn probe_default_install(&mut self, dir: PathBuf) {
        if self.default_probed {
            return;
        }
        self.default_probed = true;

        let candidate = Installation::new(DEFAULT_INSTALL_NAME, dir);
        if let Err(e) = candidate.check_usable(self.allow_experimental()) {
            warn!("Default install not usable: {}", e);
            return;
        }

        let entry = InstallEntry {
            name: candidate.name.clone(),
            path: candidate.root.clone(),
        };
        let mut dirty = false;
        if !self.settings.data.installations.contains(&entry) {
            self.installations.push(candidate.clone());
            dirty = true;
        }
        if self.settings.data.current_install_path.as_os_str().is_empty() {
            self.settings.data.current_install_path = candidate.root;
            dirty = true;
        }
        if dirty {
            if let Err(e) = self.persist_lists() {
                warn!("Failed to persist settings: {}", e);
            }
        }
    }

    /// Restore the invariant that the current-install pointer names a
    /// member of the list (first installation, else empty). Returns
    /// whether the pointer changed; persisting is the caller's job.
    fn reconcile_current_install(&mut self) -> bool {
        let current = self.settings.data.current_install_path.clone();
        if !current.as_os_str().is_empty() && self.get_install(&current).is_some() {
            return false;
        }
        let fallback = self
            .installations
            .first()
            .map(|i| i.root.clone())
            .unwrap_or_default();
        if fallback == current {
            return false;
        }
        self.settings.data.current_install_path = fallback;
        true
    }

    /// Rewrite both persisted candidate lists from the live collections
    /// and save the whole document.
    fn persist_lists(&mut self) -> EngineResult<()> {
        self.settings.data.installations = self
            .installations
            .iter()
            .map(|i| InstallEntry {
                name: i.name.clone(),
                path: i.root.clone(),
            })
            .collect();
        self.settings.data.launcher_configs = self
            .launcher_configs
            .iter()
            .map(|c| LauncherConfigEntry {
                config_file: c.config_path.clone(),
            })
            .collect();
        info!(
            "Saved install settings: {} installs, {} launcher configs",
            self.settings.data.installations.len(),
            self.settings.data.launcher_configs.len()
        );
        self.settings.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::LayerKind;
    use crate::core::settings::Settings;
    use std::fs::File;
    use std::io::Write;
    use tempfile::{tempdir, TempDir};

    fn write_jar(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("assets/.keep", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"x").unwrap();
        writer.finish().unwrap();
    }

    fn make_install_root(root: &Path, versions: &[&str]) {
        std::fs::create_dir_all(root.join("versions")).unwrap();
        for v in versions {
            write_jar(&root.join("versions").join(v).join(format!("{v}.jar")));
        }
    }

    fn make_launcher(root: &Path, versions: &[&str], instances: &[(&str, &str)]) -> PathBuf {
        std::fs::create_dir_all(root).unwrap();
        let config_path = root.join("multimc.cfg");
        std::fs::write(&config_path, "InstanceDir=instances\n").unwrap();
        for v in versions {
            write_jar(&root.join("versions").join(v).join(format!("{v}.jar")));
        }
        for (name, version) in instances {
            let dir = root.join("instances").join(name);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(
                dir.join("instance.cfg"),
                format!("name={name}\nIntendedVersion={version}\n"),
            )
            .unwrap();
        }
        config_path
    }

    struct Fixture {
        _dir: TempDir,
        settings_path: PathBuf,
        root: PathBuf,
    }

    /// One usable install persisted in settings, no default probe.
    fn fixture(versions: &[&str]) -> Fixture {
        let dir = tempdir().unwrap();
        let root = dir.path().join("game");
        make_install_root(&root, versions);
        let settings_path = dir.path().join("settings.json");
        let mut store = SettingsStore::load(&settings_path);
        store.data.installations.push(InstallEntry {
            name: "main".to_string(),
            path: root.clone(),
        });
        store.save().unwrap();
        Fixture {
            _dir: dir,
            settings_path,
            root,
        }
    }

    fn load_group(fixture: &Fixture) -> InstallGroup {
        InstallGroup::load_with_default_dir(SettingsStore::load(&fixture.settings_path), None)
    }

    fn persisted(fixture: &Fixture) -> Settings {
        SettingsStore::load(&fixture.settings_path).data
    }

    #[test]
    fn unusable_candidates_are_dropped_not_fatal() {
        let fx = fixture(&["1.9"]);
        let mut store = SettingsStore::load(&fx.settings_path);
        store.data.installations.push(InstallEntry {
            name: "ghost".to_string(),
            path: fx.root.join("nowhere"),
        });
        store.save().unwrap();

        let group = InstallGroup::load_with_default_dir(store, None);
        assert_eq!(group.installations().len(), 1);
        assert_eq!(group.installations()[0].name, "main");
    }

    #[test]
    fn current_install_falls_back_to_the_first() {
        let fx = fixture(&["1.9"]);
        let mut store = SettingsStore::load(&fx.settings_path);
        store.data.current_install_path = PathBuf::from("/stale/path");
        store.save().unwrap();

        let group = InstallGroup::load_with_default_dir(store, None);
        assert_eq!(group.current_install().unwrap().root, fx.root);
        assert_eq!(persisted(&fx).current_install_path, fx.root);
    }

    #[test]
    fn default_probe_is_idempotent_across_reloads() {
        let dir = tempdir().unwrap();
        let default_root = dir.path().join("dot-minecraft");
        make_install_root(&default_root, &["1.9"]);
        let settings_path = dir.path().join("settings.json");

        let group = InstallGroup::load_with_default_dir(
            SettingsStore::load(&settings_path),
            Some(default_root.clone()),
        );
        assert_eq!(group.installations().len(), 1);
        assert_eq!(group.installations()[0].name, DEFAULT_INSTALL_NAME);
        assert_eq!(group.current_install().unwrap().root, default_root);

        let group = InstallGroup::load_with_default_dir(
            SettingsStore::load(&settings_path),
            Some(default_root.clone()),
        );
        assert_eq!(group.installations().len(), 1);

        let persisted = SettingsStore::load(&settings_path).data;
        assert_eq!(persisted.installations.len(), 1);
    }

    #[test]
    fn unusable_default_is_not_adopted() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        let group = InstallGroup::load_with_default_dir(
            SettingsStore::load(&settings_path),
            Some(dir.path().join("nothing-here")),
        );
        assert!(group.installations().is_empty());
    }

    #[test]
    fn add_install_propagates_the_reason() {
        let fx = fixture(&["1.9"]);
        let mut group = load_group(&fx);
        let err = group.add_install("bad", fx.root.join("nope")).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Install(InstallError::MissingRoot(_))
        ));
        assert_eq!(group.installations().len(), 1);
    }

    #[test]
    fn remove_install_rewrites_the_persisted_list() {
        let fx = fixture(&["1.9"]);
        let other_root = fx.settings_path.parent().unwrap().join("other");
        make_install_root(&other_root, &["1.10"]);
        let mut group = load_group(&fx);
        group.add_install("other", &other_root).unwrap();
        assert_eq!(persisted(&fx).installations.len(), 2);

        group.remove_install(&fx.root).unwrap();
        assert_eq!(group.installations().len(), 1);
        let data = persisted(&fx);
        assert_eq!(data.installations.len(), 1);
        assert_eq!(data.installations[0].path, other_root);
        // the removed install was current; the pointer moved with it
        assert_eq!(data.current_install_path, other_root);
    }

    #[test]
    fn rename_and_relocate_replace_in_collection() {
        let fx = fixture(&["1.9"]);
        let mut group = load_group(&fx);
        group.rename_install(&fx.root, "renamed").unwrap();
        assert_eq!(group.installations()[0].name, "renamed");
        assert_eq!(persisted(&fx).installations[0].name, "renamed");

        let moved_root = fx.settings_path.parent().unwrap().join("moved");
        make_install_root(&moved_root, &["1.9"]);
        group.relocate_install(&fx.root, &moved_root).unwrap();
        assert_eq!(group.installations()[0].root, moved_root);
        assert_eq!(group.current_install().unwrap().root, moved_root);

        let err = group
            .relocate_install(&moved_root, fx.root.join("void"))
            .unwrap_err();
        assert!(matches!(err, EngineError::Install(_)));
    }

    #[test]
    fn launcher_configs_load_and_persist() {
        let fx = fixture(&["1.9"]);
        let launcher_root = fx.settings_path.parent().unwrap().join("mmc");
        let config_path = make_launcher(&launcher_root, &["1.10"], &[("story", "1.10")]);

        let mut group = load_group(&fx);
        group.add_launcher_config(&config_path).unwrap();
        assert_eq!(group.launcher_configs().len(), 1);
        assert_eq!(group.instances().len(), 1);
        assert_eq!(persisted(&fx).launcher_configs[0].config_file, config_path);

        let err = group
            .add_launcher_config(launcher_root.join("absent.cfg"))
            .unwrap_err();
        assert!(matches!(err, EngineError::LauncherConfig(_)));

        group.remove_launcher_config(0).unwrap();
        assert!(group.launcher_configs().is_empty());
        assert!(persisted(&fx).launcher_configs.is_empty());
    }

    #[test]
    fn reference_jar_absent_without_a_full_release() {
        let fx = fixture(&["1.8"]);
        let group = load_group(&fx);
        assert!(group.find_reference_jar().is_none());
        assert!(!group.is_ready());
        assert!(matches!(
            group.default_resource_loader().unwrap_err(),
            EngineError::ReferenceVersionUnavailable
        ));
    }

    #[test]
    fn reference_jar_must_be_a_structurally_valid_archive() {
        let fx = fixture(&["1.8"]);
        // present, full release, but not a zip
        let fake = fx.root.join("versions").join("1.9").join("1.9.jar");
        std::fs::create_dir_all(fake.parent().unwrap()).unwrap();
        std::fs::write(&fake, b"junk").unwrap();

        let group = load_group(&fx);
        assert!(group.find_reference_jar().is_none());
    }

    #[test]
    fn reference_jar_found_across_launcher_configs_too() {
        let fx = fixture(&["1.8"]);
        let launcher_root = fx.settings_path.parent().unwrap().join("mmc");
        let config_path = make_launcher(&launcher_root, &["1.9.2"], &[]);
        let mut group = load_group(&fx);
        group.add_launcher_config(&config_path).unwrap();

        let jar = group.find_reference_jar().unwrap();
        assert_eq!(
            jar,
            launcher_root.join("versions").join("1.9.2").join("1.9.2.jar")
        );
        assert!(is_archive(&jar));
        assert!(group.is_ready());
    }

    #[test]
    fn selected_loader_uses_persisted_version_and_pack() {
        // only 1.9 qualifies as a full release, so the reference jar is
        // deterministic regardless of directory-listing order
        let fx = fixture(&["1.10-pre1", "1.9"]);
        write_jar(&fx.root.join("resourcepacks").join("X.zip"));
        let mut store = SettingsStore::load(&fx.settings_path);
        store.data.current_install_path = fx.root.clone();
        store.data.current_version = "1.10-pre1".to_string();
        store.data.current_resource_pack = "X.zip".to_string();
        store.save().unwrap();

        let group = load_group(&fx);
        let loader = group.selected_resource_loader().unwrap();
        let layers = loader.layers();
        assert_eq!(layers.len(), 3);
        assert_eq!(
            layers[0].source_path,
            fx.root.join("resourcepacks").join("X.zip")
        );
        assert_eq!(
            layers[1].source_path,
            fx.root
                .join("versions")
                .join("1.10-pre1")
                .join("1.10-pre1.jar")
        );
        assert_eq!(
            layers[2].source_path,
            fx.root.join("versions").join("1.9").join("1.9.jar")
        );
    }

    #[test]
    fn world_under_instance_saves_binds_to_that_instance() {
        let fx = fixture(&["1.9"]);
        let launcher_root = fx.settings_path.parent().unwrap().join("mmc");
        let config_path = make_launcher(&launcher_root, &["1.10"], &[("story", "1.10")]);
        let mut group = load_group(&fx);
        group.add_launcher_config(&config_path).unwrap();
        // a conventional install is current; the binding must win anyway
        group.set_current_install(&fx.root).unwrap();

        let world = launcher_root
            .join("instances")
            .join("story")
            .join("minecraft")
            .join("saves")
            .join("New World");
        let loader = group.resource_loader_for_world_path(&world).unwrap();
        let layers = loader.layers();
        assert_eq!(layers.len(), 3);
        assert_eq!(
            layers[0].source_path,
            launcher_root.join("versions").join("1.10").join("1.10.jar")
        );
        assert_eq!(layers[2].kind, LayerKind::Directory);
        assert_eq!(
            layers[2].source_path,
            launcher_root
                .join("instances")
                .join("story")
                .join("minecraft")
                .join("mods")
        );
    }

    #[test]
    fn other_worlds_probe_for_a_sibling_mods_folder() {
        let fx = fixture(&["1.9"]);
        let world = fx.root.join("saves").join("New World");
        std::fs::create_dir_all(&world).unwrap();
        std::fs::create_dir_all(fx.root.join("mods")).unwrap();

        let group = load_group(&fx);
        let loader = group.resource_loader_for_world_path(&world).unwrap();
        let layers = loader.layers();
        assert_eq!(layers.len(), 2);
        assert_eq!(
            layers[0].source_path,
            fx.root.join("versions").join("1.9").join("1.9.jar")
        );
        assert_eq!(layers[1].kind, LayerKind::Directory);
        assert_eq!(layers[1].source_path, fx.root.join("mods"));
    }

    #[test]
    fn sources_cover_both_kinds_and_dispatch_loaders() {
        let fx = fixture(&["1.9"]);
        let launcher_root = fx.settings_path.parent().unwrap().join("mmc");
        let config_path = make_launcher(&launcher_root, &["1.9"], &[("story", "1.9")]);
        let mut group = load_group(&fx);
        group.add_launcher_config(&config_path).unwrap();

        let sources = group.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].display_name(), "main");
        assert_eq!(sources[1].display_name(), "story");
        assert_eq!(sources[1].versions(false), vec!["1.9".to_string()]);

        for source in &sources {
            let loader = source
                .resource_loader(&LoaderRequest::default())
                .unwrap();
            assert!(!loader.layers().is_empty());
        }
    }
}
