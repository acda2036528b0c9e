//! Compiled, process-wide front-end registry.
//!
//! # Data Flow
//! ```text
//! BridgeConfig
//!     → validate_config (all invariants, all errors at once)
//!     → compile path patterns, derive URLs and build locations
//!     → Registry (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - All-or-nothing: a single violated invariant yields no registry
//! - Never mutated after construction; restart to pick up changes

pub mod app;

use std::path::{Path, PathBuf};

pub use app::AppEntry;

use crate::config::{validate_config, AppConfig, BridgeConfig, ConfigError, ValidationError};
use crate::routing::matcher::PathPattern;

/// Whether development-only behavior is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }
}

/// Validated registry of every front-end app.
#[derive(Debug, Clone)]
pub struct Registry {
    mode: Mode,
    auto_reload: bool,
    static_url: String,
    static_dirs: Vec<PathBuf>,
    static_root: PathBuf,
    apps: Vec<AppEntry>,
}

impl Registry {
    /// Validate `config` and compile it.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let apps = config
            .apps
            .iter()
            .map(|app| compile_app(config, app))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Validation(vec![e]))?;

        let registry = Self {
            mode: Mode::from_debug(config.debug_enabled()),
            auto_reload: config.auto_reload,
            static_url: config.static_url.clone(),
            static_dirs: config.static_dirs.clone(),
            static_root: config.static_root.clone(),
            apps,
        };

        tracing::info!(
            apps = registry.apps.len(),
            mode = ?registry.mode,
            auto_reload = registry.auto_reload,
            "Front-end registry compiled"
        );

        Ok(registry)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn auto_reload(&self) -> bool {
        self.auto_reload
    }

    /// Dev-server redirects are only ever issued in this state.
    pub fn fallback_enabled(&self) -> bool {
        self.mode.is_development() && self.auto_reload
    }

    pub fn static_url(&self) -> &str {
        &self.static_url
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// Apps in declaration order.
    pub fn apps(&self) -> &[AppEntry] {
        &self.apps
    }

    pub fn app(&self, name: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.name() == name)
    }

    /// Directories searched for static files: configured roots first, then
    /// each app's build output.
    pub fn static_search_path(&self) -> Vec<PathBuf> {
        self.static_dirs
            .iter()
            .cloned()
            .chain(self.apps.iter().map(AppEntry::static_dir))
            .collect()
    }
}

fn compile_app(config: &BridgeConfig, app: &AppConfig) -> Result<AppEntry, ValidationError> {
    let path = app.path.as_deref().ok_or_else(|| ValidationError::MissingPath {
        app: app.name.clone(),
    })?;
    let port = app.port.ok_or_else(|| ValidationError::MissingPort {
        app: app.name.clone(),
    })?;
    let pattern = PathPattern::new(path).map_err(|source| ValidationError::InvalidPattern {
        app: app.name.clone(),
        source,
    })?;
    let fs_dir = app
        .fs_dir
        .clone()
        .unwrap_or_else(|| config.base_dir.join(&app.name));

    Ok(AppEntry::new(app.name.clone(), pattern, port, fs_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::Matcher;

    fn config(apps: Vec<AppConfig>) -> BridgeConfig {
        BridgeConfig {
            debug: Some(true),
            base_dir: PathBuf::from("/srv/front"),
            static_dirs: vec![PathBuf::from("/srv/assets")],
            apps,
            ..BridgeConfig::default()
        }
    }

    #[test]
    fn test_valid_config_compiles_every_app() {
        let mut custom = AppConfig::new("b", "^/b", 3001);
        custom.fs_dir = Some(PathBuf::from("/elsewhere/b"));
        let registry =
            Registry::from_config(&config(vec![AppConfig::new("a", "^/a", 3000), custom]))
                .unwrap();

        assert_eq!(registry.apps().len(), 2);
        assert_eq!(registry.mode(), Mode::Development);
        assert!(registry.fallback_enabled());

        let a = registry.app("a").unwrap();
        assert!(a.pattern().matches("/a/page"));
        assert_eq!(a.dev_server_url(), "http://localhost:3000");
        assert_eq!(a.fs_dir(), PathBuf::from("/srv/front/a"));
        assert_eq!(
            registry.app("b").unwrap().fs_dir(),
            PathBuf::from("/elsewhere/b")
        );
    }

    #[test]
    fn test_static_search_path_order() {
        let registry = Registry::from_config(&config(vec![
            AppConfig::new("a", "^/a", 3000),
            AppConfig::new("b", "^/b", 3001),
        ]))
        .unwrap();

        assert_eq!(
            registry.static_search_path(),
            vec![
                PathBuf::from("/srv/assets"),
                PathBuf::from("/srv/front/a/build/static"),
                PathBuf::from("/srv/front/b/build/static"),
            ]
        );
    }

    #[test]
    fn test_duplicate_port_fails() {
        let result = Registry::from_config(&config(vec![
            AppConfig::new("a", "^/a", 3000),
            AppConfig::new("b", "^/b", 3000),
        ]));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_duplicate_path_fails() {
        let result = Registry::from_config(&config(vec![
            AppConfig::new("a", "^/same", 3000),
            AppConfig::new("b", "^/same", 3001),
        ]));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_production_disables_fallback() {
        let mut cfg = config(vec![AppConfig::new("a", "^/a", 3000)]);
        cfg.debug = Some(false);
        let registry = Registry::from_config(&cfg).unwrap();

        assert_eq!(registry.mode(), Mode::Production);
        assert!(!registry.fallback_enabled());
    }

    #[test]
    fn test_auto_reload_off_disables_fallback() {
        let mut cfg = config(vec![AppConfig::new("a", "^/a", 3000)]);
        cfg.auto_reload = false;
        let registry = Registry::from_config(&cfg).unwrap();

        assert!(!registry.fallback_enabled());
    }
}
