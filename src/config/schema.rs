//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bridge.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the bridge.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Development mode flag. Unset falls back to the build profile.
    pub debug: Option<bool>,

    /// Redirect dev-server assets and hot-update requests to the live server.
    pub auto_reload: bool,

    /// Root directory for app directories that don't set `fs_dir`.
    pub base_dir: PathBuf,

    /// URL prefix under which static files are served.
    pub static_url: String,

    /// Extra static roots, searched before the app build directories.
    pub static_dirs: Vec<PathBuf>,

    /// Destination directory for static collection.
    pub static_root: PathBuf,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Front-end applications, in declaration order.
    pub apps: Vec<AppConfig>,
}

impl BridgeConfig {
    /// Whether development-only behavior is enabled.
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(cfg!(debug_assertions))
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            debug: None,
            auto_reload: true,
            base_dir: PathBuf::from("."),
            static_url: "/static/".to_string(),
            static_dirs: Vec::new(),
            static_root: PathBuf::from("staticfiles"),
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            apps: Vec::new(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// A single front-end application.
///
/// `path` and `port` are optional here so that a missing value is reported
/// by validation together with every other problem instead of as a parse error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Unique app identifier.
    pub name: String,

    /// Regular expression matched against request paths of this app.
    pub path: Option<String>,

    /// Port of the app's development server.
    pub port: Option<u16>,

    /// App source directory. Defaults to `{base_dir}/{name}`.
    #[serde(default)]
    pub fs_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(name: impl Into<String>, path: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            port: Some(port),
            fs_dir: None,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Liveness probe timeout in milliseconds.
    pub probe_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            probe_ms: 1500,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
