//! A compiled front-end application entry.

use std::path::{Path, PathBuf};

use crate::routing::matcher::PathPattern;

/// One registered front-end app with its derived locations.
#[derive(Debug, Clone)]
pub struct AppEntry {
    name: String,
    pattern: PathPattern,
    port: u16,
    fs_dir: PathBuf,
    dev_server_url: String,
}

impl AppEntry {
    pub fn new(name: String, pattern: PathPattern, port: u16, fs_dir: PathBuf) -> Self {
        Self {
            dev_server_url: format!("http://localhost:{port}"),
            name,
            pattern,
            port,
            fs_dir,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn fs_dir(&self) -> &Path {
        &self.fs_dir
    }

    /// Base URL of the app's development server.
    pub fn dev_server_url(&self) -> &str {
        &self.dev_server_url
    }

    /// A dev server that can serve this file is considered live.
    pub fn live_bundle_probe_url(&self) -> String {
        format!("{}/static/js/bundle.js", self.dev_server_url)
    }

    pub fn built_index_path(&self) -> PathBuf {
        self.fs_dir.join("build").join("index.html")
    }

    /// Directory holding the built static assets.
    pub fn static_dir(&self) -> PathBuf {
        self.fs_dir.join("build").join("static")
    }
}
