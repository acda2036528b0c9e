//! Concurrent front-end builds.
//!
//! # Data Flow
//! ```text
//! selected apps (declaration order)
//!     → one tokio task per app: build tool → post-process build/index.html
//!     → await every task in order
//!     → BuildReport (one outcome per app, same order)
//! ```
//!
//! # Design Decisions
//! - A failing app never cancels its siblings
//! - Anything on the tool's stderr counts as a failure, as does a non-zero exit
//! - No retries or timeouts beyond the tool's own

use std::path::{Path, PathBuf};

use crate::artifact::process_html;
use crate::build::tool::BuildTool;
use crate::build::BuildError;
use crate::observability::metrics;
use crate::registry::{AppEntry, Registry};

/// One app to build.
#[derive(Debug, Clone)]
pub struct BuildTarget {
    pub name: String,
    pub dir: PathBuf,
}

impl From<&AppEntry> for BuildTarget {
    fn from(app: &AppEntry) -> Self {
        Self {
            name: app.name().to_string(),
            dir: app.fs_dir().to_path_buf(),
        }
    }
}

/// Result of building one app.
#[derive(Debug)]
pub struct BuildOutcome {
    pub app: String,
    pub result: Result<(), BuildError>,
}

/// Ordered outcomes of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub outcomes: Vec<BuildOutcome>,
}

impl BuildReport {
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &BuildError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.app.as_str(), e)))
    }

    /// Process exit code: 0 when every app built, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded() {
            0
        } else {
            1
        }
    }
}

/// Resolve requested app names against the registry; empty means all apps.
pub fn select_targets(registry: &Registry, names: &[String]) -> Result<Vec<BuildTarget>, BuildError> {
    if names.is_empty() {
        return Ok(registry.apps().iter().map(BuildTarget::from).collect());
    }

    let unknown: Vec<String> = names
        .iter()
        .filter(|name| registry.app(name).is_none())
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(BuildError::UnknownApps(unknown));
    }

    // keep declaration order, ignore repeated names
    Ok(registry
        .apps()
        .iter()
        .filter(|app| names.iter().any(|n| n == app.name()))
        .map(BuildTarget::from)
        .collect())
}

/// Build every target concurrently and wait for all of them.
pub async fn build_all(tool: &BuildTool, targets: Vec<BuildTarget>) -> BuildReport {
    let handles: Vec<_> = targets
        .into_iter()
        .map(|target| {
            let tool = tool.clone();
            let app = target.name.clone();
            (app, tokio::spawn(async move { build_one(&tool, &target).await }))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (app, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(source) => Err(BuildError::Join {
                app: app.clone(),
                source,
            }),
        };
        metrics::record_build(&app, result.is_ok());
        outcomes.push(BuildOutcome { app, result });
    }

    BuildReport { outcomes }
}

/// Run the build tool for one app, then post-process its shell.
pub async fn build_one(tool: &BuildTool, target: &BuildTarget) -> Result<(), BuildError> {
    tracing::info!(app = %target.name, dir = %target.dir.display(), "Building app");

    let output = tool
        .command(&target.dir)
        .output()
        .await
        .map_err(|source| BuildError::Spawn {
            app: target.name.clone(),
            source,
        })?;

    if !output.stderr.is_empty() || !output.status.success() {
        tracing::error!(app = %target.name, status = ?output.status.code(), "Build failed");
        return Err(BuildError::ToolFailed {
            app: target.name.clone(),
            dir: target.dir.clone(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let index = target.dir.join("build").join("index.html");
    tracing::info!(app = %target.name, path = %index.display(), "Post processing index.html");
    post_process(&index).await?;

    tracing::info!(app = %target.name, "Finished building");
    Ok(())
}

/// Rewrite a built `index.html` in place with [`process_html`].
pub async fn post_process(index: &Path) -> Result<(), BuildError> {
    let to_error = |source| BuildError::PostProcess {
        path: index.to_path_buf(),
        source,
    };

    let html = tokio::fs::read_to_string(index).await.map_err(to_error)?;
    tokio::fs::write(index, process_html(&html))
        .await
        .map_err(to_error)
}
