//! App shell loading.
//!
//! In development with a live dev server the shell is fetched from the dev
//! server and post-processed on the fly. Otherwise the built `index.html`
//! (post-processed at build time) is read from disk.

use std::path::PathBuf;
use std::sync::Arc;

use crate::artifact::html::process_html;
use crate::artifact::ArtifactError;
use crate::health::LivenessState;
use crate::registry::{AppEntry, Registry};

/// Where a shell is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOrigin {
    DevServer(String),
    Built(PathBuf),
}

impl std::fmt::Display for ShellOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellOrigin::DevServer(url) => write!(f, "{url}"),
            ShellOrigin::Built(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads app shells for page requests.
#[derive(Debug, Clone)]
pub struct ShellLoader {
    registry: Arc<Registry>,
    liveness: Arc<LivenessState>,
    client: reqwest::Client,
}

impl ShellLoader {
    pub fn new(registry: Arc<Registry>, liveness: Arc<LivenessState>) -> Self {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build shell client, using defaults");
                reqwest::Client::new()
            });

        Self {
            registry,
            liveness,
            client,
        }
    }

    /// Pick the origin for `app` from the mode and the startup liveness snapshot.
    pub fn origin(&self, app: &AppEntry) -> ShellOrigin {
        if self.registry.mode().is_development() && self.liveness.is_live(app.name()) {
            ShellOrigin::DevServer(app.dev_server_url().to_string())
        } else {
            ShellOrigin::Built(app.built_index_path())
        }
    }

    /// Load the shell of the app named `name`.
    pub async fn load(&self, name: &str) -> Result<String, ArtifactError> {
        let app = self
            .registry
            .app(name)
            .ok_or_else(|| ArtifactError::UnknownApp(name.to_string()))?;

        let origin = self.origin(app);
        tracing::debug!(app = %name, origin = %origin, "Loading app shell");

        match origin {
            ShellOrigin::DevServer(url) => self.fetch(&url).await,
            ShellOrigin::Built(path) => match tokio::fs::read_to_string(&path).await {
                Ok(html) => Ok(html),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ArtifactError::NotFound {
                    origin: path.display().to_string(),
                }),
                Err(e) => Err(ArtifactError::Io(e)),
            },
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, ArtifactError> {
        let not_found = || ArtifactError::NotFound {
            origin: url.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Dev server shell fetch failed");
            not_found()
        })?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(url = %url, status = %response.status(), "Dev server shell unavailable");
            return Err(not_found());
        }

        let body = response.text().await.map_err(|_| not_found())?;
        Ok(process_html(&body))
    }
}
