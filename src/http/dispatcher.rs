//! Static asset dispatch with dev-server fallback.
//!
//! # State Machine
//! ```text
//! should_handle? ── no ──▶ Application (host renders the page)
//!      │ yes
//!      ▼
//! TRY_LOCAL ── hit ──▶ Local(file)
//!      │ miss
//!      ▼
//! TRY_FALLBACK ── production or auto-reload off ──▶ NotFound
//!      │             ── referer matches no app ──▶ NotFound
//!      └─────────── referer matches app ────────▶ Redirect(dev server + path)
//! ```
//!
//! A dev server serves its bundles and hot-update chunks from paths that
//! don't exist on disk. The page itself is rendered by the bridge, so the
//! only hint of which dev server owns an asset is the page in the Referer.

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::http::static_files::StaticFiles;
use crate::observability::metrics;
use crate::registry::Registry;
use crate::routing::{DevToolingMatcher, Matcher, RouteTable};

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Serve this file from the static search path.
    Local(PathBuf),
    /// Send the browser to the owning dev server.
    Redirect(String),
    /// Static request with no local file and no fallback.
    NotFound,
    /// Not a static request; application routing handles it.
    Application,
}

impl Decision {
    pub fn outcome(&self) -> &'static str {
        match self {
            Decision::Local(_) => "local",
            Decision::Redirect(_) => "redirect",
            Decision::NotFound => "not_found",
            Decision::Application => "application",
        }
    }
}

/// Result of [`Dispatcher::dispatch`].
pub enum Dispatched {
    Response(Response),
    Application(Request<Body>),
}

/// Decides where static and dev-tooling requests go.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    routes: RouteTable,
    static_files: StaticFiles,
    tooling: DevToolingMatcher,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>) -> Self {
        let routes = RouteTable::from_registry(&registry);
        let static_files = StaticFiles::new(registry.static_search_path());

        Self {
            registry,
            routes,
            static_files,
            tooling: DevToolingMatcher,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Dev-tooling paths are forced into the static layer so they can reach
    /// the dev server even though no app declares them.
    pub fn should_handle(&self, path: &str) -> bool {
        if self.registry.fallback_enabled() && self.tooling.matches(path) {
            return true;
        }
        path.starts_with(self.registry.static_url())
    }

    /// Route one request. `full_path` is the path with its query string.
    pub async fn decide(&self, path: &str, full_path: &str, referer: Option<&str>) -> Decision {
        if !self.should_handle(path) {
            return Decision::Application;
        }

        let relative = path.strip_prefix(self.registry.static_url()).unwrap_or(path);
        if let Some(file) = self.static_files.find(relative).await {
            return Decision::Local(file);
        }

        if !self.registry.fallback_enabled() {
            return Decision::NotFound;
        }

        match self.routes.fallback_url(referer, full_path) {
            Some(url) => Decision::Redirect(url),
            None => Decision::NotFound,
        }
    }

    /// Route and answer a request, or hand it back for application routing.
    pub async fn dispatch(&self, request: Request<Body>) -> Dispatched {
        let start_time = Instant::now();
        let path = request.uri().path().to_string();
        let full_path = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| path.clone());
        let referer = request
            .headers()
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let decision = self.decide(&path, &full_path, referer.as_deref()).await;
        let outcome = decision.outcome();

        tracing::debug!(
            path = %path,
            referer = referer.as_deref().unwrap_or("-"),
            outcome,
            "Dispatch decision"
        );

        let response = match decision {
            Decision::Application => return Dispatched::Application(request),
            Decision::Local(file) => serve_file(file, request).await,
            Decision::Redirect(url) => redirect(&url),
            Decision::NotFound => not_found(),
        };

        metrics::record_dispatch(outcome, start_time);
        Dispatched::Response(response)
    }
}

async fn serve_file(file: PathBuf, request: Request<Body>) -> Response {
    let result: Result<_, Infallible> = ServeFile::new(file).oneshot(request).await;
    match result {
        Ok(response) => response.map(Body::new),
        Err(never) => match never {},
    }
}

/// 302 to the dev server.
pub fn redirect(url: &str) -> Response {
    match HeaderValue::from_str(url) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Unusable redirect target");
            not_found()
        }
    }
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
