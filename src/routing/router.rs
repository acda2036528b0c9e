//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled app patterns with their dev-server URLs
//! - Map a referer back to the app that rendered the page
//! - Build dev-server fallback URLs
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) pattern scan in declaration order (acceptable for typical app counts)
//! - Explicit None rather than silent default

use url::Url;

use crate::registry::{AppEntry, Registry};
use crate::routing::matcher::{Matcher, PathPattern};

#[derive(Debug, Clone)]
struct Route {
    app: String,
    pattern: PathPattern,
    dev_server_url: String,
}

/// Ordered mapping from path pattern to the owning app's dev server.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the table from the registry, keeping declaration order.
    pub fn from_registry(registry: &Registry) -> Self {
        let routes = registry
            .apps()
            .iter()
            .map(|app: &AppEntry| Route {
                app: app.name().to_string(),
                pattern: app.pattern().clone(),
                dev_server_url: app.dev_server_url().to_string(),
            })
            .collect();

        Self { routes }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dev-server URL of the first app whose pattern matches the referer's path.
    pub fn resolve_by_referer(&self, referer: Option<&str>) -> Option<&str> {
        let path = referer_path(referer?)?;
        self.first_match(&path)
            .map(|route| route.dev_server_url.as_str())
    }

    /// Dev-server URL for `full_path` (path plus query), resolved through the referer.
    pub fn fallback_url(&self, referer: Option<&str>, full_path: &str) -> Option<String> {
        self.resolve_by_referer(referer)
            .map(|base| format!("{base}{full_path}"))
    }

    /// Name of the first app whose pattern matches a page path.
    pub fn app_for_path(&self, path: &str) -> Option<&str> {
        self.first_match(path).map(|route| route.app.as_str())
    }

    fn first_match(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.pattern.matches(path))
    }
}

/// Path component of a referer, which is normally an absolute URL.
fn referer_path(referer: &str) -> Option<String> {
    if referer.is_empty() {
        return None;
    }
    match Url::parse(referer) {
        Ok(url) => Some(url.path().to_string()),
        Err(_) if referer.starts_with('/') => {
            let end = referer.find(['?', '#']).unwrap_or(referer.len());
            Some(referer[..end].to_string())
        }
        Err(_) => None,
    }
}
