//! Path matching logic.
//!
//! # Responsibilities
//! - Compile app path patterns with match-at-start semantics
//! - Recognize dev-server infrastructure paths (live reload socket,
//!   webpack dev server endpoints, hot-update bundles)
//!
//! # Design Decisions
//! - Patterns are anchored at offset 0 but not at the end: `^/app` matches
//!   `/app/settings`
//! - Path matching is case-sensitive

use std::sync::LazyLock;

use regex::Regex;

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// A compiled app path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
}

impl PathPattern {
    /// Compile `source` so that it only matches at the start of a candidate.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})"))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Matcher for PathPattern {
    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

const LIVE_RELOAD_PREFIX: &str = "/sockjs-node";
const DEV_SERVER_PREFIX: &str = "/__webpack_dev_server__";

static HOT_UPDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/main\.[a-f0-9]+\.hot-update\.js$").expect("static regex"));

/// Matches requests that belong to the front-end dev server's own tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevToolingMatcher;

impl Matcher for DevToolingMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(LIVE_RELOAD_PREFIX)
            || path.starts_with(DEV_SERVER_PREFIX)
            || HOT_UPDATE_RE.is_match(path)
    }
}
