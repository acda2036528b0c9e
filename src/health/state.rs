//! Startup liveness snapshot.
//!
//! # Lifecycle
//! ```text
//! startup: probe every app once → LivenessState (frozen)
//! request: is_live(app) reads the snapshot, never re-probes
//! ```
//!
//! A dev server started after the bridge boots stays "not live" until restart.

use std::collections::HashMap;

use crate::health::probe::LivenessProber;
use crate::observability::metrics;
use crate::registry::Registry;

/// App name → dev server reachable at startup.
#[derive(Debug, Clone, Default)]
pub struct LivenessState {
    lives: HashMap<String, bool>,
}

impl LivenessState {
    /// Probe each app's bundle URL once, in declaration order.
    pub async fn probe_all(registry: &Registry, prober: &LivenessProber) -> Self {
        let mut lives = HashMap::with_capacity(registry.apps().len());

        for app in registry.apps() {
            let live = if registry.mode().is_development() {
                prober.probe(&app.live_bundle_probe_url()).await
            } else {
                false
            };
            metrics::record_app_liveness(app.name(), live);
            lives.insert(app.name().to_string(), live);
        }

        Self { lives }
    }

    /// Every app not live, as in production.
    pub fn all_down(registry: &Registry) -> Self {
        Self {
            lives: registry
                .apps()
                .iter()
                .map(|app| (app.name().to_string(), false))
                .collect(),
        }
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            lives: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Unknown apps are not live.
    pub fn is_live(&self, app: &str) -> bool {
        self.lives.get(app).copied().unwrap_or(false)
    }

    pub fn live_count(&self) -> usize {
        self.lives.values().filter(|live| **live).count()
    }
}
