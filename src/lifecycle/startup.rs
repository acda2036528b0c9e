//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and compile the registry
//! - Probe every dev server once (development only)
//! - Hand the frozen runtime to the HTTP layer
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal
//! - Probing finishes before the listener serves its first request
//! - Probes run one app at a time, each bounded by `timeouts.probe_ms`

use std::sync::Arc;
use std::time::Duration;

use crate::config::{BridgeConfig, ConfigError};
use crate::health::{LivenessProber, LivenessState};
use crate::registry::Registry;

/// Everything built at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Runtime {
    pub config: BridgeConfig,
    pub registry: Arc<Registry>,
    pub liveness: Arc<LivenessState>,
}

impl Runtime {
    /// Assemble a runtime from parts, skipping probing.
    pub fn from_parts(config: BridgeConfig, registry: Registry, liveness: LivenessState) -> Self {
        Self {
            config,
            registry: Arc::new(registry),
            liveness: Arc::new(liveness),
        }
    }
}

/// Build the registry and liveness snapshot for `config`.
pub async fn initialize(config: BridgeConfig) -> Result<Runtime, ConfigError> {
    let registry = Registry::from_config(&config)?;

    let liveness = if registry.mode().is_development() {
        let prober = LivenessProber::new(
            registry.mode(),
            Duration::from_millis(config.timeouts.probe_ms),
        );
        LivenessState::probe_all(&registry, &prober).await
    } else {
        tracing::info!("Production mode, skipping dev server probes");
        LivenessState::all_down(&registry)
    };

    tracing::info!(
        apps = registry.apps().len(),
        live = liveness.live_count(),
        "Startup complete"
    );

    Ok(Runtime::from_parts(config, registry, liveness))
}
