//! Dev-server liveness probing.
//!
//! # Responsibilities
//! - Probe a front-end dev server with a single bounded GET
//! - Translate every failure into "not live"
//!
//! # Design Decisions
//! - Production never touches the network
//! - Only an exact 200 counts as live

use std::time::Duration;

use tokio::time;

use crate::registry::Mode;

/// Checks whether a dev server answers.
#[derive(Debug, Clone)]
pub struct LivenessProber {
    mode: Mode,
    timeout: Duration,
    client: reqwest::Client,
}

impl LivenessProber {
    pub fn new(mode: Mode, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .no_proxy()
            .connect_timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build probe client, using defaults");
                reqwest::Client::new()
            });

        Self {
            mode,
            timeout,
            client,
        }
    }

    /// Returns true iff `url` answers a GET with status 200 within the timeout.
    pub async fn probe(&self, url: &str) -> bool {
        if !self.mode.is_development() {
            return false;
        }

        let response_future = self
            .client
            .get(url)
            .header("user-agent", "spa-bridge-liveness-probe")
            .send();

        match time::timeout(self.timeout, response_future).await {
            Ok(Ok(response)) => {
                let live = response.status() == reqwest::StatusCode::OK;
                if live {
                    tracing::info!(url = %url, "Dev server running");
                } else {
                    tracing::warn!(url = %url, status = %response.status(), "Dev server is up but not serving");
                }
                live
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %url, error = %e, "Dev server is not running");
                false
            }
            Err(_) => {
                tracing::warn!(url = %url, "Dev server probe timed out");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_production_never_probes() {
        let prober = LivenessProber::new(Mode::Production, Duration::from_millis(200));
        assert!(!prober.probe("not a url").await);
        assert!(!prober.probe("http://127.0.0.1:9/static/js/bundle.js").await);
    }

    #[tokio::test]
    async fn test_connection_error_is_not_live() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let prober = LivenessProber::new(Mode::Development, Duration::from_millis(500));
        assert!(!prober.probe(&format!("http://{addr}/static/js/bundle.js")).await);
    }
}
