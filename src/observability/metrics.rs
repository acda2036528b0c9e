//! Metrics collection and exposition.
//!
//! # Metrics
//! - `spa_bridge_dispatch_total` (counter): requests by outcome
//!   (local, redirect, not_found, shell)
//! - `spa_bridge_dispatch_duration_seconds` (histogram): decision + response latency
//! - `spa_bridge_app_live` (gauge): 1=dev server live at startup, 0=not live
//! - `spa_bridge_builds_total` (counter): build outcomes by app and result
//!
//! Recording without an installed recorder is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder with an HTTP scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_dispatch(outcome: &'static str, start: Instant) {
    counter!("spa_bridge_dispatch_total", "outcome" => outcome).increment(1);
    histogram!("spa_bridge_dispatch_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_app_liveness(app: &str, live: bool) {
    gauge!("spa_bridge_app_live", "app" => app.to_string()).set(if live { 1.0 } else { 0.0 });
}

pub fn record_build(app: &str, success: bool) {
    let result = if success { "success" } else { "failure" };
    counter!("spa_bridge_builds_total", "app" => app.to_string(), "result" => result).increment(1);
}
