//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, app, outcome)
//! - Request ID added by the HTTP layer and echoed in responses
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
