//! Dev-server liveness subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (once):
//!     Registry apps
//!     → probe.rs (GET {dev_server}/static/js/bundle.js, bounded timeout)
//!     → state.rs (frozen name → live map)
//!
//! Per request:
//!     shell loader reads state.rs, no network
//! ```
//!
//! # Design Decisions
//! - A missing dev server is the normal state, not a fault
//! - No periodic re-probing

pub mod probe;
pub mod state;

pub use probe::LivenessProber;
pub use state::LivenessState;
