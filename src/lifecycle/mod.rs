//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Compile registry → Probe dev servers → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or broadcast → Stop accepting → Drain requests → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then liveness, then listener
//! - Nothing started here is ever reconfigured; restart to reload

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{initialize, Runtime};
