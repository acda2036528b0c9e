//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Static asset miss (path, Referer)
//!     → router.rs (referer → owning app)
//!     → matcher.rs (evaluate anchored path patterns)
//!     → Return: dev-server URL or None
//!
//! Route Compilation (at startup):
//!     Registry apps
//!     → Keep declaration order
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by declaration)

pub mod matcher;
pub mod router;

pub use matcher::{DevToolingMatcher, Matcher, PathPattern};
pub use router::RouteTable;
