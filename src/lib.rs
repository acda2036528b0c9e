//! spa-bridge library
//!
//! Routes requests between built single-page-app artifacts, live front-end
//! dev servers and not-found, and builds the front-ends.

pub mod artifact;
pub mod build;
pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;
pub mod routing;

pub use config::schema::BridgeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::Registry;
