//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, tracing)
//!     → dispatcher.rs (static path? local file / dev-server redirect / 404)
//!     → static_files.rs (search path lookup)
//!     → server.rs (page path → app shell via artifact::ShellLoader)
//!     → Send to client
//! ```

pub mod dispatcher;
pub mod server;
pub mod static_files;

pub use dispatcher::{Decision, Dispatched, Dispatcher};
pub use server::HttpServer;
pub use static_files::StaticFiles;
