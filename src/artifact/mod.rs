//! App shell artifacts: loading and HTML normalization.

pub mod html;
pub mod loader;

pub use html::process_html;
pub use loader::{ShellLoader, ShellOrigin};

/// Errors while producing an app shell.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("app shell not found at {origin}")]
    NotFound { origin: String },

    #[error("unknown app `{0}`")]
    UnknownApp(String),

    #[error("failed to read app shell: {0}")]
    Io(#[from] std::io::Error),
}
