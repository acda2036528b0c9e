//! Front-end build orchestration (the `spa-build` command).
//!
//! # Data Flow
//! ```text
//! app names (empty = all)
//!     → orchestrator::select_targets (unknown names are an error)
//!     → tool::BuildTool::locate (npm, or yarn)
//!     → orchestrator::build_all (one task per app, ordered report)
//!     → collect::collect_static (optional, only after a clean build)
//! ```

pub mod collect;
pub mod orchestrator;
pub mod tool;

use std::path::PathBuf;

pub use collect::collect_static;
pub use orchestrator::{build_all, build_one, select_targets, BuildOutcome, BuildReport, BuildTarget};
pub use tool::BuildTool;

/// Errors of the build command.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Cannot find npm or yarn binary")]
    ToolNotFound,

    #[error("Cannot find these apps: {}", .0.join(", "))]
    UnknownApps(Vec<String>),

    #[error("failed to start build tool for `{app}`: {source}")]
    Spawn {
        app: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error while building app at {}", dir.display())]
    ToolFailed {
        app: String,
        dir: PathBuf,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Cannot post process {}: {source}", path.display())]
    PostProcess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect static files into {}: {source}", dest.display())]
    Collect {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("build worker for `{app}` aborted: {source}")]
    Join {
        app: String,
        #[source]
        source: tokio::task::JoinError,
    },
}
