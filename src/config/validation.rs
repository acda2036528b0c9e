//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every app declares a path pattern and a dev-server port
//! - Names, path patterns and ports are unique across apps
//! - Path patterns compile
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use crate::config::schema::BridgeConfig;
use crate::routing::matcher::PathPattern;

/// A single semantic problem in the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("app `{app}` is missing a path")]
    MissingPath { app: String },

    #[error("app `{app}` is missing a port")]
    MissingPort { app: String },

    #[error("duplicated app name `{name}`")]
    DuplicateName { name: String },

    #[error("duplicated path `{path}` of app `{app}`")]
    DuplicatePath { app: String, path: String },

    #[error("duplicated port {port} of app `{app}`")]
    DuplicatePort { app: String, port: u16 },

    #[error("invalid path pattern of app `{app}`: {source}")]
    InvalidPattern {
        app: String,
        #[source]
        source: regex::Error,
    },
}

/// Check the semantic invariants of a parsed configuration.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut paths = HashSet::new();
    let mut ports = HashSet::new();

    for app in &config.apps {
        if !names.insert(app.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: app.name.clone(),
            });
        }

        match &app.path {
            None => errors.push(ValidationError::MissingPath {
                app: app.name.clone(),
            }),
            Some(path) => {
                if !paths.insert(path.as_str()) {
                    errors.push(ValidationError::DuplicatePath {
                        app: app.name.clone(),
                        path: path.clone(),
                    });
                }
                if let Err(source) = PathPattern::new(path) {
                    errors.push(ValidationError::InvalidPattern {
                        app: app.name.clone(),
                        source,
                    });
                }
            }
        }

        match app.port {
            None => errors.push(ValidationError::MissingPort {
                app: app.name.clone(),
            }),
            Some(port) => {
                if !ports.insert(port) {
                    errors.push(ValidationError::DuplicatePort {
                        app: app.name.clone(),
                        port,
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
