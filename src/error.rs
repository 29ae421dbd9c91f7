//! Error types for flowboard
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, unknown route/task, unreadable or bad config/data file)
//! - 4: Operation failed (I/O, terminal)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the flowboard CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for flowboard operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::TaskNotFound(_)
            | Error::UnknownRoute(_)
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_)
            | Error::InvalidDataset(_)
            | Error::ReadFile { .. }
            | Error::TomlParse(_) => exit_codes::USER_ERROR,

            Error::Io(_) | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details attached to JSON error output
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::TaskNotFound(id) => Some(serde_json::json!({ "task_id": id })),
            Error::UnknownRoute(path) => Some(serde_json::json!({ "path": path })),
            Error::ReadFile { path, .. } => {
                Some(serde_json::json!({ "path": path.to_string_lossy() }))
            }
            _ => None,
        }
    }
}

/// Result type alias for flowboard operations
pub type Result<T> = std::result::Result<T, Error>;
