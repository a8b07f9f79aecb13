//! Typed errors for descriptor parsing and flag resolution.
//!
//! Every kind here is fatal: commands propagate them up to main, which
//! exits non-zero with the Display message.

use thiserror::Error;

/// Fatal errors raised by userbuild operations.
#[derive(Error, Debug)]
pub enum UserbuildError {
    /// A required descriptor key never appeared in the file.
    #[error("{key} is required in {path} but was not found")]
    MissingRequiredField { key: String, path: String },

    /// A declared value failed field validation (spaces, quotes, version shape).
    #[error("invalid value for {key}: {reason}")]
    InvalidFieldValue { key: String, reason: String },

    /// A required environment variable is unset or empty.
    #[error("${name} must be set")]
    MissingEnvironment { name: String },

    /// The declared install directory is absent from the sysroot.
    #[error("{path} does not exist (INSTALL_DIR)")]
    PathNotFound { path: String },

    /// pkg-config exited non-zero or could not be started.
    #[error("'{tool} {args}' failed: {detail}")]
    ExternalToolFailure {
        tool: String,
        args: String,
        detail: String,
    },

    /// The descriptor file could not be read.
    #[error("Failed to read {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
