//! Error types for release note generation.
//!
//! Every variant displays only the underlying message so that failure
//! envelopes carry the collaborator's text unchanged.

use thiserror::Error;

/// Failures raised below the generator boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotesError {
    /// A required credential or input is missing or invalid.
    ///
    /// Raised before any network call is made.
    #[error("{0}")]
    Config(String),

    /// The release lookup failed.
    #[error("{0}")]
    Fetch(String),

    /// The completion model call failed.
    #[error("{0}")]
    Upstream(String),
}

impl NotesError {
    /// Returns the process exit code for this error type.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => exitcode::CONFIG,
            Self::Fetch(_) | Self::Upstream(_) => exitcode::UNAVAILABLE,
        }
    }

    /// Short name of the error kind, used in log lines.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Fetch(_) => "fetch",
            Self::Upstream(_) => "upstream",
        }
    }
}

/// Result type alias for release note operations.
pub type Result<T> = std::result::Result<T, NotesError>;
