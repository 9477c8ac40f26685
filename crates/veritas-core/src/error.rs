//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reporting (color-eyre) could not be installed
    #[error("Startup error: {message}")]
    Startup { message: String },

    /// An OS signal listener could not be registered
    #[error("Signal handler error: {message}")]
    Signal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Workflow Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No file selected")]
    NoFile,

    #[error("Could not open file {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Detection Endpoint Errors
    // ─────────────────────────────────────────────────────────────
    #[error("API Error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Non-success HTTP status from the detection endpoint.
    ///
    /// `body` is the response text, kept verbatim.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error prevents the application from starting
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Startup { .. } | Error::InvalidEndpoint { .. } | Error::Config { .. }
        )
    }

    /// Failures of the remote analysis path.
    ///
    /// All three surface the same way: a blocking notification and a revert
    /// to `FileSelected`.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            Error::Api { .. } | Error::Network { .. } | Error::MalformedResponse { .. }
        )
    }
}
