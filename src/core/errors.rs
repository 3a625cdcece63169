/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use miette::Diagnostic;
use thiserror::Error;

// Re-export SpliceError from buffer module
pub use crate::buffer::SpliceError;

// Re-export lifecycle and host errors from process module
pub use crate::process::types::{HostQueryError, LifecycleError};

/// Unified probe error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum ProbeError {
    #[error("Splice error: {0}")]
    #[diagnostic(transparent)]
    Splice(#[from] SpliceError),

    #[error("Host query error: {0}")]
    #[diagnostic(transparent)]
    HostQuery(#[from] HostQueryError),

    #[error("Lifecycle error: {0}")]
    #[diagnostic(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(probe::io_error),
        help("Report stream write failed. Check the output destination.")
    )]
    Io(String),

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(probe::internal_error),
        help("An unexpected internal error occurred. Please report this issue.")
    )]
    Internal(String),
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Io(err.to_string())
    }
}

// Implement conversion from String for convenience
impl From<String> for ProbeError {
    fn from(msg: String) -> Self {
        ProbeError::Internal(msg)
    }
}

impl From<&str> for ProbeError {
    fn from(msg: &str) -> Self {
        ProbeError::Internal(msg.into())
    }
}

/// Result type for probe operations
///
/// # Must Use
/// Probe operations can fail and must be handled to keep reports truthful
pub type Result<T> = std::result::Result<T, ProbeError>;
