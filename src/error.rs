//! Error types for pycomp operations.
//!
//! This module defines [`PycompError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PycompError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PycompError::Other`) for unexpected errors
//! - All errors should name the path or argument at fault

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pycomp operations.
#[derive(Debug, Error)]
pub enum PycompError {
    /// A distribution root does not exist as a directory.
    #[error("Python distribution directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// Bad input to the engine (too few roots, unknown location name).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A catalog path segment is not a valid glob pattern.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Listing a directory failed for a reason other than it being absent.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pycomp operations.
pub type Result<T> = std::result::Result<T, PycompError>;
