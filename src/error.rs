//! Error types for the Helios renderer
//!
//! This module defines the error types used throughout the renderer,
//! covering pass construction, configuration, and GPU command recording.

use std::fmt;

/// Result type for Helios renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Helios renderer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (renderer, pass construction, configuration)
    InitializationFailed(String),

    /// Invalid resource (pipeline, buffer slot, attachment)
    InvalidResource(String),

    /// Backend-specific error reported by a GPU collaborator
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
