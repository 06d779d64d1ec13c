//! Error handling types for oritatami
//!
//! This module provides error types used throughout the auto-fold engine.

use thiserror::Error;

/// Comprehensive error type for auto-fold operations
#[derive(Debug, Error)]
pub enum FoldError {
    /// Host query or command failed
    #[error("Host request failed: {message}")]
    Host { message: String },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Document not found or no longer active
    #[error("Document not found: {key}")]
    DocumentNotFound { key: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for auto-fold operations
pub type FoldResult<T> = Result<T, FoldError>;

/// Helper functions for common error patterns
impl FoldError {
    /// Create a host error
    pub fn host(message: impl Into<String>) -> Self {
        FoldError::Host {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        FoldError::Config {
            message: message.into(),
        }
    }

    /// Create a document not found error
    pub fn document_not_found(key: impl Into<String>) -> Self {
        FoldError::DocumentNotFound { key: key.into() }
    }
}
