//! # Error Types
//!
//! This module defines error types used throughout the nider library.
//!
//! Non-fatal conditions (canvas growth, inferred colors) are not errors;
//! see [`crate::notice::Notice`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nider operations
#[derive(Debug, Error)]
pub enum NiderError {
    /// Invalid construction parameters (empty content, bad size, unwritable path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A texture, photo or font file does not exist
    #[error("Can't find {kind} {}", path.display())]
    ResourceNotFound {
        kind: &'static str,
        path: PathBuf,
    },

    /// Font data could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Color string could not be parsed
    #[error("Color error: {0}")]
    Color(String),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Malformed job file
    #[error("Job error: {0}")]
    Job(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NiderError>;
