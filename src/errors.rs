/*!
 * Error types for the biscript application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The filename extension is neither srt nor ass
    #[error("Unsupported file type: .{extension}. Must be .srt or .ass")]
    UnsupportedFormat {
        /// Lowercased extension after the final dot, empty when absent
        extension: String,
    },

    /// The ASS normalizer could not interpret the input as a subtitle document
    #[error("Malformed subtitle document: {0}")]
    MalformedInput(String),

    /// Any other unexpected failure during parsing or building
    #[error("Processing error: {0}")]
    Processing(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
