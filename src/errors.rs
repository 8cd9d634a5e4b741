/*!
 * Error types for the docsum application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while turning a document file into plain text
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The path has no usable file name or extension
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// The extension is not one of the supported document types
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The file exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge {
        /// Actual file size
        size: u64,
        /// Configured limit
        limit: u64,
    },

    /// PDF content could not be decoded
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// Word content could not be decoded
    #[error("Word extraction error: {0}")]
    Word(String),

    /// Reading the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from text extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

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

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
