//! Unified error types for the showcase application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error scanning the gallery directory
    GalleryScan(String),
    /// Error reading or parsing the site configuration
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::GalleryScan(msg) => write!(f, "Gallery scan error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::GalleryScan(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Failure modes of a form submission. Both take the same timed-revert
/// path in the UI; they are distinguished only for logging.
#[derive(Debug)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    Status(u16),
    /// The request never completed (DNS, connect, TLS, ...)
    Network(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Status(code) => write!(f, "Endpoint returned HTTP {}", code),
            SubmitError::Network(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
