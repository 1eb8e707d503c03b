//! Wilayah data source errors

use thiserror::Error;

/// Errors raised while loading the region code directory.
///
/// Every variant is a fatal configuration failure surfaced at
/// construction time. Lookups on a loaded directory never error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WilayahError {
    /// The backing file does not exist
    #[error("Wilayah file not found: {0}")]
    NotFound(String),

    /// The backing file exists but could not be read
    #[error("Failed to read wilayah file {path}: {message}")]
    Io { path: String, message: String },

    /// The document is not the expected JSON shape
    #[error("Failed to parse wilayah data: {0}")]
    Parse(String),
}

impl WilayahError {
    pub fn parse(message: impl Into<String>) -> Self {
        WilayahError::Parse(message.into())
    }
}
