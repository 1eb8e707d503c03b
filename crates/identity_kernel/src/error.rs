//! Kernel error types

use thiserror::Error;

/// Errors raised by the kernel types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KernelError {
    /// The raw input is not a sixteen-digit string
    #[error("Malformed identity number: {0}")]
    Malformed(String),

    /// The date digits do not describe a calendar date
    #[error("Invalid birth date: {0}")]
    InvalidBirthDate(String),
}

impl KernelError {
    pub fn malformed(message: impl Into<String>) -> Self {
        KernelError::Malformed(message.into())
    }

    pub fn invalid_birth_date(message: impl Into<String>) -> Self {
        KernelError::InvalidBirthDate(message.into())
    }
}
