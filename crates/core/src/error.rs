//! Error model shared by every QR-bill crate.

use thiserror::Error;

/// Result type used across the QR-bill pipeline.
pub type QrBillResult<T> = Result<T, QrBillError>;

/// QR-bill generation error.
///
/// Every variant is fatal: generation is deterministic, so the same input
/// always fails the same way. Callers must change the input before retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrBillError {
    /// Creditor identity or account is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A field cannot be represented in the payment payload
    /// (over-length, invalid country code, malformed reference).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The QR symbol producer rejected the payload (e.g. capacity overflow).
    #[error("matrix generation failed: {0}")]
    MatrixGeneration(String),
}

impl QrBillError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn matrix_generation(msg: impl Into<String>) -> Self {
        Self::MatrixGeneration(msg.into())
    }
}
