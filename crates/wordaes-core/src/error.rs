//! Construction errors.

use thiserror::Error;

/// Rejected key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Keys hold 4, 6 or 8 words.
    #[error("AES keys are 4, 6 or 8 words long, got {0}")]
    InvalidWordCount(usize),
    /// Keys hold 16, 24 or 32 bytes.
    #[error("AES keys are 16, 24 or 32 bytes long, got {0}")]
    InvalidByteLength(usize),
}
