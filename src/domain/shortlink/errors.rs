//! Shortlink codec errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while encoding or decoding a shortlink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortLinkError {
    /// The id needs more than six base-54 digits.
    #[error("Failed to process ID {id}: exceeds shortlink capacity")]
    EncodingOverflow { id: u64 },

    /// The input contains a character outside the alphabet.
    #[error("Invalid character in short link: '{symbol}'")]
    InvalidSymbol { symbol: char },

    /// The decoded value does not fit in 64 bits.
    #[error("Short link value exceeds the supported id range")]
    DecodeOverflow,
}

impl ShortLinkError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ShortLinkError::EncodingOverflow { .. } | ShortLinkError::DecodeOverflow => {
                ErrorCode::EncodingOverflow
            }
            ShortLinkError::InvalidSymbol { .. } => ErrorCode::InvalidSymbol,
        }
    }
}

impl From<ShortLinkError> for DomainError {
    fn from(err: ShortLinkError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
