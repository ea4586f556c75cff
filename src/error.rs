//! Error types for m3u8-segment.

use std::io;
use thiserror::Error;

/// Result type for m3u8-segment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for m3u8-segment operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed segment duration literal.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Malformed byte range value.
    #[error("Invalid byte range: {0}")]
    InvalidByteRange(String),

    /// No URI line before the end of the segment, or an empty URI field
    /// at encoding time.
    #[error("Missing URI")]
    MissingUri,

    /// Tag or value outside the supported media segment set.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// The tokenizer reported a malformed playlist line.
    #[error("Lexer error: {0}")]
    Lex(String),

    /// Segment carries a zero duration, which cannot be encoded.
    #[error("Zero duration for segment {0}")]
    ZeroDuration(String),

    /// Date range metadata violates its structural rules.
    #[error("Invalid date range: {0}")]
    DateRange(String),
}

impl Error {
    /// Create an invalid duration error.
    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    /// Create an invalid byte range error.
    pub fn invalid_byte_range(msg: impl Into<String>) -> Self {
        Self::InvalidByteRange(msg.into())
    }

    /// Create an unsupported error.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a date range error.
    pub fn date_range(msg: impl Into<String>) -> Self {
        Self::DateRange(msg.into())
    }
}
