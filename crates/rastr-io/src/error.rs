//! Error types for I/O operations.
//!
//! Provides unified error handling for codec, storage and container
//! failures. The strict entry points ([`try_load`](crate::try_load),
//! [`try_save`](crate::try_save)) return these; the lenient ones log them
//! and degrade to an empty image.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error reported by a codec.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error reported by a codec.
    #[error("encode error: {0}")]
    Encode(String),

    /// No codec for this signature, extension or pixel format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Channel layout the codec cannot store.
    #[error("{codec} cannot store {channels}-channel images")]
    UnsupportedChannels {
        /// Codec name.
        codec: &'static str,
        /// Offending channel count.
        channels: usize,
    },

    /// Container rejected the decoded buffer.
    #[error(transparent)]
    Core(#[from] rastr_core::Error),
}

impl IoError {
    /// Creates an [`IoError::Decode`] from any displayable error.
    #[inline]
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Creates an [`IoError::Encode`] from any displayable error.
    #[inline]
    pub fn encode(err: impl std::fmt::Display) -> Self {
        Self::Encode(err.to_string())
    }

    /// Returns `true` if the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
