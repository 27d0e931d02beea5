//! Error types for rastr-core operations.
//!
//! Most container operations degrade to a well-defined state instead of
//! failing (an out-of-range channel swap is a no-op, a raw buffer of the
//! wrong size yields a zeroed image). The operations that can be misused in
//! ways the caller should hear about return [`Result`] with this [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::{Error, Image, PixelFormat};
//!
//! let result = Image::<u8>::from_vec(4, 4, vec![0; 10], PixelFormat::Gray);
//! assert!(matches!(result, Err(Error::SizeMismatch { .. })));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the raster container.
///
/// # Categories
///
/// - **Size errors**: [`SizeMismatch`](Error::SizeMismatch), [`DimensionMismatch`](Error::DimensionMismatch)
/// - **Channel errors**: [`ChannelMismatch`](Error::ChannelMismatch)
/// - **Format errors**: [`UnsupportedFormat`](Error::UnsupportedFormat)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Buffer length does not match `width * height * channels`.
    ///
    /// Returned by the constructors that adopt caller-provided data.
    #[error("buffer size mismatch for {width}x{height}x{channels}: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Channels per pixel
        channels: usize,
        /// Required element count
        expected: usize,
        /// Provided element count
        actual: usize,
    },

    /// Channel count mismatch between two images or a value and an image.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },

    /// Image dimensions don't match for a pairwise operation.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: u32,
        /// First image height
        a_height: u32,
        /// Second image width
        b_width: u32,
        /// Second image height
        b_height: u32,
    },

    /// Pixel format is not supported for this operation.
    #[error("unsupported pixel format: {format}")]
    UnsupportedFormat {
        /// Format name or description
        format: String,
    },
}

impl Error {
    /// Creates an [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(width: u32, height: u32, channels: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            width,
            height,
            channels,
            expected: width as usize * height as usize * channels,
            actual,
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::UnsupportedFormat`] error.
    #[inline]
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Returns `true` if this is a size or dimension error.
    #[inline]
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::SizeMismatch { .. } | Self::DimensionMismatch { .. })
    }

    /// Returns `true` if this is a channel-related error.
    #[inline]
    pub fn is_channel_error(&self) -> bool {
        matches!(self, Self::ChannelMismatch { .. })
    }
}
