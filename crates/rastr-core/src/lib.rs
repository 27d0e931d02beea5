//! # rastr-core
//!
//! Dense raster container with border-aware addressing and region algebra.
//!
//! This crate provides the foundational types used throughout the rastr workspace:
//!
//! - [`Image`] - Owned, contiguous, channel-interleaved pixel buffer
//! - [`Element`] - Scalar element trait, implemented for `u8` and `f32`
//! - [`PixelFormat`] - Channel layout tag (Gray, Rgb, Rgba, Xyz, ...)
//! - [`BorderMode`] - Out-of-bounds sampling policy
//! - [`ImageDimension`] - Width/height with aspect-ratio helpers
//!
//! ## Design
//!
//! Storage type differences (abs as a no-op on `u8`, clamp on cast to `u8`,
//! display scaling on save) are resolved statically through [`Element`].
//! Every public operation leaves `data.len() == width * height * channels`.
//!
//! ```rust
//! use rastr_core::{Image, ImageDimension, PixelFormat};
//!
//! let mut canvas = Image::<u8>::new(8, 8, PixelFormat::Rgb);
//! canvas.clear(255);
//! let patch = Image::<u8>::filled(2, 2, &[255, 0, 0], PixelFormat::Rgb).unwrap();
//! canvas.set_sub_image(3, 3, &patch);
//!
//! let crop = canvas.sub_image(2, 2, ImageDimension::new(4, 4));
//! assert_eq!(crop.pixel_at(1, 1), &[255, 0, 0]);
//! assert_eq!(crop.pixel_at(0, 0), &[255, 255, 255]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! rastr-core (this crate)
//!    ^
//!    +-- rastr-draw (clipping, line rasterization)
//!    +-- rastr-io   (format detection, PNG/JPEG/raw)
//!    +-- rastr-cli  (driver binary)
//! ```
//!
//! ## Feature Flags
//!
//! - `simd` - Vectorised `abs` and single-channel min/max for `f32` via `wide`
//! - `interop` - Matrix-style views for native image libraries

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod border;
pub mod dimension;
pub mod element;
pub mod error;
pub mod format;
pub mod image;
#[cfg(feature = "interop")]
pub mod interop;
#[cfg(feature = "simd")]
pub mod simd;

pub use border::BorderMode;
pub use dimension::ImageDimension;
pub use element::Element;
pub use error::{Error, Result};
pub use format::{DataFormat, PixelFormat};
pub use image::Image;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use rastr_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::border::BorderMode;
    pub use crate::dimension::ImageDimension;
    pub use crate::element::Element;
    pub use crate::error::{Error, Result};
    pub use crate::format::{DataFormat, PixelFormat};
    pub use crate::image::Image;
}
