//! # rastr-io
//!
//! File I/O for [`rastr_core::Image`].
//!
//! - **PNG** - lossless, 1/3/4 channels
//! - **JPEG** - lossy, gray or RGB (alpha dropped on write)
//! - **Raw** - native-endian element dump of known geometry
//!
//! # Architecture
//!
//! - [`Codec`] - trait for 8-bit encoders/decoders ([`PngCodec`], [`JpegCodec`])
//! - [`Format`] - signature and extension dispatch
//! - [`RawFile`] - byte-level storage used by everything above
//! - [`load`] / [`save`] - high-level functions with format auto-detection
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rastr_io::{load, save};
//!
//! let image = load::<u8, _>("input.png");
//! save(&image, "output.jpg");
//! ```
//!
//! Loading dispatches on the file's first bytes, saving on the target
//! extension. Strict variants ([`try_load`], [`try_save`]) return an
//! [`IoError`]; the plain ones log and fall back to an empty image.
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod codec;
mod detect;
mod error;
mod load;
mod raw;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use codec::{Codec, Decoded, EncodeRequest, codec_for};
pub use detect::Format;
pub use error::{IoError, IoResult};
pub use load::{load, load_from_memory, load_raw, save, try_load, try_load_raw, try_save};
pub use raw::RawFile;

#[cfg(feature = "jpeg")]
pub use jpeg::JpegCodec;
#[cfg(feature = "png")]
pub use png::PngCodec;
