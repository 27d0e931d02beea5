//! File-backed construction and saving of [`Image`]s.
//!
//! Every operation comes in two flavors:
//!
//! - `try_*` returns an [`IoResult`] for callers that want the cause.
//! - The plain form never fails. It logs the error and degrades: loads yield
//!   the empty image (or the zeroed image for raw loads), saves return
//!   `false`.
//!
//! # Sample conversion
//!
//! Codecs work in 8 bits. Decoded samples go through
//! [`Element::from_display`] and encoded samples through
//! [`Element::to_display`], so `f32` images live in `[0, 1]` on disk round
//! trips. Raw files hold native-endian elements with no conversion.

use crate::codec::{EncodeRequest, codec_for};
use crate::detect::Format;
use crate::raw::RawFile;
use crate::{IoError, IoResult};
use rastr_core::{Element, Image, PixelFormat};
use std::path::Path;

/// Loads an image from a PNG or JPEG file.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be read
/// - [`IoError::UnsupportedFormat`] if the signature is not recognized
/// - [`IoError::Decode`] if the codec rejects the stream
pub fn try_load<T: Element, P: AsRef<Path>>(path: P) -> IoResult<Image<T>> {
    let path = path.as_ref();
    let bytes = RawFile::open(path)?.read_to_end()?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loading image");
    load_from_memory(&bytes)
}

/// Decodes an image held in memory; see [`try_load`].
pub fn load_from_memory<T: Element>(bytes: &[u8]) -> IoResult<Image<T>> {
    let format = Format::from_bytes(bytes).ok_or_else(|| {
        IoError::UnsupportedFormat(format!(
            "unrecognized signature {:02X?}",
            &bytes[..bytes.len().min(2)]
        ))
    })?;
    tracing::debug!(%format, "dispatching to codec");

    let decoded = codec_for(format)?.decode(bytes)?;
    let data = decoded.data.into_iter().map(T::from_display).collect();
    Ok(Image::from_interleaved(
        decoded.width,
        decoded.height,
        decoded.channels,
        data,
    )?)
}

/// Loads an image, returning the empty image on any failure.
pub fn load<T: Element, P: AsRef<Path>>(path: P) -> Image<T> {
    let path = path.as_ref();
    match try_load(path) {
        Ok(img) => img,
        Err(e) => {
            tracing::error!(path = %path.display(), "failed to load image: {e}");
            Image::default()
        }
    }
}

/// Loads a raw element dump of known geometry.
///
/// A byte length that does not match `width * height * channels * T::BYTES`
/// yields the zeroed image of the requested size.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be opened or read.
pub fn try_load_raw<T: Element, P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> IoResult<Image<T>> {
    let mut file = RawFile::open(path)?;
    let bytes = file.read_to_end()?;
    Ok(Image::from_raw_bytes(width, height, format, &bytes))
}

/// Loads a raw element dump, returning the zeroed image on any failure.
pub fn load_raw<T: Element, P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Image<T> {
    let path = path.as_ref();
    match try_load_raw(path, width, height, format) {
        Ok(img) => img,
        Err(e) => {
            tracing::error!(path = %path.display(), "failed to load raw image: {e}");
            Image::new(width, height, format)
        }
    }
}

/// Saves an image; the format is chosen by [`Format::for_save`].
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for an empty image
/// - [`IoError::UnsupportedChannels`] for layouts the codec cannot store
/// - [`IoError::Io`] / [`IoError::Encode`] on write or encode failure
pub fn try_save<T: Element, P: AsRef<Path>>(image: &Image<T>, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if image.is_empty() {
        return Err(IoError::UnsupportedFormat("cannot save an empty image".into()));
    }

    let format = Format::for_save(path);
    tracing::debug!(path = %path.display(), %format, "saving image");

    let bytes = match format {
        Format::Raw => {
            let mut out = Vec::with_capacity(image.data().len() * T::BYTES);
            for &v in image.data() {
                v.extend_ne_bytes(&mut out);
            }
            out
        }
        _ => {
            if !image.pixel_format().is_display() {
                return Err(IoError::UnsupportedChannels {
                    codec: format.name(),
                    channels: image.channels(),
                });
            }
            let samples: Vec<u8> = image.data().iter().map(|&v| v.to_display()).collect();
            codec_for(format)?.encode(&EncodeRequest {
                width: image.width(),
                height: image.height(),
                format: image.pixel_format(),
                data: &samples,
            })?
        }
    };

    RawFile::create(path)?.write_all(&bytes)
}

/// Saves an image, logging failures. Returns `true` on success.
pub fn save<T: Element, P: AsRef<Path>>(image: &Image<T>, path: P) -> bool {
    let path = path.as_ref();
    match try_save(image, path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(path = %path.display(), "failed to save image: {e}");
            false
        }
    }
}
