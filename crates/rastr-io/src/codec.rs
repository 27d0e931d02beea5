//! Codec interface.
//!
//! A [`Codec`] turns an encoded byte stream into an 8-bit interleaved
//! buffer and back. Codecs know nothing about [`Image`](rastr_core::Image);
//! the loader converts between [`Decoded`] and the container.

use crate::detect::Format;
use crate::{IoError, IoResult};
use rastr_core::PixelFormat;

/// 8-bit interleaved pixels produced by a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples per pixel.
    pub channels: usize,
    /// `width * height * channels` samples.
    pub data: Vec<u8>,
}

/// 8-bit interleaved pixels handed to an encoder.
#[derive(Debug, Clone, Copy)]
pub struct EncodeRequest<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Channel layout of `data`.
    pub format: PixelFormat,
    /// `width * height * format.channels()` samples.
    pub data: &'a [u8],
}

/// Encoder/decoder for one container format.
pub trait Codec {
    /// Format handled by this codec.
    fn format(&self) -> Format;

    /// Decodes a complete file held in memory.
    fn decode(&self, bytes: &[u8]) -> IoResult<Decoded>;

    /// Encodes a buffer into a complete file.
    fn encode(&self, req: &EncodeRequest<'_>) -> IoResult<Vec<u8>>;
}

/// Codec instance for `format` with default settings.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for [`Format::Raw`] and for formats whose
/// cargo feature is disabled.
pub fn codec_for(format: Format) -> IoResult<Box<dyn Codec>> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => Ok(Box::new(crate::png::PngCodec)),
        #[cfg(feature = "jpeg")]
        Format::Jpeg => Ok(Box::new(crate::jpeg::JpegCodec::default())),
        other => Err(IoError::UnsupportedFormat(format!("no codec for {other}"))),
    }
}

/// Checks `req.data` against its declared geometry.
pub(crate) fn check_request(req: &EncodeRequest<'_>) -> IoResult<()> {
    let expected = req.width as usize * req.height as usize * req.format.channels();
    if req.data.len() != expected {
        return Err(rastr_core::Error::size_mismatch(
            req.width,
            req.height,
            req.format.channels(),
            req.data.len(),
        )
        .into());
    }
    Ok(())
}
