//! JPEG format support.
//!
//! Decodes baseline and progressive JPEGs via `jpeg-decoder` and encodes
//! via `jpeg-encoder`.
//!
//! # Decoded layouts
//!
//! | Source      | Channels | Notes                      |
//! |-------------|----------|----------------------------|
//! | L8          | 1        |                            |
//! | L16         | 1        | high byte kept             |
//! | RGB24       | 3        |                            |
//! | CMYK32      | 3        | approximate RGB conversion |
//!
//! # Encoding
//!
//! Gray encodes as luma and Rgb as color. Rgba drops its alpha channel,
//! JPEG has nowhere to store it. Dimensions must fit in 16 bits.

use crate::codec::{Codec, Decoded, EncodeRequest, check_request};
use crate::detect::Format;
use crate::{IoError, IoResult};
use rastr_core::PixelFormat;

/// Default encoder quality.
pub const DEFAULT_QUALITY: u8 = 90;

/// JPEG codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegCodec {
    quality: u8,
}

impl JpegCodec {
    /// Creates a codec encoding at [`DEFAULT_QUALITY`].
    pub fn new() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }

    /// Creates a codec with the given quality, clamped to `1..=100`.
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Encoder quality.
    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for JpegCodec {
    fn format(&self) -> Format {
        Format::Jpeg
    }

    fn decode(&self, bytes: &[u8]) -> IoResult<Decoded> {
        let mut decoder = jpeg_decoder::Decoder::new(bytes);
        let pixels = decoder.decode().map_err(IoError::decode)?;
        let info = decoder
            .info()
            .ok_or_else(|| IoError::Decode("missing JPEG info".into()))?;

        let (channels, data) = match info.pixel_format {
            jpeg_decoder::PixelFormat::L8 => (1, pixels),
            jpeg_decoder::PixelFormat::L16 => (1, pixels.chunks_exact(2).map(|l| l[0]).collect()),
            jpeg_decoder::PixelFormat::RGB24 => (3, pixels),
            jpeg_decoder::PixelFormat::CMYK32 => (3, cmyk_to_rgb(&pixels)),
        };

        tracing::trace!(
            width = info.width,
            height = info.height,
            channels,
            pixel_format = ?info.pixel_format,
            "decoded jpeg"
        );
        Ok(Decoded {
            width: u32::from(info.width),
            height: u32::from(info.height),
            channels,
            data,
        })
    }

    fn encode(&self, req: &EncodeRequest<'_>) -> IoResult<Vec<u8>> {
        use jpeg_encoder::{ColorType, Encoder};

        let color_type = match req.format {
            PixelFormat::Gray => ColorType::Luma,
            PixelFormat::Rgb | PixelFormat::Rgba => ColorType::Rgb,
            other => {
                return Err(IoError::UnsupportedChannels {
                    codec: "jpeg",
                    channels: other.channels(),
                });
            }
        };
        check_request(req)?;

        let (Ok(width), Ok(height)) = (u16::try_from(req.width), u16::try_from(req.height)) else {
            return Err(IoError::Encode(format!(
                "{}x{} exceeds the JPEG size limit",
                req.width, req.height
            )));
        };

        let stripped: Vec<u8>;
        let data = if req.format == PixelFormat::Rgba {
            stripped = req
                .data
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            &stripped[..]
        } else {
            req.data
        };

        let mut buffer = Vec::new();
        Encoder::new(&mut buffer, self.quality)
            .encode(data, width, height, color_type)
            .map_err(IoError::encode)?;
        Ok(buffer)
    }
}

fn cmyk_to_rgb(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .flat_map(|cmyk| {
            let k = 1.0 - cmyk[3] as f32 / 255.0;
            let ink = |c: u8| ((1.0 - c as f32 / 255.0) * k * 255.0) as u8;
            [ink(cmyk[0]), ink(cmyk[1]), ink(cmyk[2])]
        })
        .collect()
}
