//! PNG format support.
//!
//! Decoding normalizes every PNG to 8 bits per sample: palettes and
//! low-depth grayscale are expanded, 16-bit samples are stripped to their
//! high byte. The channel count of the file is kept as is.
//!
//! Encoding accepts 8-bit Gray, Rgb and Rgba buffers.
//!
//! # Example
//!
//! ```rust,ignore
//! use rastr_io::{Codec, png::PngCodec};
//!
//! let decoded = PngCodec.decode(&std::fs::read("input.png")?)?;
//! ```

use crate::codec::{Codec, Decoded, EncodeRequest, check_request};
use crate::detect::Format;
use crate::{IoError, IoResult};
use rastr_core::PixelFormat;
use std::io::Cursor;

/// PNG codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl Codec for PngCodec {
    fn format(&self) -> Format {
        Format::Png
    }

    fn decode(&self, bytes: &[u8]) -> IoResult<Decoded> {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info().map_err(IoError::decode)?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader.next_frame(&mut buf).map_err(IoError::decode)?;
        buf.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(IoError::Decode(format!(
                "unexpected {:?} output after normalization",
                info.bit_depth
            )));
        }

        let channels = info.color_type.samples();
        tracing::trace!(
            width = info.width,
            height = info.height,
            channels,
            "decoded png"
        );
        Ok(Decoded {
            width: info.width,
            height: info.height,
            channels,
            data: buf,
        })
    }

    fn encode(&self, req: &EncodeRequest<'_>) -> IoResult<Vec<u8>> {
        let color_type = match req.format {
            PixelFormat::Gray => png::ColorType::Grayscale,
            PixelFormat::Rgb => png::ColorType::Rgb,
            PixelFormat::Rgba => png::ColorType::Rgba,
            other => {
                return Err(IoError::UnsupportedChannels {
                    codec: "png",
                    channels: other.channels(),
                });
            }
        };
        check_request(req)?;

        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, req.width, req.height);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().map_err(IoError::encode)?;
            writer.write_image_data(req.data).map_err(IoError::encode)?;
            writer.finish().map_err(IoError::encode)?;
        }
        Ok(out)
    }
}
