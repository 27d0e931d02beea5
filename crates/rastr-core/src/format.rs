//! Pixel format tags and element data formats.
//!
//! # Types
//!
//! - [`PixelFormat`] - Channel semantics of a pixel and its canonical channel count
//! - [`DataFormat`] - Runtime tag for the scalar element type (U8, F32)
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::format::PixelFormat;
//!
//! assert_eq!(PixelFormat::Rgb.channels(), 3);
//! assert_eq!(PixelFormat::from_channels(4), PixelFormat::Rgba);
//! assert_eq!(PixelFormat::None.channels(), 0);
//! ```

/// Channel layout tag of an image.
///
/// The number in each variant's description is the canonical channel
/// count. `None` carries no channel semantics; an image tagged `None` keeps
/// whatever channel count it was built or grown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// No format; channel count is independent.
    #[default]
    None,
    /// Single luminance channel (1).
    Gray,
    /// Two color channels (2).
    Rg,
    /// Red, green, blue (3).
    Rgb,
    /// Red, green, blue, alpha (4).
    Rgba,
    /// CIE XYZ (3).
    Xyz,
    /// CIE L*u*v* (3).
    CieLuv,
    /// Hue, saturation, value (3).
    Hsv,
}

impl PixelFormat {
    /// Canonical channel count of this format. `None` reports 0.
    #[inline]
    pub const fn channels(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Gray => 1,
            Self::Rg => 2,
            Self::Rgb | Self::Xyz | Self::CieLuv | Self::Hsv => 3,
            Self::Rgba => 4,
        }
    }

    /// Format a codec-decoded buffer is tagged with.
    ///
    /// Only the display layouts a codec produces are recognised:
    /// 1 → `Gray`, 3 → `Rgb`, 4 → `Rgba`. Any other count (including 2,
    /// gray + alpha) maps to `None`.
    #[inline]
    pub const fn from_channels(channels: usize) -> Self {
        match channels {
            1 => Self::Gray,
            3 => Self::Rgb,
            4 => Self::Rgba,
            _ => Self::None,
        }
    }

    /// Whether the PNG/JPEG savers accept this layout.
    #[inline]
    pub const fn is_display(&self) -> bool {
        matches!(self, Self::Gray | Self::Rgb | Self::Rgba)
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gray => "gray",
            Self::Rg => "rg",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Xyz => "xyz",
            Self::CieLuv => "cie-luv",
            Self::Hsv => "hsv",
        }
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Runtime tag of the scalar element type.
///
/// The hot paths never branch on this; it exists for reporting and for
/// adapters that must describe the buffer to another library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// 8-bit unsigned integer, display range [0, 255].
    U8,
    /// 32-bit float, working range nominally [0, 1].
    F32,
}

impl DataFormat {
    /// Number of bytes per channel.
    #[inline]
    pub const fn bytes_per_channel(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::F32 => 4,
        }
    }

    /// Whether this is a floating-point format.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32)
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::F32 => "f32",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
