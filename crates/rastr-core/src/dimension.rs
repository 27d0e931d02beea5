//! Image extent and size-derivation helpers.
//!
//! [`ImageDimension`] is the plain `(w, h)` pair used to request sub-image
//! sizes and to derive resized extents while keeping aspect ratio.
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::ImageDimension;
//!
//! let dim = ImageDimension::new(640, 480);
//! assert_eq!(dim.resized(0.5), ImageDimension::new(320, 240));
//! assert_eq!(dim.resized_width_ar(240), ImageDimension::new(320, 240));
//! assert_eq!(dim.resized_height_ar(320), ImageDimension::new(320, 240));
//! ```
//!
//! All derivations truncate toward zero. A zero source side derives a zero
//! target side rather than dividing by zero.

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageDimension {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl ImageDimension {
    /// Creates a dimension.
    #[inline]
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Number of pixels covered.
    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Returns `true` if either side is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Both sides multiplied by `scale`, truncated.
    ///
    /// Negative or NaN scales produce a zero dimension.
    pub fn resized(&self, scale: f64) -> Self {
        Self {
            w: scale_side(self.w, scale),
            h: scale_side(self.h, scale),
        }
    }

    /// Dimension with height `new_h` and width following the aspect ratio.
    pub fn resized_width_ar(&self, new_h: u32) -> Self {
        Self {
            w: ratio_side(new_h, self.w, self.h),
            h: new_h,
        }
    }

    /// Dimension with width `new_w` and height following the aspect ratio.
    pub fn resized_height_ar(&self, new_w: u32) -> Self {
        Self {
            w: new_w,
            h: ratio_side(new_w, self.h, self.w),
        }
    }
}

impl From<(u32, u32)> for ImageDimension {
    fn from((w, h): (u32, u32)) -> Self {
        Self { w, h }
    }
}

impl std::fmt::Display for ImageDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

#[inline]
fn scale_side(side: u32, scale: f64) -> u32 {
    (side as f64 * scale).clamp(0.0, u32::MAX as f64) as u32
}

/// `given * num / den` in 64-bit, zero when `den` is zero.
#[inline]
fn ratio_side(given: u32, num: u32, den: u32) -> u32 {
    if den == 0 {
        return 0;
    }
    let v = given as u64 * num as u64 / den as u64;
    v.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_truncates() {
        let dim = ImageDimension::new(3, 5);
        assert_eq!(dim.resized(0.5), ImageDimension::new(1, 2));
        assert_eq!(dim.resized(2.0), ImageDimension::new(6, 10));
        assert_eq!(dim.resized(-1.0), ImageDimension::new(0, 0));
    }

    #[test]
    fn test_aspect_ratio() {
        let dim = ImageDimension::new(1920, 1080);
        assert_eq!(dim.resized_width_ar(540), ImageDimension::new(960, 540));
        assert_eq!(dim.resized_height_ar(960), ImageDimension::new(960, 540));
        // 100 * 1080 / 1920 = 56.25
        assert_eq!(dim.resized_height_ar(100).h, 56);
    }

    #[test]
    fn test_zero_side() {
        let dim = ImageDimension::new(10, 0);
        assert_eq!(dim.resized_width_ar(20), ImageDimension::new(0, 20));
        assert!(dim.is_empty());
        assert_eq!(dim.pixel_count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ImageDimension::new(4, 2).to_string(), "4x2");
    }
}
