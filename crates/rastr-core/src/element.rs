//! Scalar element types stored in an [`Image`](crate::Image).
//!
//! The container is generic over [`Element`], implemented for the two
//! representations the crate works with:
//!
//! - `u8` - display representation, range [0, 255]
//! - `f32` - working representation, nominally [0, 1] for color data but
//!   unconstrained for derived data (gradients, differences)
//!
//! Behaviour that differs between the two (whether `abs` does anything,
//! how values map to 8-bit display range on save, whether a cast clamps) is
//! resolved statically through the trait, never by inspecting a runtime tag.
//!
//! # Casting rule
//!
//! [`Element::from_f64`] is a plain numeric cast. Integral destinations
//! truncate toward zero and clamp to their range (values above 255 become
//! 255, negatives become 0). Float destinations never clamp.
//!
//! ```
//! use rastr_core::Element;
//!
//! assert_eq!(<u8 as Element>::from_f64(300.0), 255);
//! assert_eq!(<u8 as Element>::from_f64(-4.0), 0);
//! assert_eq!(<u8 as Element>::from_f64(12.9), 12);
//! assert_eq!(<f32 as Element>::from_f64(300.0), 300.0);
//! ```

use crate::format::DataFormat;
use std::fmt;

/// Trait for scalar pixel element types.
///
/// # Required Methods
///
/// - [`to_f64`](Element::to_f64) / [`from_f64`](Element::from_f64) - numeric cast, no rescaling
/// - [`to_display`](Element::to_display) / [`from_display`](Element::from_display) - mapping to and from 8-bit display range
/// - [`from_ne_bytes`](Element::from_ne_bytes) / [`extend_ne_bytes`](Element::extend_ne_bytes) - raw storage layout
///
/// The slice helpers [`abs_slice`](Element::abs_slice) and
/// [`min_max_strided`](Element::min_max_strided) have scalar defaults; the
/// `f32` implementation swaps in vectorised versions when the `simd`
/// feature is enabled. Both paths produce identical results.
pub trait Element: Copy + Default + PartialOrd + Send + Sync + fmt::Debug + 'static {
    /// Runtime tag of this element type.
    const FORMAT: DataFormat;

    /// Size of one element in raw storage.
    const BYTES: usize;

    /// Zero value.
    fn zero() -> Self;

    /// Widens to `f64` without changing the value.
    fn to_f64(self) -> f64;

    /// Numeric cast from `f64` (see the module docs for the clamp rule).
    fn from_f64(v: f64) -> Self;

    /// Casts to another element type with the same rule as [`from_f64`](Element::from_f64).
    #[inline]
    fn cast<V: Element>(self) -> V {
        V::from_f64(self.to_f64())
    }

    /// Absolute value; identity for unsigned types.
    fn abs(self) -> Self;

    /// Maps to the 8-bit display range used when encoding.
    ///
    /// `u8` passes through; `f32` is scaled from [0, 1] by 255 and clamped.
    fn to_display(self) -> u8;

    /// Maps a decoded 8-bit sample into this representation.
    ///
    /// `u8` passes through; `f32` is divided by 255.
    fn from_display(v: u8) -> Self;

    /// Reads one element from native-endian bytes (`bytes.len() == BYTES`).
    fn from_ne_bytes(bytes: &[u8]) -> Self;

    /// Appends the native-endian bytes of this element.
    fn extend_ne_bytes(self, out: &mut Vec<u8>);

    /// Replaces every value with its absolute value.
    #[inline]
    fn abs_slice(data: &mut [Self]) {
        for v in data.iter_mut() {
            *v = v.abs();
        }
    }

    /// Minimum and maximum of `data[offset], data[offset + stride], ...`.
    ///
    /// Uses natural ordering; returns `None` when no element is visited.
    fn min_max_strided(data: &[Self], stride: usize, offset: usize) -> Option<(Self, Self)> {
        scalar_min_max(data, stride, offset)
    }
}

/// Scalar min/max over a strided view. The first element seeds both ends.
pub(crate) fn scalar_min_max<T: Element>(
    data: &[T],
    stride: usize,
    offset: usize,
) -> Option<(T, T)> {
    if stride == 0 {
        return None;
    }
    let mut iter = data.iter().skip(offset).step_by(stride);
    let first = *iter.next()?;
    let (mut min, mut max) = (first, first);
    for &v in iter {
        if v > max {
            max = v;
        }
        if v < min {
            min = v;
        }
    }
    Some((min, max))
}

impl Element for u8 {
    const FORMAT: DataFormat = DataFormat::U8;
    const BYTES: usize = 1;

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        // `as` saturates and maps NaN to 0; the clamp keeps intent explicit.
        v.clamp(0.0, 255.0) as u8
    }

    #[inline]
    fn abs(self) -> Self {
        self
    }

    #[inline]
    fn to_display(self) -> u8 {
        self
    }

    #[inline]
    fn from_display(v: u8) -> Self {
        v
    }

    #[inline]
    fn from_ne_bytes(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn extend_ne_bytes(self, out: &mut Vec<u8>) {
        out.push(self);
    }

    #[inline]
    fn abs_slice(_data: &mut [Self]) {}
}

impl Element for f32 {
    const FORMAT: DataFormat = DataFormat::F32;
    const BYTES: usize = 4;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn to_display(self) -> u8 {
        <u8 as Element>::from_f64(self as f64 * 255.0)
    }

    #[inline]
    fn from_display(v: u8) -> Self {
        (v as f64 / 255.0) as f32
    }

    #[inline]
    fn from_ne_bytes(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[..4]);
        f32::from_ne_bytes(raw)
    }

    #[inline]
    fn extend_ne_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }

    #[cfg(feature = "simd")]
    #[inline]
    fn abs_slice(data: &mut [Self]) {
        crate::simd::abs_f32(data);
    }

    #[cfg(feature = "simd")]
    fn min_max_strided(data: &[Self], stride: usize, offset: usize) -> Option<(Self, Self)> {
        if stride == 1 && offset == 0 {
            crate::simd::min_max_f32(data)
        } else {
            scalar_min_max(data, stride, offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_u8_clamp_cast() {
        assert_eq!(<u8 as Element>::from_f64(255.9), 255);
        assert_eq!(<u8 as Element>::from_f64(1000.0), 255);
        assert_eq!(<u8 as Element>::from_f64(-0.5), 0);
        assert_eq!(<u8 as Element>::from_f64(f64::NAN), 0);
        assert_eq!(<u8 as Element>::from_f64(42.0), 42);
    }

    #[test]
    fn test_f32_never_clamps() {
        assert_eq!(<f32 as Element>::from_f64(-3.5), -3.5);
        assert_eq!(<f32 as Element>::from_f64(512.25), 512.25);
    }

    #[test]
    fn test_cast_roundtrip_in_range() {
        for v in [0u8, 1, 127, 254, 255] {
            let f: f32 = v.cast();
            let back: u8 = f.cast();
            assert_eq!(back, v);
        }
    }

    #[test]
    fn test_display_mapping() {
        assert_eq!(1.0f32.to_display(), 255);
        assert_eq!(0.0f32.to_display(), 0);
        assert_eq!(2.0f32.to_display(), 255);
        assert_eq!((-1.0f32).to_display(), 0);
        assert_relative_eq!(<f32 as Element>::from_display(255), 1.0);
        assert_eq!(<u8 as Element>::from_display(77), 77);
    }

    #[test]
    fn test_abs() {
        assert_eq!(Element::abs(-2.5f32), 2.5);
        assert_eq!(Element::abs(200u8), 200);
        let mut data = [-1.0f32, 2.0, -3.0];
        f32::abs_slice(&mut data);
        assert_eq!(data, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ne_bytes() {
        let mut out = Vec::new();
        1.5f32.extend_ne_bytes(&mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(<f32 as Element>::from_ne_bytes(&out), 1.5);
    }

    #[test]
    fn test_min_max_strided() {
        let data = [5u8, 100, 3, 200, 9, 0];
        assert_eq!(u8::min_max_strided(&data, 2, 0), Some((3, 9)));
        assert_eq!(u8::min_max_strided(&data, 2, 1), Some((0, 200)));
        assert_eq!(u8::min_max_strided(&[], 2, 0), None);
        assert_eq!(u8::min_max_strided(&data, 0, 0), None);
    }
}
