//! Vectorised kernels for `f32` buffers.
//!
//! Enabled with the `simd` feature and used through the [`Element`](crate::Element)
//! slice hooks, so [`Image::abs`](crate::Image::abs) and single-channel
//! [`Image::find_min_max`](crate::Image::find_min_max) pick them up
//! transparently. Results compare equal to the scalar path.
//!
//! Processes 8 lanes at a time with `wide::f32x8`; the tail is scalar.

use wide::f32x8;

#[inline]
fn load(chunk: &[f32]) -> f32x8 {
    let mut lanes = [0.0f32; 8];
    lanes.copy_from_slice(chunk);
    f32x8::from(lanes)
}

/// In-place absolute value.
pub fn abs_f32(data: &mut [f32]) {
    let mut chunks = data.chunks_exact_mut(8);
    for chunk in &mut chunks {
        let v = load(chunk).abs();
        chunk.copy_from_slice(&v.to_array());
    }
    for v in chunks.into_remainder() {
        *v = v.abs();
    }
}

/// Minimum and maximum of a contiguous slice; `None` when empty.
///
/// Slices containing NaN take the scalar path so ordering matches it exactly.
pub fn min_max_f32(data: &[f32]) -> Option<(f32, f32)> {
    if data.len() < 16 || data.iter().any(|v| v.is_nan()) {
        return crate::element::scalar_min_max(data, 1, 0);
    }
    let chunks = data.chunks_exact(8);
    let remainder = chunks.remainder();
    let mut vmin = f32x8::splat(f32::INFINITY);
    let mut vmax = f32x8::splat(f32::NEG_INFINITY);
    for chunk in chunks {
        let v = load(chunk);
        vmin = vmin.min(v);
        vmax = vmax.max(v);
    }
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in vmin.to_array().iter().chain(remainder) {
        min = min.min(v);
    }
    for &v in vmax.to_array().iter().chain(remainder) {
        max = max.max(v);
    }
    Some((min, max))
}
