//! Border policies for out-of-bounds pixel access.
//!
//! A [`BorderMode`] maps a coordinate that may lie outside `[0, len)` back
//! into the image, or reports that the sample is the zero pixel. Inside the
//! image every mode is the identity.
//!
//! ```text
//!   len = 4         -2  -1 | 0  1  2  3 | 4   5
//!   Clamp            0   0 | 0  1  2  3 | 3   3
//!   Wrap             3   3 | 0  1  2  3 | 0   0
//!   Enlarge          1   0 | 0  1  2  3 | 3   2
//!   Zero             -   - | 0  1  2  3 | -   -
//! ```
//!
//! `Wrap` is a single step: any negative coordinate maps to the last pixel
//! and any overflow maps to the first. `Enlarge` reflects once about the
//! edge (the edge pixel repeats); a coordinate still outside after one
//! reflection is clamped.

/// Policy for sampling outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderMode {
    /// Repeat the nearest edge pixel.
    #[default]
    Clamp,
    /// Jump to the opposite edge.
    Wrap,
    /// Mirror about the edge, edge pixel included.
    Enlarge,
    /// Out-of-range samples are zero.
    Zero,
}

impl BorderMode {
    /// Maps one coordinate into `[0, len)`.
    ///
    /// Returns `None` when the sample is the zero pixel: for [`Zero`](Self::Zero)
    /// outside the range, and for every mode when `len == 0`.
    pub fn map_coord(&self, v: i32, len: u32) -> Option<u32> {
        if len == 0 {
            return None;
        }
        let last = len as i64 - 1;
        let v = v as i64;
        if (0..=last).contains(&v) {
            return Some(v as u32);
        }
        let mapped = match self {
            BorderMode::Zero => return None,
            BorderMode::Clamp => v.clamp(0, last),
            BorderMode::Wrap => {
                if v < 0 {
                    last
                } else {
                    0
                }
            }
            BorderMode::Enlarge => {
                let reflected = if v < 0 { -v - 1 } else { 2 * len as i64 - v - 1 };
                reflected.clamp(0, last)
            }
        };
        Some(mapped as u32)
    }

    /// Maps a 2D coordinate into a `width` x `height` image.
    #[inline]
    pub fn fold(&self, x: i32, y: i32, width: u32, height: u32) -> Option<(u32, u32)> {
        Some((self.map_coord(x, width)?, self.map_coord(y, height)?))
    }
}
