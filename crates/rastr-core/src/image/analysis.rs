//! Per-channel numeric analysis.

use super::Image;
use crate::Element;

impl<T: Element> Image<T> {
    /// Replaces every element with its absolute value. No-op for `u8`.
    pub fn abs(&mut self) {
        T::abs_slice(&mut self.data);
    }

    /// Smallest and largest value of `channel`.
    ///
    /// `None` for an empty image or an out-of-range channel.
    ///
    /// ```rust
    /// use rastr_core::{Image, PixelFormat};
    ///
    /// let img = Image::<u8>::from_vec(2, 1, vec![9, 1, 3, 7], PixelFormat::Rg).unwrap();
    /// assert_eq!(img.find_min_max(0), Some((3, 9)));
    /// assert_eq!(img.find_min_max(1), Some((1, 7)));
    /// assert_eq!(img.find_min_max(2), None);
    /// ```
    pub fn find_min_max(&self, channel: usize) -> Option<(T, T)> {
        if channel >= self.channels {
            return None;
        }
        T::min_max_strided(&self.data, self.channels, channel)
    }

    /// Mean of `channel`, accumulated in `f64` and cast back to `T`.
    ///
    /// For `u8` the mean is truncated. `None` for an empty image or an
    /// out-of-range channel.
    pub fn calc_avg_value(&self, channel: usize) -> Option<T> {
        if channel >= self.channels || self.is_empty() {
            return None;
        }
        let (sum, count) = self
            .data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .fold((0.0f64, 0usize), |(sum, n), v| (sum + v.to_f64(), n + 1));
        Some(T::from_f64(sum / count as f64))
    }
}
