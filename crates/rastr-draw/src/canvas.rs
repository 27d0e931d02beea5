//! Drawing target abstraction.

use rastr_core::{Element, Image};

/// A pixel grid that lines can be written into.
///
/// The rasterizer only needs the grid size and a way to store a value at
/// an in-bounds coordinate.
pub trait Canvas {
    /// Scalar element written per channel.
    type Value: Copy;

    /// Width and height in pixels.
    fn canvas_size(&self) -> (i32, i32);

    /// Writes `value` at `(x, y)`.
    ///
    /// Copies the leading `min(value.len(), channels)` elements. Returns
    /// `false` and writes nothing if `(x, y)` is outside the grid.
    fn put(&mut self, x: i32, y: i32, value: &[Self::Value]) -> bool;
}

impl<T: Element> Canvas for Image<T> {
    type Value = T;

    #[inline]
    fn canvas_size(&self) -> (i32, i32) {
        (
            i32::try_from(self.width()).unwrap_or(i32::MAX),
            i32::try_from(self.height()).unwrap_or(i32::MAX),
        )
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, value: &[T]) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return false;
        }
        let px = self.pixel_at_mut(x as u32, y as u32);
        let n = px.len().min(value.len());
        px[..n].copy_from_slice(&value[..n]);
        true
    }
}
