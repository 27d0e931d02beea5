//! Clipped line drawing and shapes built from it.
//!
//! # Functions
//!
//! - [`draw_line`] - Clip a segment to the canvas and write it with Bresenham
//! - [`draw_polyline`] - Connected segments through a list of points
//! - [`draw_rect`] - Rectangle outline from two corners

use crate::canvas::Canvas;
use crate::clip::{Segment, clip_line};
use crate::line::LinePixels;

/// Draws a constant-valued line from `(x0, y0)` to `(x1, y1)`.
///
/// The segment is clipped to the canvas first; only the visible part is
/// walked. Returns the number of pixels written, 0 when the segment lies
/// completely outside.
///
/// # Example
///
/// ```rust
/// use rastr_core::{Image, PixelFormat};
/// use rastr_draw::draw_line;
///
/// let mut img = Image::<u8>::new(512, 512, PixelFormat::Rgb);
/// let written = draw_line(&mut img, &[255, 0, 0], 0, 0, 512, 512);
/// assert_eq!(written, 512);
/// assert_eq!(img.pixel_at(511, 511), &[255, 0, 0]);
/// ```
pub fn draw_line<C>(canvas: &mut C, value: &[C::Value], x0: i32, y0: i32, x1: i32, y1: i32) -> usize
where
    C: Canvas + ?Sized,
{
    let (w, h) = canvas.canvas_size();
    let Some(seg) = clip_line(Segment::new(x0, y0, x1, y1), w, h) else {
        tracing::trace!(x0, y0, x1, y1, w, h, "line outside canvas");
        return 0;
    };
    let mut written = 0;
    for (x, y) in LinePixels::new(seg.x0, seg.y0, seg.x1, seg.y1) {
        if canvas.put(x, y, value) {
            written += 1;
        }
    }
    written
}

/// Draws segments between consecutive `points`.
///
/// Shared vertices are written once per adjoining segment. Returns the
/// total number of writes.
pub fn draw_polyline<C>(canvas: &mut C, value: &[C::Value], points: &[(i32, i32)]) -> usize
where
    C: Canvas + ?Sized,
{
    points
        .windows(2)
        .map(|p| draw_line(canvas, value, p[0].0, p[0].1, p[1].0, p[1].1))
        .sum()
}

/// Draws the outline of the rectangle spanned by two corners.
///
/// Corners may be given in any order and are included in the outline.
pub fn draw_rect<C>(canvas: &mut C, value: &[C::Value], x0: i32, y0: i32, x1: i32, y1: i32) -> usize
where
    C: Canvas + ?Sized,
{
    let (xmin, xmax) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    let (ymin, ymax) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    draw_polyline(
        canvas,
        value,
        &[(xmin, ymin), (xmax, ymin), (xmax, ymax), (xmin, ymax), (xmin, ymin)],
    )
}
