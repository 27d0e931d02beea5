//! Bresenham line traversal.
//!
//! [`LinePixels`] walks every integer coordinate of a line from the first
//! endpoint to the second, both inclusive, without anti-aliasing.
//! No clipping is done here; see [`crate::clip`].

use std::iter::FusedIterator;

/// Iterator over the pixels of a Bresenham line.
///
/// ```rust
/// use rastr_draw::LinePixels;
///
/// let px: Vec<_> = LinePixels::new(0, 0, 3, 1).collect();
/// assert_eq!(px, [(0, 0), (1, 0), (2, 1), (3, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePixels {
    /// Line from `(x0, y0)` to `(x1, y1)`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            (self.x1 - self.x).abs().max((self.y1 - self.y).abs()) as usize + 1
        }
    }
}

impl Iterator for LinePixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = (self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePixels {}

impl FusedIterator for LinePixels {}

/// Calls `f(x, y)` for every pixel of the line, in order.
pub fn process_line_pixels<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut f: F)
where
    F: FnMut(i32, i32),
{
    for (x, y) in LinePixels::new(x0, y0, x1, y1) {
        f(x, y);
    }
}
