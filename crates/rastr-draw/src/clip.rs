//! Cohen-Sutherland segment clipping against an image window.
//!
//! Each endpoint gets a 4-bit out-code describing where it lies relative to
//! the `w x h` image:
//!
//! ```text
//!            x < 0      0 <= x < w      x >= w
//!          +--------+---------------+---------+
//!  y >= h  |  0b1001|     0b1000    |  0b1010 |   TOP
//!          +--------+---------------+---------+
//!  inside  |  0b0001|     0b0000    |  0b0010 |
//!          +--------+---------------+---------+
//!  y < 0   |  0b0101|     0b0100    |  0b0110 |   BOTTOM
//!          +--------+---------------+---------+
//!             LEFT                     RIGHT
//! ```
//!
//! A segment whose codes OR to zero is accepted as is; codes that AND to
//! non-zero share an outside half-plane and are rejected. Otherwise the
//! outside endpoint is moved onto the window edge `[0, w-1] x [0, h-1]` and
//! the test repeats. Edges are tried in the order TOP, BOTTOM, RIGHT, LEFT;
//! intersections are computed in `f64` and truncated toward zero.

/// Inside the window.
pub const INSIDE: u8 = 0b0000;
/// `x < 0`.
pub const LEFT: u8 = 0b0001;
/// `x >= w`.
pub const RIGHT: u8 = 0b0010;
/// `y < 0`.
pub const BOTTOM: u8 = 0b0100;
/// `y >= h`.
pub const TOP: u8 = 0b1000;

/// Upper bound on clip passes; each pass pins one endpoint to an edge.
const MAX_PASSES: usize = 8;

/// A line segment between two integer endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Start x.
    pub x0: i32,
    /// Start y.
    pub y0: i32,
    /// End x.
    pub x1: i32,
    /// End y.
    pub y1: i32,
}

impl Segment {
    /// Creates a segment.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Out-code of `(x, y)` relative to a `w x h` window.
///
/// Horizontal and vertical bits are exclusive per axis.
#[inline]
pub fn out_code(x: i32, y: i32, w: i32, h: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= w {
        code |= RIGHT;
    }
    if y < 0 {
        code |= BOTTOM;
    } else if y >= h {
        code |= TOP;
    }
    code
}

/// Clips `seg` to the `w x h` window.
///
/// Returns the visible part with both endpoints inside the window, or
/// `None` if nothing is visible (including for an empty window).
///
/// ```rust
/// use rastr_draw::clip::{clip_line, Segment};
///
/// let clipped = clip_line(Segment::new(0, 0, 512, 512), 512, 512);
/// assert_eq!(clipped, Some(Segment::new(0, 0, 511, 511)));
///
/// assert_eq!(clip_line(Segment::new(-100, -100, -1, -1), 512, 512), None);
/// ```
pub fn clip_line(seg: Segment, w: i32, h: i32) -> Option<Segment> {
    if w <= 0 || h <= 0 {
        return None;
    }
    let Segment {
        mut x0,
        mut y0,
        mut x1,
        mut y1,
    } = seg;
    let xmax = (w - 1) as f64;
    let ymax = (h - 1) as f64;

    let mut code0 = out_code(x0, y0, w, h);
    let mut code1 = out_code(x1, y1, w, h);

    for _ in 0..MAX_PASSES {
        if code0 | code1 == INSIDE {
            return Some(Segment::new(x0, y0, x1, y1));
        }
        if code0 & code1 != INSIDE {
            return None;
        }

        let out = if code0 != INSIDE { code0 } else { code1 };
        let (fx0, fy0, fx1, fy1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
        let (x, y) = if out & TOP != 0 {
            (fx0 + (fx1 - fx0) * (ymax - fy0) / (fy1 - fy0), ymax)
        } else if out & BOTTOM != 0 {
            (fx0 + (fx1 - fx0) * (0.0 - fy0) / (fy1 - fy0), 0.0)
        } else if out & RIGHT != 0 {
            (xmax, fy0 + (fy1 - fy0) * (xmax - fx0) / (fx1 - fx0))
        } else {
            (0.0, fy0 + (fy1 - fy0) * (0.0 - fx0) / (fx1 - fx0))
        };

        // `as` truncates toward zero and saturates.
        if out == code0 {
            x0 = x as i32;
            y0 = y as i32;
            code0 = out_code(x0, y0, w, h);
        } else {
            x1 = x as i32;
            y1 = y as i32;
            code1 = out_code(x1, y1, w, h);
        }
    }

    tracing::trace!(?seg, w, h, "clip did not converge, rejecting segment");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_codes() {
        assert_eq!(out_code(5, 5, 10, 10), INSIDE);
        assert_eq!(out_code(-1, 5, 10, 10), LEFT);
        assert_eq!(out_code(10, 5, 10, 10), RIGHT);
        assert_eq!(out_code(5, -1, 10, 10), BOTTOM);
        assert_eq!(out_code(5, 10, 10, 10), TOP);
        assert_eq!(out_code(-3, 20, 10, 10), LEFT | TOP);
        assert_eq!(out_code(9, 9, 10, 10), INSIDE);
    }

    #[test]
    fn test_trivial_accept() {
        let seg = Segment::new(1, 2, 8, 9);
        assert_eq!(clip_line(seg, 10, 10), Some(seg));
    }

    #[test]
    fn test_trivial_reject() {
        assert_eq!(clip_line(Segment::new(-5, 0, -1, 9), 10, 10), None);
        assert_eq!(clip_line(Segment::new(0, 10, 9, 20), 10, 10), None);
    }

    #[test]
    fn test_clip_diagonal_overflow() {
        let clipped = clip_line(Segment::new(0, 512, 512, 0), 512, 512).unwrap();
        // TOP is handled first: y = 511, x = 512 * 1 / 512 = 1.
        assert_eq!((clipped.x0, clipped.y0), (1, 511));
        assert_eq!((clipped.x1, clipped.y1), (511, 1));
    }

    #[test]
    fn test_clip_horizontal_through() {
        let clipped = clip_line(Segment::new(-50, 4, 50, 4), 10, 10).unwrap();
        assert_eq!(clipped, Segment::new(0, 4, 9, 4));
    }

    #[test]
    fn test_corner_miss_rejected() {
        // Passes outside the top-left corner without entering the window.
        assert_eq!(clip_line(Segment::new(-10, 2, 2, -10), 10, 10), None);
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(clip_line(Segment::new(0, 0, 1, 1), 0, 10), None);
        assert_eq!(clip_line(Segment::new(0, 0, 1, 1), 10, 0), None);
    }

    #[test]
    fn test_endpoints_inside_after_clip() {
        let cases = [
            Segment::new(-20, -7, 33, 41),
            Segment::new(15, -3, -4, 12),
            Segment::new(5, 5, 100, 6),
            Segment::new(-1, 30, 25, -2),
        ];
        for seg in cases {
            if let Some(c) = clip_line(seg, 20, 15) {
                assert_eq!(out_code(c.x0, c.y0, 20, 15), INSIDE, "{seg:?} -> {c:?}");
                assert_eq!(out_code(c.x1, c.y1, 20, 15), INSIDE, "{seg:?} -> {c:?}");
            }
        }
    }
}
