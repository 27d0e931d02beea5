//! # rastr-draw
//!
//! Line rasterization for rastr images.
//!
//! A segment is first clipped to the image window with Cohen-Sutherland
//! ([`clip`]), then walked with Bresenham ([`LinePixels`]) and written
//! pixel by pixel through the [`Canvas`] trait.
//!
//! ```rust
//! use rastr_core::{Image, PixelFormat};
//! use rastr_draw::{draw_line, process_line_pixels};
//!
//! let mut img = Image::<u8>::new(64, 64, PixelFormat::Rgb);
//! img.clear(255);
//! draw_line(&mut img, &[0, 0, 255], 0, 64, 64, 0);
//!
//! let mut count = 0;
//! process_line_pixels(0, 0, 9, 3, |_, _| count += 1);
//! assert_eq!(count, 10);
//! ```
//!
//! # Dependencies
//!
//! - `rastr-core` - [`Image`](rastr_core::Image) implements [`Canvas`]
//! - [`tracing`] - Trace output for rejected segments

#![warn(missing_docs)]

pub mod canvas;
pub mod clip;
pub mod draw;
pub mod line;

pub use canvas::Canvas;
pub use clip::{Segment, clip_line, out_code};
pub use draw::{draw_line, draw_polyline, draw_rect};
pub use line::{LinePixels, process_line_pixels};
