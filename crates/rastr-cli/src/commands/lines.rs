//! Demo scene: two diagonals on a white canvas.

use crate::LinesArgs;
use anyhow::{Context, Result};
use rastr_core::{Image, PixelFormat};
use rastr_draw::draw_line;

/// Builds a `size`x`size` white RGB canvas with a red line from (0,0) to
/// (size,size) and a blue line from (0,size) to (size,0).
///
/// Both endpoints sit one pixel past the canvas and are clipped.
pub fn demo_scene(size: u32) -> Result<Image<u8>> {
    let n = i32::try_from(size).context("canvas size exceeds i32")?;
    let mut img = Image::<u8>::new(size, size, PixelFormat::Rgb);
    img.clear(255);

    let red = draw_line(&mut img, &super::RED, 0, 0, n, n);
    let blue = draw_line(&mut img, &super::BLUE, 0, n, n, 0);
    tracing::debug!(red, blue, "pixels written");
    Ok(img)
}

/// Runs the lines command.
pub fn run(args: LinesArgs, verbose: bool) -> Result<()> {
    let img = demo_scene(args.size)?;
    super::save_image(&args.output, &img)?;

    if verbose {
        println!("Wrote {}x{} scene to {}", args.size, args.size, args.output.display());
    }
    Ok(())
}
