//! Draws a marker cross over an existing image.

use crate::AnnotateArgs;
use anyhow::Result;
use rastr_core::Image;
use rastr_draw::{draw_line, draw_rect};

/// Draws red (0,0)-(255,255) and green (0,255)-(255,0), plus a yellow
/// outline of the whole image when `frame` is set.
///
/// Gray images receive the first channel of each color. Returns the
/// number of pixels written.
pub fn annotate(img: &mut Image<u8>, frame: bool) -> usize {
    let mut written = draw_line(img, &super::RED, 0, 0, 255, 255);
    written += draw_line(img, &super::GREEN, 0, 255, 255, 0);
    if frame {
        let (w, h) = (img.width() as i32, img.height() as i32);
        written += draw_rect(img, &super::YELLOW, 0, 0, w - 1, h - 1);
    }
    written
}

/// Runs the annotate command.
pub fn run(args: AnnotateArgs, verbose: bool) -> Result<()> {
    let mut img = super::load_image(&args.input)?;
    let written = annotate(&mut img, args.frame);
    tracing::debug!(written, "annotated {}", args.input.display());
    super::save_image(&args.output, &img)?;

    if verbose {
        println!(
            "{} -> {} ({} pixels drawn)",
            args.input.display(),
            args.output.display(),
            written
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rastr_core::PixelFormat;

    #[test]
    fn test_cross_on_small_image() {
        let mut img = Image::<u8>::new(64, 32, PixelFormat::Rgb);
        let written = annotate(&mut img, false);
        assert_eq!(img.pixel_at(0, 0), &super::super::RED);
        assert_eq!(img.pixel_at(31, 31), &super::super::RED);
        assert_eq!(img.pixel_at(63, 0), &[0, 0, 0]);
        assert!(written > 0);
    }

    #[test]
    fn test_frame_on_gray() {
        let mut img = Image::<u8>::new(300, 300, PixelFormat::Gray);
        annotate(&mut img, true);
        assert_eq!(img.pixel_at(299, 150), &[255]);
        assert_eq!(img.pixel_at(150, 299), &[255]);
        assert_eq!(img.pixel_at(280, 20), &[0]);
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let args = AnnotateArgs {
            input: dir.path().join("nope.png"),
            output: dir.path().join("out.png"),
            frame: false,
        };
        assert!(run(args, false).is_err());
    }
}
