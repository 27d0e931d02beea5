//! Image info command.
//!
//! Displays dimensions, channel layout and per-channel statistics.

use crate::InfoArgs;
use anyhow::{Context, Result};
use rastr_core::Image;
use rastr_io::Format;
use std::fmt;
use std::fs;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)
            .with_context(|| format!("Failed to stat: {}", path.display()))?
            .len();
        let format = Format::detect(path)?;
        let image = super::load_image(path)?;

        println!("{}", path.display());
        if verbose {
            let name = format.map_or("unknown", |f| f.name());
            println!("  Container:  {name}");
            println!("  File size:  {}", super::format_size(file_size));
        }
        let mut text = String::new();
        describe(&image, &mut text)?;
        print!("{text}");

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

/// Writes a human-readable summary of an image, one field per line.
pub fn describe(image: &Image<u8>, out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out, "  Resolution: {}", image.dimension())?;
    writeln!(out, "  Channels:   {}", image.channels())?;
    writeln!(out, "  Format:     {}", image.pixel_format())?;
    writeln!(out, "  Pixels:     {}", image.pixel_count())?;

    for c in 0..image.channels() {
        if let (Some((min, max)), Some(avg)) = (image.find_min_max(c), image.calc_avg_value(c)) {
            writeln!(out, "  [{c}] min {min:>3}  max {max:>3}  avg {avg:>3}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rastr_core::PixelFormat;

    fn describe_to_string(image: &Image<u8>) -> String {
        let mut text = String::new();
        describe(image, &mut text).unwrap();
        text
    }

    #[test]
    fn test_describe() {
        let img = Image::<u8>::from_vec(2, 1, vec![10, 0, 200, 30, 0, 100], PixelFormat::Rgb).unwrap();
        let text = describe_to_string(&img);
        assert!(text.contains("Resolution: 2x1"));
        assert!(text.contains("Channels:   3"));
        assert!(text.contains("[0] min  10  max  30  avg  20"));
        assert!(text.contains("[2] min 100  max 200  avg 150"));
    }

    #[test]
    fn test_describe_empty() {
        let text = describe_to_string(&Image::default());
        assert!(text.contains("Resolution: 0x0"));
        assert!(!text.contains("[0]"));
    }
}
