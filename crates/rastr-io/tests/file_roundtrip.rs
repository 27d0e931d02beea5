use approx::assert_relative_eq;
use rastr_core::{Image, PixelFormat};
use rastr_io::{Format, IoError, load, load_raw, save, try_load, try_load_raw, try_save};

fn gradient(width: u32, height: u32, format: PixelFormat) -> Image<u8> {
    let mut img = Image::<u8>::new(width, height, format);
    for (i, v) in img.data_mut().iter_mut().enumerate() {
        *v = (i * 7 % 256) as u8;
    }
    img
}

#[test]
fn png_u8_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    for format in [PixelFormat::Gray, PixelFormat::Rgb, PixelFormat::Rgba] {
        let path = dir.path().join(format!("img_{}.png", format.name()));
        let img = gradient(13, 7, format);
        try_save(&img, &path).unwrap();
        assert_eq!(Format::detect(&path).unwrap(), Some(Format::Png));

        let back: Image<u8> = try_load(&path).unwrap();
        assert_eq!(back, img, "{format}");
    }
}

#[test]
fn png_f32_scales_through_display_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("float.png");

    let img = Image::<f32>::from_vec(3, 1, vec![0.0, 0.5, 1.0, 2.0, -1.0, 0.25, 1.0, 1.0, 1.0], PixelFormat::Rgb)
        .unwrap();
    assert!(save(&img, &path));

    let bytes: Image<u8> = load(&path);
    assert_eq!(bytes.data(), &[0, 127, 255, 255, 0, 63, 255, 255, 255]);

    let back: Image<f32> = load(&path);
    assert_relative_eq!(back.data()[1], 127.0 / 255.0);
    assert_relative_eq!(back.data()[3], 1.0);
    assert_relative_eq!(back.data()[4], 0.0);
}

#[test]
fn jpeg_keeps_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.JPG");
    let img = gradient(33, 17, PixelFormat::Rgba);
    try_save(&img, &path).unwrap();
    assert_eq!(Format::detect(&path).unwrap(), Some(Format::Jpeg));

    let back: Image<u8> = try_load(&path).unwrap();
    assert_eq!((back.width(), back.height()), (33, 17));
    assert_eq!(back.pixel_format(), PixelFormat::Rgb);
}

#[test]
fn raw_roundtrip_and_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.raw");
    let img = Image::<f32>::from_vec(2, 2, vec![0.1, -2.0, 3.5, 1e6], PixelFormat::Gray).unwrap();
    try_save(&img, &path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 16);

    let back: Image<f32> = try_load_raw(&path, 2, 2, PixelFormat::Gray).unwrap();
    assert_eq!(back, img);

    let wrong: Image<f32> = load_raw(&path, 3, 2, PixelFormat::Gray);
    assert_eq!((wrong.width(), wrong.height()), (3, 2));
    assert!(wrong.data().iter().all(|&v| v == 0.0));
}

#[test]
fn raw_extension_never_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.raw");
    let img = gradient(4, 4, PixelFormat::Rgb);
    try_save(&img, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), img.data());
}

#[test]
fn unknown_signature_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pic.png");
    std::fs::write(&path, b"BM not really a png").unwrap();

    assert!(matches!(try_load::<u8, _>(&path), Err(IoError::UnsupportedFormat(_))));
    assert!(load::<u8, _>(&path).is_empty());
}

#[test]
fn non_display_format_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hsv.png");
    let img = Image::<f32>::new(4, 4, PixelFormat::Hsv);

    let err = try_save(&img, &path).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedChannels { channels: 3, .. }));
    assert!(!save(&img, &path));
    assert!(!path.exists());
}

#[test]
fn extra_channels_are_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("five.png");
    let mut img = gradient(2, 1, PixelFormat::Rgb);
    img.add_channels(2);
    assert!(try_save(&img, &path).is_err());
}

#[test]
fn gray_alpha_png_loads_untagged_and_is_not_resaved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ga.png");
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 2, 1);
        encoder.set_color(png::ColorType::GrayscaleAlpha);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[10, 255, 200, 128]).unwrap();
        writer.finish().unwrap();
    }

    let img: Image<u8> = try_load(&path).unwrap();
    assert_eq!(img.channels(), 2);
    assert_eq!(img.pixel_format(), PixelFormat::None);
    assert_eq!(img.data(), &[10, 255, 200, 128]);

    let out = dir.path().join("ga_again.png");
    let err = try_save(&img, &out).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedChannels { codec: "png", channels: 2 }));
    assert!(!out.exists());
}
