use rastr_core::{BorderMode, Element, Image, ImageDimension, PixelFormat};

const FORMATS: [PixelFormat; 7] = [
    PixelFormat::Gray,
    PixelFormat::Rg,
    PixelFormat::Rgb,
    PixelFormat::Rgba,
    PixelFormat::Xyz,
    PixelFormat::CieLuv,
    PixelFormat::Hsv,
];

fn assert_size_invariant<T: Element>(img: &Image<T>) {
    assert_eq!(
        img.data().len(),
        img.width() as usize * img.height() as usize * img.channels(),
        "{img:?}"
    );
    if img.pixel_format() != PixelFormat::None {
        assert_eq!(img.channels(), img.pixel_format().channels());
    }
}

fn numbered(w: u32, h: u32, format: PixelFormat) -> Image<u8> {
    let n = w as usize * h as usize * format.channels();
    Image::from_vec(w, h, (0..n).map(|i| (i % 251) as u8).collect(), format).expect("numbered")
}

#[test]
fn size_invariant_after_every_operation() {
    for format in FORMATS {
        let mut img = numbered(7, 5, format);
        assert_size_invariant(&img);

        let sub = img.sub_image(-3, 2, ImageDimension::new(4, 9));
        assert_size_invariant(&sub);

        let padded = img.with_border(2, 3);
        assert_size_invariant(&padded);

        let other = numbered(2, 8, format);
        img.append_right(&other).expect("same channels");
        assert_size_invariant(&img);

        img.set_sub_image(5, -1, &other);
        assert_size_invariant(&img);

        img.swap_channels(0, format.channels() - 1);
        assert_size_invariant(&img);

        let as_f32: Image<f32> = img.create_as();
        assert_size_invariant(&as_f32);

        if let Some(ch) = img.create_from_channel(0) {
            assert_size_invariant(&ch);
        }

        img.add_channels(2);
        assert_size_invariant(&img);

        let taken = img.take();
        assert_size_invariant(&taken);
        assert_size_invariant(&img);
    }
}

#[test]
fn raw_mismatch_yields_zeroed_image() {
    let img = Image::<f32>::from_raw_bytes(3, 3, PixelFormat::Rgb, &[1, 2, 3]);
    assert_eq!(img.dimension(), ImageDimension::new(3, 3));
    assert_size_invariant(&img);
    assert!(img.data().iter().all(|&v| v == 0.0));
}

#[test]
fn cast_roundtrip_with_clamp() {
    let values = [-5.0f32, 0.0, 0.4, 1.0, 127.9, 255.0, 256.0, 1e9];
    let img = Image::from_vec(values.len() as u32, 1, values.to_vec(), PixelFormat::Gray).unwrap();
    let bytes: Image<u8> = img.create_as();
    let back: Image<f32> = bytes.create_as();
    for (&orig, &round) in values.iter().zip(back.data()) {
        let expected = orig.clamp(0.0, 255.0).trunc();
        assert_eq!(round, expected, "value {orig}");
    }
}

#[test]
fn border_modes_agree_inside() {
    let img = numbered(9, 4, PixelFormat::Rgb);
    for mode in [BorderMode::Clamp, BorderMode::Wrap, BorderMode::Enlarge, BorderMode::Zero] {
        for y in 0..img.height() {
            for x in 0..img.width() {
                assert_eq!(
                    img.pixel_with_border(x as i32, y as i32, mode).as_ref(),
                    img.pixel_at(x, y)
                );
            }
        }
    }
}

#[test]
fn sub_image_never_reads_outside() {
    let img = numbered(6, 6, PixelFormat::Gray);
    for (x, y) in [(-10, -10), (-1, 3), (4, 4), (5, 0), (6, 6), (100, 2)] {
        let sub = img.sub_image(x, y, ImageDimension::new(4, 4));
        let (xc, yc) = (x.max(0) as u32, y.max(0) as u32);
        for j in 0..4u32 {
            for i in 0..4u32 {
                let expected = if xc + i < 6 && yc + j < 6 {
                    img.pixel_at(xc + i, yc + j)[0]
                } else {
                    0
                };
                assert_eq!(sub.pixel_at(i, j)[0], expected, "origin ({x},{y}) at ({i},{j})");
            }
        }
    }
}

#[test]
fn append_places_pixels() {
    let mut left = numbered(3, 2, PixelFormat::Rgba);
    let right = numbered(4, 5, PixelFormat::Rgba);
    let original = left.clone();
    left.append_right(&right).unwrap();

    assert_eq!(left.dimension(), ImageDimension::new(7, 5));
    for y in 0..5u32 {
        for x in 0..7u32 {
            let got = left.pixel_at(x, y);
            if x < 3 {
                if y < 2 {
                    assert_eq!(got, original.pixel_at(x, y));
                } else {
                    assert_eq!(got, &[0, 0, 0, 0]);
                }
            } else {
                assert_eq!(got, right.pixel_at(x - 3, y));
            }
        }
    }
}

#[test]
fn add_channel_scenario() {
    let mut img = Image::<u8>::from_vec(2, 1, vec![10, 20, 30, 40, 50, 60], PixelFormat::Rgb).unwrap();
    img.add_channels(1);
    assert_eq!(img.channels(), 4);
    assert_eq!(img.pixel_format(), PixelFormat::None);
    assert_eq!(img.data(), &[10, 20, 30, 0, 40, 50, 60, 0]);
    assert_size_invariant(&img);
}
