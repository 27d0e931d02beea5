use rastr_core::{Image, PixelFormat};
use rastr_draw::{Canvas, LinePixels, Segment, clip_line, draw_line};

const RED: [u8; 3] = [255, 0, 0];
const BLUE: [u8; 3] = [0, 0, 255];

/// Records every write instead of storing it.
struct Recorder {
    w: i32,
    h: i32,
    writes: Vec<(i32, i32)>,
}

impl Canvas for Recorder {
    type Value = u8;

    fn canvas_size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    fn put(&mut self, x: i32, y: i32, _value: &[u8]) -> bool {
        self.writes.push((x, y));
        true
    }
}

#[test]
fn red_diagonal_on_512_rgb() {
    let mut img = Image::<u8>::new(512, 512, PixelFormat::Rgb);
    let written = draw_line(&mut img, &RED, 0, 0, 511, 511);
    assert_eq!(written, 512);
    for y in 0..512u32 {
        for x in 0..512u32 {
            let expected: &[u8] = if x == y { &RED } else { &[0, 0, 0] };
            assert_eq!(img.pixel_at(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn segment_outside_writes_nothing() {
    let mut img = Image::<u8>::filled(512, 512, &[1, 2, 3], PixelFormat::Rgb).unwrap();
    let before = img.clone();
    assert_eq!(draw_line(&mut img, &RED, -100, -100, -1, -1), 0);
    assert_eq!(img, before);
}

#[test]
fn writes_stay_inside_canvas() {
    let segments = [
        (-40, -40, 90, 70),
        (60, -5, -10, 33),
        (0, 0, 1000, 1),
        (25, 25, 25, 25),
        (-1, -1, 64, 48),
        (63, 47, 0, 0),
    ];
    for (x0, y0, x1, y1) in segments {
        let mut rec = Recorder {
            w: 64,
            h: 48,
            writes: Vec::new(),
        };
        draw_line(&mut rec, &RED, x0, y0, x1, y1);
        for &(x, y) in &rec.writes {
            assert!((0..64).contains(&x) && (0..48).contains(&y), "({x}, {y}) from {x0},{y0}-{x1},{y1}");
        }
    }
}

#[test]
fn clipped_line_matches_walk() {
    let seg = clip_line(Segment::new(0, 512, 512, 0), 512, 512).unwrap();
    let mut rec = Recorder {
        w: 512,
        h: 512,
        writes: Vec::new(),
    };
    let n = draw_line(&mut rec, &BLUE, 0, 512, 512, 0);
    let walked: Vec<_> = LinePixels::new(seg.x0, seg.y0, seg.x1, seg.y1).collect();
    assert_eq!(n, walked.len());
    assert_eq!(rec.writes, walked);
}

#[test]
fn crossing_lines_driver_scene() {
    let mut img = Image::<u8>::new(512, 512, PixelFormat::Rgb);
    img.clear(255);
    draw_line(&mut img, &RED, 0, 0, 512, 512);
    draw_line(&mut img, &BLUE, 0, 512, 512, 0);

    assert_eq!(img.pixel_at(0, 0), &RED);
    assert_eq!(img.pixel_at(511, 511), &RED);
    assert_eq!(img.pixel_at(1, 511), &BLUE);
    assert_eq!(img.pixel_at(511, 1), &BLUE);
    assert_eq!(img.pixel_at(0, 511), &[255, 255, 255]);
}
