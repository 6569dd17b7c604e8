use image::{Rgba, RgbaImage};

use roundel_core::export::BadgeStyle;
use roundel_core::geometry::ViewportGeometry;
use roundel_core::raster::SourceImage;
use roundel_core::session::Session;
use roundel_core::template::TemplateSlot;

pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// A uniformly colored photo.
pub fn solid_photo(width: u32, height: u32, color: Rgba<u8>) -> SourceImage {
    SourceImage::from_rgba(&RgbaImage::from_pixel(width, height, color)).expect("valid photo")
}

/// A blue 120x80 photo with a red 20x20 marker whose center sits at
/// image coordinates (100, 20), i.e. (+40, -20) from the photo center.
pub fn marker_photo() -> SourceImage {
    let mut img = RgbaImage::from_pixel(120, 80, BLUE);
    for y in 10..30 {
        for x in 90..110 {
            img.put_pixel(x, y, RED);
        }
    }
    SourceImage::from_rgba(&img).expect("valid photo")
}

/// Centroid of strongly red pixels, if any.
pub fn red_centroid(img: &RgbaImage) -> Option<(f32, f32)> {
    let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0u64);
    for (x, y, p) in img.enumerate_pixels() {
        let [r, g, b, a] = p.0;
        if r > 200 && g < 80 && b < 80 && a > 200 {
            sx += x as f64 + 0.5;
            sy += y as f64 + 0.5;
            n += 1;
        }
    }
    (n > 0).then(|| ((sx / n as f64) as f32, (sy / n as f64) as f32))
}

/// Rotate `(x, y)` by `degrees` in canvas orientation (y down).
pub fn rotate(x: f32, y: f32, degrees: f32) -> (f32, f32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

/// Session with the reference geometry and no template loader.
pub fn session() -> Session {
    Session::new(
        ViewportGeometry::default(),
        BadgeStyle::default(),
        TemplateSlot::new(),
    )
}

/// Assert two channels differ by at most `tolerance`.
pub fn assert_channels_near(actual: Rgba<u8>, expected: Rgba<u8>, tolerance: u8) {
    for (a, e) in actual.0.iter().zip(expected.0.iter()) {
        assert!(
            a.abs_diff(*e) <= tolerance,
            "pixel {actual:?} not within {tolerance} of {expected:?}"
        );
    }
}
