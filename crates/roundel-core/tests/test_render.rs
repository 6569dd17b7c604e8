#[allow(dead_code)]
mod common;

use approx::assert_relative_eq;

use roundel_core::export::{export_badge, BadgeStyle};
use roundel_core::geometry::{Placement, ViewportGeometry};
use roundel_core::preview::render_preview;
use roundel_core::state::TransformState;
use roundel_core::template::TemplateStatus;

use common::{assert_channels_near, marker_photo, red_centroid, rotate, solid_photo, BLUE};

fn state(scale: f32, rotation: f32, dx: f32, dy: f32) -> TransformState {
    let mut s = TransformState::new();
    s.set_scale(scale);
    s.set_rotation(rotation);
    s.translate_by(dx, dy);
    s
}

#[test]
fn test_preview_without_photo_is_noop() {
    let geometry = ViewportGeometry::default();
    let preview = render_preview(&TransformState::new(), None, &geometry).unwrap();
    assert!(preview.is_none());
}

#[test]
fn test_preview_is_circular_and_transparent_outside() {
    let geometry = ViewportGeometry::default();
    let photo = solid_photo(800, 600, BLUE);
    let preview = render_preview(&TransformState::new(), Some(&photo), &geometry)
        .unwrap()
        .unwrap();
    let img = preview.to_rgba();

    assert_eq!(img.dimensions(), (240, 240));
    // Corners lie outside the circle.
    assert_eq!(img.get_pixel(0, 0)[3], 0);
    assert_eq!(img.get_pixel(239, 239)[3], 0);
    assert_eq!(img.get_pixel(5, 234)[3], 0);
    // Center and points just inside the rim are covered by the photo.
    assert_channels_near(*img.get_pixel(120, 120), BLUE, 1);
    assert_channels_near(*img.get_pixel(120, 5), BLUE, 1);
    assert_channels_near(*img.get_pixel(234, 120), BLUE, 1);
}

#[test]
fn test_photo_dragged_out_of_frame_leaves_preview_empty() {
    let geometry = ViewportGeometry::default();
    let photo = solid_photo(100, 100, BLUE);
    let preview = render_preview(&state(1.0, 0.0, 1000.0, 0.0), Some(&photo), &geometry)
        .unwrap()
        .unwrap();
    assert!(preview.to_rgba().pixels().all(|p| p[3] == 0));
}

#[test]
fn test_rotation_wrap_renders_identically() {
    let geometry = ViewportGeometry::default();
    let photo = marker_photo();

    for base in [30.0f32, -45.0, 100.0] {
        let a = render_preview(&state(1.2, base, 12.0, -7.0), Some(&photo), &geometry)
            .unwrap()
            .unwrap()
            .to_rgba();
        let wrapped = state(1.2, base + 360.0, 12.0, -7.0);
        let b = render_preview(&wrapped, Some(&photo), &geometry)
            .unwrap()
            .unwrap()
            .to_rgba();
        for (pa, pb) in a.pixels().zip(b.pixels()) {
            assert_channels_near(*pa, *pb, 2);
        }
    }
}

#[test]
fn test_preview_marker_lands_where_geometry_says() {
    let geometry = ViewportGeometry::default();
    let photo = marker_photo();
    let s = state(1.0, 30.0, 10.0, -5.0);
    let img = render_preview(&s, Some(&photo), &geometry)
        .unwrap()
        .unwrap()
        .to_rgba();

    let (cx, cy) = red_centroid(&img).expect("marker visible");
    // Marker offset (+40, -20) from the photo center, photo center at (10, -5).
    let (ex, ey) = rotate(50.0, -25.0, 30.0);
    assert_relative_eq!(cx, 120.0 + ex, epsilon = 0.75);
    assert_relative_eq!(cy, 120.0 + ey, epsilon = 0.75);
}

#[test]
fn test_placements_reconcile_by_scale_factor() {
    let geometry = ViewportGeometry::default();
    let k = geometry.scale_factor();
    let preview_vp = geometry.preview_viewport();
    let export_vp = geometry.export_viewport();

    for &(scale, rot, dx, dy) in &[
        (1.0, 0.0, 0.0, 0.0),
        (0.5, -90.0, 33.0, 12.0),
        (2.0, 359.0, -250.0, 80.0),
        (1.37, 45.0, 3.5, -3.5),
    ] {
        let s = state(scale, rot, dx, dy);
        let p = Placement::new(&s, (640.0, 480.0), &preview_vp, 1.0);
        let e = Placement::new(&s, (640.0, 480.0), &export_vp, k);

        assert_relative_eq!(e.offset.x, p.offset.x * k, epsilon = 1e-3);
        assert_relative_eq!(e.offset.y, p.offset.y * k, epsilon = 1e-3);
        assert_relative_eq!(e.width, p.width * k, epsilon = 1e-3);
        assert_relative_eq!(e.height, p.height * k, epsilon = 1e-3);
        assert_eq!(e.rotation_degrees, p.rotation_degrees);

        // Photo center relative to each circle center, scaled up, must agree.
        let (pcx, pcy) = p.image_center();
        let (ecx, ecy) = e.image_center();
        assert_relative_eq!(ecx - e.origin_x, (pcx - p.origin_x) * k, epsilon = 1e-2);
        assert_relative_eq!(ecy - e.origin_y, (pcy - p.origin_y) * k, epsilon = 1e-2);
    }
}

#[test]
fn test_preview_and_export_pixels_reconcile() {
    let geometry = ViewportGeometry::default();
    let k = geometry.scale_factor();
    let photo = marker_photo();
    let s = state(1.0, 30.0, 10.0, -5.0);

    let preview = render_preview(&s, Some(&photo), &geometry)
        .unwrap()
        .unwrap()
        .to_rgba();
    let export = export_badge(
        &s,
        Some(&photo),
        &TemplateStatus::Failed("not provided".into()),
        &geometry,
        &BadgeStyle::default(),
    )
    .unwrap();

    let (px, py) = red_centroid(&preview).expect("marker in preview");
    let (ex, ey) = red_centroid(&export.image).expect("marker in export");
    let center = geometry.export_viewport();

    assert_relative_eq!(ex - center.center_x, (px - 120.0) * k, epsilon = 1.5);
    assert_relative_eq!(ey - center.center_y, (py - 120.0) * k, epsilon = 1.5);
}

#[test]
fn test_transform_maps_photo_center_to_placement_center() {
    let geometry = ViewportGeometry::default();
    let s = state(1.5, 30.0, 10.0, -5.0);
    let p = Placement::new(
        &s,
        (800.0, 600.0),
        &geometry.export_viewport(),
        geometry.scale_factor(),
    );

    let mut pts = [tiny_skia::Point::from_xy(400.0, 300.0)];
    p.transform().map_points(&mut pts);
    let (cx, cy) = p.image_center();
    assert_relative_eq!(pts[0].x, cx, epsilon = 1e-2);
    assert_relative_eq!(pts[0].y, cy, epsilon = 1e-2);
}

#[test]
fn test_unit_scale_one_is_identity_for_preview() {
    let geometry = ViewportGeometry::default();
    let s = state(1.0, 0.0, 0.0, 0.0);
    let p = Placement::new(&s, (240.0, 240.0), &geometry.preview_viewport(), 1.0);
    let mut corners = [
        tiny_skia::Point::from_xy(0.0, 0.0),
        tiny_skia::Point::from_xy(240.0, 240.0),
    ];
    p.transform().map_points(&mut corners);
    assert_relative_eq!(corners[0].x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(corners[0].y, 0.0, epsilon = 1e-4);
    assert_relative_eq!(corners[1].x, 240.0, epsilon = 1e-4);
    assert_relative_eq!(corners[1].y, 240.0, epsilon = 1e-4);
}
