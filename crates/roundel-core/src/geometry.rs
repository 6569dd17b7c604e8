//! Circle viewports and the single placement function shared by the preview
//! and export renderers.
//!
//! Both renderers describe the photo in the same local frame: origin at the
//! circle center, rotated by the user angle, with every length multiplied by
//! a unit scale (1 for preview, `De / Dp` for export). Keeping one code path
//! means preview and export framing cannot drift apart.

use serde::{Deserialize, Serialize};
use tiny_skia::{
    FillRule, FilterQuality, Mask, Path, PathBuilder, Pixmap, PixmapPaint, Transform,
};
use tracing::debug;

use crate::consts::{
    DEFAULT_CENTER_X_FRACTION, DEFAULT_CENTER_Y_FRACTION, DEFAULT_EXPORT_DIAMETER,
    DEFAULT_PREVIEW_DIAMETER, DEFAULT_TEMPLATE_SIZE,
};
use crate::error::{Result, RoundelError};
use crate::raster::SourceImage;
use crate::state::{Offset, TransformState};

/// A circular cutout on some canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleViewport {
    pub diameter: f32,
    pub center_x: f32,
    pub center_y: f32,
}

impl CircleViewport {
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    pub fn path(&self) -> Result<Path> {
        circle_path(self.center_x, self.center_y, self.radius())
    }

    /// Anti-aliased clip mask covering the circle on a `width`x`height` canvas.
    pub fn clip_mask(&self, width: u32, height: u32) -> Result<Mask> {
        let mut mask = Mask::new(width, height)
            .ok_or(RoundelError::InvalidDimensions { width, height })?;
        mask.fill_path(&self.path()?, FillRule::Winding, true, Transform::identity());
        Ok(mask)
    }
}

pub(crate) fn circle_path(cx: f32, cy: f32, radius: f32) -> Result<Path> {
    PathBuilder::from_circle(cx, cy, radius).ok_or_else(|| {
        RoundelError::Geometry(format!("degenerate circle r={radius} at ({cx}, {cy})"))
    })
}

/// Fixed preview and export circle settings.
///
/// The export center is derived from the template size, which starts at
/// 1080x1080 and is replaced by the real template dimensions once known.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportGeometry {
    pub preview_diameter: f32,
    pub export_diameter: f32,
    pub center_x_fraction: f32,
    pub center_y_fraction: f32,
    pub template_width: u32,
    pub template_height: u32,
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self {
            preview_diameter: DEFAULT_PREVIEW_DIAMETER,
            export_diameter: DEFAULT_EXPORT_DIAMETER,
            center_x_fraction: DEFAULT_CENTER_X_FRACTION,
            center_y_fraction: DEFAULT_CENTER_Y_FRACTION,
            template_width: DEFAULT_TEMPLATE_SIZE,
            template_height: DEFAULT_TEMPLATE_SIZE,
        }
    }
}

impl ViewportGeometry {
    pub fn validate(&self) -> Result<()> {
        if !(self.preview_diameter > 0.0 && self.export_diameter > 0.0) {
            return Err(RoundelError::Config(format!(
                "circle diameters must be positive (preview {}, export {})",
                self.preview_diameter, self.export_diameter
            )));
        }
        if self.template_width == 0 || self.template_height == 0 {
            return Err(RoundelError::InvalidDimensions {
                width: self.template_width,
                height: self.template_height,
            });
        }
        Ok(())
    }

    /// Ratio between export-circle and preview-circle diameters.
    pub fn scale_factor(&self) -> f32 {
        self.export_diameter / self.preview_diameter
    }

    /// Side of the square preview canvas, in pixels.
    pub fn preview_canvas_size(&self) -> u32 {
        self.preview_diameter.round() as u32
    }

    /// The preview circle, centered on the (whole-pixel) preview canvas.
    pub fn preview_viewport(&self) -> CircleViewport {
        let center = self.preview_canvas_size() as f32 / 2.0;
        CircleViewport {
            diameter: self.preview_diameter,
            center_x: center,
            center_y: center,
        }
    }

    pub fn export_viewport(&self) -> CircleViewport {
        CircleViewport {
            diameter: self.export_diameter,
            center_x: self.template_width as f32 * self.center_x_fraction,
            center_y: self.template_height as f32 * self.center_y_fraction,
        }
    }

    pub fn set_template_size(&mut self, width: u32, height: u32) {
        self.template_width = width;
        self.template_height = height;
    }
}

/// Where and how large the photo lands inside one circle viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Circle center on the canvas; the local frame's origin.
    pub origin_x: f32,
    pub origin_y: f32,
    pub rotation_degrees: f32,
    /// Photo center in the rotated local frame, in canvas units.
    pub offset: Offset,
    pub width: f32,
    pub height: f32,
    source_width: f32,
    source_height: f32,
}

impl Placement {
    /// Lay out `state` inside `viewport`, multiplying every length by
    /// `unit_scale`. The angle is never rescaled.
    pub fn new(
        state: &TransformState,
        source_size: (f32, f32),
        viewport: &CircleViewport,
        unit_scale: f32,
    ) -> Self {
        let (sw, sh) = source_size;
        Self {
            origin_x: viewport.center_x,
            origin_y: viewport.center_y,
            rotation_degrees: state.rotation_degrees(),
            offset: state.translation().scaled(unit_scale),
            width: sw * state.scale() * unit_scale,
            height: sh * state.scale() * unit_scale,
            source_width: sw,
            source_height: sh,
        }
    }

    /// Canvas transform mapping source pixels onto the canvas.
    ///
    /// Rotation pivots on the circle center, not on the photo center, so a
    /// photo dragged off-center swings around the frame.
    pub fn transform(&self) -> Transform {
        Transform::from_translate(self.origin_x, self.origin_y)
            .pre_rotate(self.rotation_degrees)
            .pre_translate(
                self.offset.x - self.width / 2.0,
                self.offset.y - self.height / 2.0,
            )
            .pre_scale(
                self.width / self.source_width,
                self.height / self.source_height,
            )
    }

    /// Photo center in canvas coordinates, after rotation.
    pub fn image_center(&self) -> (f32, f32) {
        let (sin, cos) = self.rotation_degrees.to_radians().sin_cos();
        let Offset { x, y } = self.offset;
        (
            self.origin_x + x * cos - y * sin,
            self.origin_y + x * sin + y * cos,
        )
    }
}

/// Clip to `viewport` and draw `source` framed by `state`.
///
/// This is the one drawing routine both renderers go through.
pub fn frame_photo(
    canvas: &mut Pixmap,
    source: &SourceImage,
    state: &TransformState,
    viewport: &CircleViewport,
    unit_scale: f32,
) -> Result<Placement> {
    let placement = Placement::new(state, source.size(), viewport, unit_scale);
    let mask = viewport.clip_mask(canvas.width(), canvas.height())?;

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    canvas.draw_pixmap(0, 0, source.pixmap(), &paint, placement.transform(), Some(&mask));

    debug!(
        origin = ?(placement.origin_x, placement.origin_y),
        offset = ?placement.offset,
        size = ?(placement.width, placement.height),
        rotation = placement.rotation_degrees,
        "Photo framed"
    );
    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_export_center_follows_template() {
        let mut geometry = ViewportGeometry::default();
        let vp = geometry.export_viewport();
        assert_relative_eq!(vp.center_x, 540.0);
        assert_relative_eq!(vp.center_y, 648.0);

        geometry.set_template_size(2000, 1000);
        let vp = geometry.export_viewport();
        assert_relative_eq!(vp.center_x, 1000.0);
        assert_relative_eq!(vp.center_y, 600.0);
    }

    #[test]
    fn test_image_center_rotates_about_circle_center() {
        let mut state = TransformState::new();
        state.translate_by(10.0, 0.0);
        state.set_rotation(90.0);
        let vp = CircleViewport {
            diameter: 240.0,
            center_x: 120.0,
            center_y: 120.0,
        };
        let p = Placement::new(&state, (100.0, 50.0), &vp, 1.0);
        let (x, y) = p.image_center();
        assert_relative_eq!(x, 120.0, epsilon = 1e-4);
        assert_relative_eq!(y, 130.0, epsilon = 1e-4);
    }

    #[test]
    fn test_fractional_preview_diameter_stays_centered() {
        let geometry = ViewportGeometry {
            preview_diameter: 240.6,
            ..Default::default()
        };
        assert_eq!(geometry.preview_canvas_size(), 241);
        let vp = geometry.preview_viewport();
        assert_relative_eq!(vp.center_x, 120.5);
        assert_relative_eq!(vp.center_y, 120.5);
        assert_relative_eq!(vp.diameter, 240.6);
    }

    #[test]
    fn test_validate_rejects_zero_diameter() {
        let geometry = ViewportGeometry {
            preview_diameter: 0.0,
            ..Default::default()
        };
        assert!(geometry.validate().is_err());
    }
}
