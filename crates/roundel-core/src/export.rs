use std::fmt;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tiny_skia::{FilterQuality, Paint, Pixmap, PixmapPaint, Stroke, Transform};
use tracing::{info, warn};

use crate::color::HexColor;
use crate::consts::{DEFAULT_RING_GAP, DEFAULT_RING_WIDTH};
use crate::error::{Result, RoundelError};
use crate::fallback::{draw_fallback, FallbackStyle};
use crate::font::FontRenderer;
use crate::geometry::{circle_path, frame_photo, Placement, ViewportGeometry};
use crate::raster::{pixmap_to_rgba, SourceImage};
use crate::state::TransformState;
use crate::template::{TemplateAsset, TemplateStatus};

/// White ring framing the photo cutout on the exported badge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingStyle {
    /// Distance from the cutout edge to the ring's center line.
    pub gap: f32,
    pub width: f32,
    pub color: HexColor,
}

impl Default for RingStyle {
    fn default() -> Self {
        Self {
            gap: DEFAULT_RING_GAP,
            width: DEFAULT_RING_WIDTH,
            color: HexColor::WHITE,
        }
    }
}

impl RingStyle {
    pub fn radius(&self, geometry: &ViewportGeometry) -> f32 {
        geometry.export_diameter / 2.0 + self.gap
    }
}

/// Non-fatal conditions raised while compositing. The export still completes.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportWarning {
    /// The badge template was not ready; the fallback background was used.
    TemplateUnavailable(String),
    /// The fallback text could not be drawn because no font loaded.
    FontUnavailable(String),
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateUnavailable(reason) => {
                write!(f, "Badge template unavailable ({reason}); used fallback background")
            }
            Self::FontUnavailable(reason) => {
                write!(f, "Fallback text omitted: {reason}")
            }
        }
    }
}

/// The finished badge.
#[derive(Clone, Debug)]
pub struct ExportOutput {
    pub image: RgbaImage,
    pub placement: Placement,
    pub warnings: Vec<ExportWarning>,
}

impl ExportOutput {
    pub fn used_fallback(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ExportWarning::TemplateUnavailable(_)))
    }
}

/// Everything besides geometry that shapes the exported badge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeStyle {
    pub ring: RingStyle,
    pub fallback: FallbackStyle,
}

/// Composite the framed photo onto the template at export resolution.
///
/// Fails with [`RoundelError::MissingSource`] when no photo is loaded. A
/// template that is not ready never blocks: the fallback background is drawn
/// and a [`ExportWarning::TemplateUnavailable`] is attached instead.
pub fn export_badge(
    state: &TransformState,
    source: Option<&SourceImage>,
    template: &TemplateStatus,
    geometry: &ViewportGeometry,
    style: &BadgeStyle,
) -> Result<ExportOutput> {
    let source = source.ok_or(RoundelError::MissingSource)?;
    geometry.validate()?;

    let (tw, th) = (geometry.template_width, geometry.template_height);
    let mut canvas =
        Pixmap::new(tw, th).ok_or(RoundelError::InvalidDimensions { width: tw, height: th })?;
    let mut warnings = Vec::new();

    match template {
        TemplateStatus::Ready(asset) => draw_template(&mut canvas, asset),
        TemplateStatus::Pending => {
            warnings.extend(paint_fallback(&mut canvas, &style.fallback, "still loading")?);
        }
        TemplateStatus::Failed(reason) => {
            warnings.extend(paint_fallback(&mut canvas, &style.fallback, reason)?);
        }
    }

    let viewport = geometry.export_viewport();
    draw_ring(&mut canvas, geometry, &style.ring)?;

    let placement = frame_photo(&mut canvas, source, state, &viewport, geometry.scale_factor())?;

    info!(
        width = tw,
        height = th,
        scale_factor = geometry.scale_factor(),
        fallback = !warnings.is_empty(),
        "Badge composited"
    );

    Ok(ExportOutput {
        image: pixmap_to_rgba(&canvas),
        placement,
        warnings,
    })
}

/// Stretch the template over the whole canvas; aspect ratio is not preserved.
fn draw_template(canvas: &mut Pixmap, asset: &TemplateAsset) {
    let sx = canvas.width() as f32 / asset.width() as f32;
    let sy = canvas.height() as f32 / asset.height() as f32;
    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    canvas.draw_pixmap(
        0,
        0,
        asset.raster().pixmap(),
        &paint,
        Transform::from_scale(sx, sy),
        None,
    );
}

fn paint_fallback(
    canvas: &mut Pixmap,
    style: &FallbackStyle,
    reason: &str,
) -> Result<Vec<ExportWarning>> {
    warn!(%reason, "Badge template unavailable, drawing fallback background");
    let mut warnings = vec![ExportWarning::TemplateUnavailable(reason.to_string())];

    let font = match FontRenderer::locate(style.font_path.as_deref()) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!(error = %e, "Fallback text skipped");
            warnings.push(ExportWarning::FontUnavailable(e.to_string()));
            None
        }
    };

    draw_fallback(canvas, style, font.as_ref())?;
    Ok(warnings)
}

/// Stroke the decorative ring before the photo is clipped in.
fn draw_ring(canvas: &mut Pixmap, geometry: &ViewportGeometry, ring: &RingStyle) -> Result<()> {
    if ring.width <= 0.0 {
        return Ok(());
    }
    let viewport = geometry.export_viewport();
    let path = circle_path(viewport.center_x, viewport.center_y, ring.radius(geometry))?;

    let mut paint = Paint::default();
    paint.set_color(ring.color.to_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: ring.width,
        ..Stroke::default()
    };
    canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    Ok(())
}
