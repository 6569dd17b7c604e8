use tiny_skia::Pixmap;

use crate::error::{Result, RoundelError};
use crate::geometry::{frame_photo, Placement, ViewportGeometry};
use crate::raster::{pixmap_to_rgba, SourceImage};
use crate::state::TransformState;

/// A rendered preview: the circular crop on a transparent square canvas.
#[derive(Clone, Debug)]
pub struct Preview {
    pub pixmap: Pixmap,
    pub placement: Placement,
}

impl Preview {
    pub fn to_rgba(&self) -> image::RgbaImage {
        pixmap_to_rgba(&self.pixmap)
    }
}

/// Render the photo into the `Dp`x`Dp` preview circle.
///
/// Returns `Ok(None)` when no photo is loaded. The area outside the circle
/// stays transparent; the preview draws no ring.
pub fn render_preview(
    state: &TransformState,
    source: Option<&SourceImage>,
    geometry: &ViewportGeometry,
) -> Result<Option<Preview>> {
    let Some(source) = source else {
        return Ok(None);
    };

    let side = geometry.preview_canvas_size();
    let mut pixmap = Pixmap::new(side, side).ok_or(RoundelError::InvalidDimensions {
        width: side,
        height: side,
    })?;

    let placement = frame_photo(
        &mut pixmap,
        source,
        state,
        &geometry.preview_viewport(),
        1.0,
    )?;

    Ok(Some(Preview { pixmap, placement }))
}
