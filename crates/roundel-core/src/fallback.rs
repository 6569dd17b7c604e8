//! Deterministic stand-in background used when the badge template is missing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tiny_skia::{
    GradientStop, LinearGradient, Mask, Paint, Pixmap, Point, Rect, SpreadMode, Transform,
};

use crate::color::HexColor;
use crate::error::{Result, RoundelError};
use crate::font::FontRenderer;

pub const FALLBACK_TITLE: &str = "BADGE FESTIVAL BANKOARA";
pub const FALLBACK_SUBTITLE: &str =
    "Temporary template - check that the badge template file exists";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackStyle {
    /// Gradient color at the top-left corner.
    pub start_color: HexColor,
    /// Gradient color at the bottom-right corner.
    pub end_color: HexColor,
    pub text_color: HexColor,
    pub title: String,
    pub subtitle: String,
    pub title_size: f32,
    pub subtitle_size: f32,
    /// Title baseline, from the top edge.
    pub title_baseline: f32,
    /// Subtitle baseline, from the bottom edge.
    pub subtitle_baseline_from_bottom: f32,
    /// Font file for the text; common system fonts are tried when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for FallbackStyle {
    fn default() -> Self {
        Self {
            start_color: HexColor::rgb(0x4a, 0x90, 0xe2),
            end_color: HexColor::rgb(0x8e, 0x44, 0xad),
            text_color: HexColor::WHITE,
            title: FALLBACK_TITLE.to_string(),
            subtitle: FALLBACK_SUBTITLE.to_string(),
            title_size: 40.0,
            subtitle_size: 20.0,
            title_baseline: 100.0,
            subtitle_baseline_from_bottom: 50.0,
            font_path: None,
        }
    }
}

/// One centered line of fallback text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
    pub center_x: f32,
    pub baseline_y: f32,
}

impl FallbackStyle {
    /// Title and subtitle laid out on a `width`x`height` canvas.
    pub fn lines(&self, width: u32, height: u32) -> [TextLine; 2] {
        let center_x = width as f32 / 2.0;
        [
            TextLine {
                text: self.title.clone(),
                size: self.title_size,
                center_x,
                baseline_y: self.title_baseline,
            },
            TextLine {
                text: self.subtitle.clone(),
                size: self.subtitle_size,
                center_x,
                baseline_y: height as f32 - self.subtitle_baseline_from_bottom,
            },
        ]
    }
}

/// Paint the diagonal gradient and, when a font is available, the text lines.
pub fn draw_fallback(
    canvas: &mut Pixmap,
    style: &FallbackStyle,
    font: Option<&FontRenderer>,
) -> Result<()> {
    let (w, h) = (canvas.width(), canvas.height());
    let full = Rect::from_xywh(0.0, 0.0, w as f32, h as f32)
        .ok_or(RoundelError::InvalidDimensions { width: w, height: h })?;

    let shader = LinearGradient::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(w as f32, h as f32),
        vec![
            GradientStop::new(0.0, style.start_color.to_color()),
            GradientStop::new(1.0, style.end_color.to_color()),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )
    .ok_or_else(|| RoundelError::Geometry("degenerate fallback gradient".into()))?;

    let gradient = Paint {
        shader,
        anti_alias: false,
        ..Paint::default()
    };
    canvas.fill_rect(full, &gradient, Transform::identity(), None);

    let Some(font) = font else {
        return Ok(());
    };

    let mut coverage =
        Mask::new(w, h).ok_or(RoundelError::InvalidDimensions { width: w, height: h })?;
    for line in style.lines(w, h) {
        font.stamp_centered(
            &mut coverage,
            &line.text,
            line.size,
            line.center_x,
            line.baseline_y,
        );
    }

    let mut ink = Paint::default();
    ink.set_color(style.text_color.to_color());
    canvas.fill_rect(full, &ink, Transform::identity(), Some(&coverage));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_layout() {
        let [title, subtitle] = FallbackStyle::default().lines(1080, 1080);
        assert_eq!(title.text, FALLBACK_TITLE);
        assert_eq!(title.baseline_y, 100.0);
        assert_eq!(subtitle.baseline_y, 1030.0);
        assert_eq!(subtitle.center_x, 540.0);
    }
}
