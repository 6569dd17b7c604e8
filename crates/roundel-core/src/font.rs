//! TrueType text stamping for the fallback badge, using fontdue.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use tiny_skia::Mask;
use tracing::debug;

use crate::error::{Result, RoundelError};

/// Common bold sans-serif locations, tried in order. Bold faces only.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub struct FontRenderer {
    font: Font,
    path: PathBuf,
}

impl std::fmt::Debug for FontRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRenderer").field("path", &self.path).finish()
    }
}

impl FontRenderer {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| {
            RoundelError::Font(format!("failed to read {}: {e}", path.display()))
        })?;
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|e| {
            RoundelError::Font(format!("failed to parse {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "Font loaded");
        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    /// Load `explicit` if given, otherwise the first readable bold system
    /// font. An explicit path is used as-is, whatever its weight.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        SYSTEM_FONT_PATHS
            .iter()
            .find_map(|p| Self::from_path(Path::new(p)).ok())
            .ok_or_else(|| {
                RoundelError::Font(format!(
                    "no usable system font; tried {}",
                    SYSTEM_FONT_PATHS.join(", ")
                ))
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Horizontal advance of `text` at `px` pixels.
    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum()
    }

    /// Add glyph coverage for `text` to `mask`, centered on `center_x` with
    /// its baseline at `baseline_y`. Coverage outside the mask is dropped.
    pub fn stamp_centered(
        &self,
        mask: &mut Mask,
        text: &str,
        px: f32,
        center_x: f32,
        baseline_y: f32,
    ) {
        let (mw, mh) = (mask.width() as i32, mask.height() as i32);
        let data = mask.data_mut();
        let mut pen_x = center_x - self.text_width(text, px) / 2.0;

        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, px);
            let left = pen_x.round() as i32 + metrics.xmin;
            let top = baseline_y.round() as i32 - (metrics.height as i32 + metrics.ymin);

            for gy in 0..metrics.height {
                let y = top + gy as i32;
                if y < 0 || y >= mh {
                    continue;
                }
                for gx in 0..metrics.width {
                    let x = left + gx as i32;
                    if x < 0 || x >= mw {
                        continue;
                    }
                    let idx = y as usize * mw as usize + x as usize;
                    data[idx] = data[idx].max(bitmap[gy * metrics.width + gx]);
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_fonts_are_bold_faces() {
        for path in SYSTEM_FONT_PATHS {
            let name = path.rsplit(['/', '\\']).next().unwrap().to_lowercase();
            assert!(
                name.contains("bold") || name.ends_with("bd.ttf"),
                "{path} is not a bold face"
            );
        }
    }

    #[test]
    fn test_missing_explicit_font_is_an_error() {
        let err = FontRenderer::locate(Some(Path::new("/nonexistent.ttf"))).unwrap_err();
        assert!(matches!(err, RoundelError::Font(_)));
    }
}
