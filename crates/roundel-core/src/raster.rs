use std::sync::Arc;

use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;
use tiny_skia::{ColorU8, Pixmap, PixmapRef, PremultipliedColorU8};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{Result, RoundelError};

/// An immutable decoded raster (premultiplied RGBA).
///
/// Cloning is cheap: the pixel data is shared, never mutated in place.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixmap: Arc<Pixmap>,
}

impl SourceImage {
    /// Wrap a straight-alpha RGBA8 buffer.
    pub fn from_rgba(image: &RgbaImage) -> Result<Self> {
        Ok(Self {
            pixmap: Arc::new(rgba_to_pixmap(image)?),
        })
    }

    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        Self::from_rgba(&image.to_rgba8())
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width() as f32, self.height() as f32)
    }

    pub fn pixmap(&self) -> PixmapRef<'_> {
        Pixmap::as_ref(&self.pixmap)
    }
}

/// Convert straight-alpha RGBA8 into a premultiplied pixmap.
pub fn rgba_to_pixmap(image: &RgbaImage) -> Result<Pixmap> {
    let (w, h) = image.dimensions();
    let mut pixmap =
        Pixmap::new(w, h).ok_or(RoundelError::InvalidDimensions { width: w, height: h })?;

    let src: &[u8] = image.as_raw();
    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        pixmap
            .pixels_mut()
            .par_iter_mut()
            .zip(src.par_chunks_exact(4))
            .for_each(premultiply);
    } else {
        pixmap
            .pixels_mut()
            .iter_mut()
            .zip(src.chunks_exact(4))
            .for_each(premultiply);
    }

    Ok(pixmap)
}

/// Convert a premultiplied pixmap back to straight-alpha RGBA8.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let (w, h) = (pixmap.width(), pixmap.height());
    let mut out = RgbaImage::new(w, h);

    let dst: &mut [u8] = &mut out;
    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        dst.par_chunks_exact_mut(4)
            .zip(pixmap.pixels().par_iter())
            .for_each(demultiply);
    } else {
        dst.chunks_exact_mut(4)
            .zip(pixmap.pixels().iter())
            .for_each(demultiply);
    }

    out
}

fn premultiply((dst, src): (&mut PremultipliedColorU8, &[u8])) {
    *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
}

fn demultiply((dst, src): (&mut [u8], &PremultipliedColorU8)) {
    let c = src.demultiply();
    dst.copy_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
}
