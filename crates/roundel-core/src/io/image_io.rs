use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Result, RoundelError};
use crate::raster::SourceImage;
use crate::template::TemplateAsset;

/// Decode a user photo from disk.
pub fn load_photo(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Photo decoded"
    );
    SourceImage::from_dynamic(&img)
}

/// Decode a user photo from an in-memory encoded buffer (any supported format).
pub fn load_photo_from_memory(bytes: &[u8]) -> Result<SourceImage> {
    let img = image::load_from_memory(bytes)?;
    SourceImage::from_dynamic(&img)
}

/// Decode the badge template from disk.
pub fn load_template(path: &Path) -> Result<TemplateAsset> {
    let img = image::open(path)?;
    info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Template decoded"
    );
    Ok(TemplateAsset::new(SourceImage::from_dynamic(&img)?))
}

/// Encode a finished composite as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| RoundelError::ExportFailure(format!("PNG encoding failed: {e}")))?;
    Ok(buf)
}

/// Encode a finished composite as PNG and write it to `path`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes).map_err(|e| {
        RoundelError::ExportFailure(format!("failed to write {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), "Badge written");
    Ok(())
}
