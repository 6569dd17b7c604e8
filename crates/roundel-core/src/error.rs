use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoundelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid geometry: {0}")]
    Geometry(String),

    #[error("No source photo loaded")]
    MissingSource,

    #[error("Export failed: {0}")]
    ExportFailure(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RoundelError>;
