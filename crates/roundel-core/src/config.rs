use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoundelError};
use crate::export::BadgeStyle;
use crate::geometry::ViewportGeometry;

/// Default name of the exported badge file.
pub const DEFAULT_OUTPUT_FILE: &str = "badge-festival-bankoara.png";

/// Top-level configuration, usually read from a TOML file.
///
/// Every section is optional; missing fields fall back to the reference
/// badge layout (240 px preview, 400 px cutout at 50%/60% of a 1080 px
/// template, 15 px white ring).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundelConfig {
    /// Badge template image; the fallback background is used when unset or
    /// unreadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    pub output: PathBuf,
    pub geometry: ViewportGeometry,
    pub style: BadgeStyle,
}

impl Default for RoundelConfig {
    fn default() -> Self {
        Self {
            template: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            geometry: ViewportGeometry::default(),
            style: BadgeStyle::default(),
        }
    }
}

impl RoundelConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| RoundelError::Config(e.to_string()))?;
        config.geometry.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RoundelError::Config(e.to_string()))
    }
}
