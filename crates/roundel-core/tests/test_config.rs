use std::path::PathBuf;

use roundel_core::color::HexColor;
use roundel_core::config::{RoundelConfig, DEFAULT_OUTPUT_FILE};
use roundel_core::error::RoundelError;
use roundel_core::fallback::{FALLBACK_SUBTITLE, FALLBACK_TITLE};

#[test]
fn test_default_config_reference_values() {
    let config = RoundelConfig::default();
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
    assert_eq!(DEFAULT_OUTPUT_FILE, "badge-festival-bankoara.png");
    assert!(config.template.is_none());
    assert_eq!(config.geometry.preview_diameter, 240.0);
    assert_eq!(config.geometry.export_diameter, 400.0);
    assert_eq!(config.geometry.center_y_fraction, 0.6);
    assert_eq!(config.style.ring.gap, 8.0);
    assert_eq!(config.style.ring.width, 15.0);
    assert_eq!(config.style.ring.color, HexColor::WHITE);
    assert_eq!(config.style.fallback.title, FALLBACK_TITLE);
    assert_eq!(config.style.fallback.subtitle, FALLBACK_SUBTITLE);
}

#[test]
fn test_default_config_survives_toml() {
    let config = RoundelConfig::default();
    let text = config.to_toml().unwrap();
    assert!(text.contains("start_color = \"#4a90e2\""), "got:\n{text}");
    let parsed = RoundelConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(RoundelConfig::from_toml("").unwrap(), RoundelConfig::default());
}

#[test]
fn test_partial_toml_overrides() {
    let text = r##"
template = "assets/badge.jpg"

[geometry]
export_diameter = 500.0

[style.ring]
color = "#ffcc00"

[style.fallback]
title = "HELLO"
"##;
    let config = RoundelConfig::from_toml(text).unwrap();
    assert_eq!(config.template, Some(PathBuf::from("assets/badge.jpg")));
    assert_eq!(config.geometry.export_diameter, 500.0);
    assert_eq!(config.geometry.preview_diameter, 240.0);
    assert_eq!(config.style.ring.color, HexColor::rgb(0xff, 0xcc, 0x00));
    assert_eq!(config.style.ring.width, 15.0);
    assert_eq!(config.style.fallback.title, "HELLO");
    assert_eq!(config.style.fallback.subtitle, FALLBACK_SUBTITLE);
    assert_eq!(config.geometry.scale_factor(), 500.0 / 240.0);
}

#[test]
fn test_invalid_values_rejected() {
    let bad_color = "[style.ring]\ncolor = \"white\"\n";
    assert!(matches!(
        RoundelConfig::from_toml(bad_color),
        Err(RoundelError::Config(_))
    ));

    let bad_geometry = "[geometry]\npreview_diameter = 0.0\n";
    assert!(RoundelConfig::from_toml(bad_geometry).is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("roundel.toml");
    std::fs::write(&path, "output = \"out/me.png\"\n").unwrap();
    let config = RoundelConfig::load(&path).unwrap();
    assert_eq!(config.output, PathBuf::from("out/me.png"));

    assert!(matches!(
        RoundelConfig::load(&dir.path().join("missing.toml")),
        Err(RoundelError::Io(_))
    ));
}
