use std::io::Write;

use pixview_core::config::ViewerConfig;
use pixview_core::consts::{EDGE_MARGIN_PX, MIN_IMAGE_PX, WHEEL_ZOOM_MULTIPLIER};
use pixview_core::error::PixviewError;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = ViewerConfig::default();
    assert_eq!(config.edge_margin_px, EDGE_MARGIN_PX);
    assert_eq!(config.min_image_px, MIN_IMAGE_PX);
    assert_eq!(config.wheel_multiplier, WHEEL_ZOOM_MULTIPLIER);
    assert!(config.image_extensions.iter().any(|e| e == "png"));
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = ViewerConfig::from_toml_str("edge_margin_px = 24.0\n").unwrap();
    assert_eq!(config.edge_margin_px, 24.0);
    assert_eq!(config.min_image_px, MIN_IMAGE_PX);
}

#[test]
fn test_toml_round_trip() {
    let config = ViewerConfig {
        keyboard_zoom_step: 0.5,
        image_extensions: vec!["png".into(), "gif".into()],
        ..ViewerConfig::default()
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(ViewerConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_rejects_non_positive_values() {
    let err = ViewerConfig::from_toml_str("min_image_px = 0.0\n").unwrap_err();
    assert!(matches!(err, PixviewError::InvalidConfig(_)), "got: {err}");
    assert!(err.to_string().contains("min_image_px"), "got: {err}");

    let err = ViewerConfig::from_toml_str("wheel_multiplier = -0.01\n").unwrap_err();
    assert!(matches!(err, PixviewError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_rejects_dotted_extensions() {
    let err = ViewerConfig::from_toml_str("image_extensions = [\".png\"]\n").unwrap_err();
    assert!(matches!(err, PixviewError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = ViewerConfig::from_toml_str("edge_margin_px = \"wide\"").unwrap_err();
    assert!(matches!(err, PixviewError::ConfigParse(_)), "got: {err}");
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "keyboard_zoom_step = 0.2").unwrap();
    let config = ViewerConfig::load(file.path()).unwrap();
    assert_eq!(config.keyboard_zoom_step, 0.2);
}
