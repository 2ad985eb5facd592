use image::{Rgb, RgbImage};
use tempfile::TempDir;

use pixview_core::error::PixviewError;
use pixview_core::geometry::ImageSize;
use pixview_core::io::image_io::{load_image, probe_image_size};

#[test]
fn test_probe_and_load_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stripe.png");
    let mut img = RgbImage::new(40, 10);
    img.put_pixel(3, 2, Rgb([255, 0, 0]));
    img.save(&path).unwrap();

    assert_eq!(probe_image_size(&path).unwrap(), ImageSize::new(40.0, 10.0).unwrap());

    let decoded = load_image(&path).unwrap();
    assert_eq!((decoded.width, decoded.height), (40, 10));
    assert_eq!(decoded.rgba.len(), 40 * 10 * 4);
    let offset = (2 * 40 + 3) * 4;
    assert_eq!(&decoded.rgba[offset..offset + 4], &[255, 0, 0, 255]);
    assert_eq!(decoded.size(), ImageSize::new(40.0, 10.0));
}

#[test]
fn test_load_garbage_is_image_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, PixviewError::Image(_)), "got: {err}");
}
