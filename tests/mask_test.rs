use std::sync::{Mutex, MutexGuard, OnceLock};

use image::{DynamicImage, GrayImage, Luma};

use jbig2_generic::config::settings::Jbig2Settings;
use jbig2_generic::mask::bitmap::{load_mask, mask_from_image};
use jbig2_generic::mask::jbig2::{encode_mask, encode_mask_file};

/// jbig2enc makes no concurrency guarantees; encode one image at a time.
fn encoder_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// White page with a black horizontal bar across rows 10..14.
fn bar_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |_, y| {
        if (10..14).contains(&y) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

#[test]
fn test_mask_from_image_marks_dark_pixels() {
    let img = DynamicImage::ImageLuma8(bar_image(20, 30));
    let mask = mask_from_image(&img, 128).unwrap();

    assert_eq!(mask.get_width(), 20);
    assert_eq!(mask.get_height(), 30);
    assert_eq!(mask.get_depth(), 1);
    assert_eq!(mask.count_foreground().unwrap(), 20 * 4);
    assert_eq!(mask.get_pixel(5, 11).unwrap(), 1);
    assert_eq!(mask.get_pixel(5, 0).unwrap(), 0);
}

#[test]
fn test_mask_from_rgb_image() {
    let mut rgb = image::RgbImage::from_pixel(4, 4, image::Rgb([255, 255, 255]));
    rgb.put_pixel(1, 2, image::Rgb([0, 0, 0]));
    let mask = mask_from_image(&DynamicImage::ImageRgb8(rgb), 128).unwrap();
    assert_eq!(mask.count_foreground().unwrap(), 1);
    assert_eq!(mask.get_pixel(1, 2).unwrap(), 1);
}

#[test]
fn test_load_mask_from_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mask.png");
    bar_image(16, 16).save(&path).unwrap();

    let mask = load_mask(&path, 128).unwrap();
    assert_eq!(mask.count_foreground().unwrap(), 16 * 4);
}

#[test]
fn test_load_mask_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_mask(&dir.path().join("absent.png"), 128).is_err());
}

#[test]
fn test_encode_mask_produces_data() {
    let _guard = encoder_lock();
    let img = DynamicImage::ImageLuma8(bar_image(64, 64));
    let mask = mask_from_image(&img, 128).unwrap();

    let data = encode_mask(&mask, &Jbig2Settings::default()).unwrap();
    assert!(!data.is_empty());
}

#[test]
fn test_encode_mask_file_end_to_end() {
    let _guard = encoder_lock();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.png");
    bar_image(100, 50).save(&path).unwrap();

    let data = encode_mask_file(&path, &Jbig2Settings::default()).unwrap();
    assert!(!data.is_empty());
    assert!(data.len() < 100 * 50 / 8 + 64);
}
