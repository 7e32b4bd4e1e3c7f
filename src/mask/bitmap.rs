// Raster image -> 1-bit leptonica mask

use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::ffi::leptonica::Pix;

/// Threshold a decoded image into a 1-bit mask.
///
/// The image is converted to 8-bit luma first; pixels darker than
/// `threshold` become foreground.
pub fn mask_from_image(img: &DynamicImage, threshold: u8) -> crate::error::Result<Pix> {
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    Pix::from_luma(width, height, luma.as_raw(), threshold)
}

/// Decode an image file and threshold it into a 1-bit mask.
///
/// # Arguments
/// * `path`      - Any format the `image` crate can decode
/// * `threshold` - Luma cut-off; darker pixels are foreground
pub fn load_mask(path: &Path, threshold: u8) -> crate::error::Result<Pix> {
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded mask source"
    );
    mask_from_image(&img, threshold)
}
