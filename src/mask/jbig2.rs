// 1-bit mask -> JBIG2 bytes

use std::path::Path;

use crate::config::settings::Jbig2Settings;
use crate::ffi::jbig2enc;
use crate::ffi::leptonica::Pix;
use crate::mask::bitmap;

/// Encode a 1-bit mask into JBIG2 generic-region data.
///
/// # Arguments
/// * `mask`     - A 1-bit `Pix`
/// * `settings` - Encoder controls; `threshold` is not used here
pub fn encode_mask(mask: &Pix, settings: &Jbig2Settings) -> crate::error::Result<Vec<u8>> {
    let buffer = jbig2enc::encode_generic(mask, &settings.options())?;
    Ok(buffer.to_vec())
}

/// Decode an image file, threshold it and encode the resulting mask.
pub fn encode_mask_file(path: &Path, settings: &Jbig2Settings) -> crate::error::Result<Vec<u8>> {
    let mask = bitmap::load_mask(path, settings.threshold)?;
    encode_mask(&mask, settings)
}
