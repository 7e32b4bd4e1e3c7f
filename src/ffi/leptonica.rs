// Safe wrapper around leptonica's PIX (RAII Drop)

use super::leptonica_sys::{
    PIX, pixClearAll, pixClone, pixCountPixels, pixCreate, pixDestroy, pixGetData, pixGetDepth,
    pixGetHeight, pixGetPixel, pixGetWidth, pixGetWpl, pixSetAll, pixSetPixel,
};
use crate::error::{Jbig2Error, Result};
use std::ptr;

/// Safe wrapper around leptonica's PIX structure
/// Implements RAII pattern for automatic memory management
pub struct Pix {
    ptr: *mut PIX,
}

impl Pix {
    /// Create a new Pix image with specified dimensions and depth
    ///
    /// # Arguments
    /// * `width` - Image width in pixels (must fit in i32)
    /// * `height` - Image height in pixels (must fit in i32)
    /// * `depth` - Bits per pixel (1, 8, 32, etc.; must fit in i32)
    ///
    /// # Returns
    /// `Ok(Pix)` if successful, `Err` on failure
    pub fn create(width: u32, height: u32, depth: u32) -> Result<Self> {
        if width > i32::MAX as u32 || height > i32::MAX as u32 || depth > i32::MAX as u32 {
            return Err(Jbig2Error::pix(format!(
                "Pix dimensions exceed i32::MAX (width={}, height={}, depth={})",
                width, height, depth
            )));
        }

        unsafe {
            let ptr = pixCreate(width as i32, height as i32, depth as i32);
            if ptr.is_null() {
                Err(Jbig2Error::pix(format!(
                    "Failed to create Pix image ({}x{}x{})",
                    width, height, depth
                )))
            } else {
                Ok(Pix { ptr })
            }
        }
    }

    /// Create an all-background 1-bit image.
    pub fn create_binary(width: u32, height: u32) -> Result<Self> {
        Self::create(width, height, 1)
    }

    /// Threshold an 8-bit luma buffer into a 1-bit mask.
    ///
    /// Pixels strictly darker than `threshold` become foreground (1).
    /// `luma` is row-major, one byte per pixel, without row padding.
    pub fn from_luma(width: u32, height: u32, luma: &[u8], threshold: u8) -> Result<Self> {
        let expected_size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                Jbig2Error::pix(format!(
                    "Overflow computing buffer size for {}x{} luma image",
                    width, height
                ))
            })?;

        if luma.len() != expected_size {
            return Err(Jbig2Error::pix(format!(
                "Data size mismatch: expected {} bytes, got {}",
                expected_size,
                luma.len()
            )));
        }

        let pix = Self::create_binary(width, height)?;
        if expected_size == 0 {
            return Ok(pix);
        }

        let wpl = pix.get_wpl() as usize;
        let words = unsafe {
            let data = pixGetData(pix.ptr);
            if data.is_null() {
                return Err(Jbig2Error::pix(
                    "pixGetData returned null for newly created Pix",
                ));
            }
            // pixCreate zero-fills the raster, so only foreground bits are written.
            std::slice::from_raw_parts_mut(data, wpl * height as usize)
        };

        // 1 bpp rows are packed MSB-first within each 32-bit word.
        for (row, line) in luma
            .chunks_exact(width as usize)
            .zip(words.chunks_exact_mut(wpl))
        {
            for (x, &value) in row.iter().enumerate() {
                if value < threshold {
                    line[x / 32] |= 0x8000_0000 >> (x % 32);
                }
            }
        }

        Ok(pix)
    }

    /// Get the width of the image in pixels
    pub fn get_width(&self) -> u32 {
        unsafe { pixGetWidth(self.ptr) as u32 }
    }

    /// Get the height of the image in pixels
    pub fn get_height(&self) -> u32 {
        unsafe { pixGetHeight(self.ptr) as u32 }
    }

    /// Get the depth (bits per pixel) of the image
    pub fn get_depth(&self) -> u32 {
        unsafe { pixGetDepth(self.ptr) as u32 }
    }

    /// Get the words per line (stride) of the image
    pub fn get_wpl(&self) -> u32 {
        unsafe { pixGetWpl(self.ptr) as u32 }
    }

    /// Set every pixel to foreground (`value != 0`) or clear every pixel.
    pub fn set_all_pixels(&self, value: u32) -> Result<()> {
        let status = unsafe {
            if value != 0 {
                pixSetAll(self.ptr)
            } else {
                pixClearAll(self.ptr)
            }
        };
        if status != 0 {
            return Err(Jbig2Error::pix("Failed to fill Pix"));
        }
        Ok(())
    }

    pub fn set_pixel(&self, x: u32, y: u32, value: u32) -> Result<()> {
        self.check_bounds(x, y)?;
        let status = unsafe { pixSetPixel(self.ptr, x as i32, y as i32, value) };
        if status != 0 {
            return Err(Jbig2Error::pix(format!("Failed to set pixel ({x}, {y})")));
        }
        Ok(())
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<u32> {
        self.check_bounds(x, y)?;
        let mut value: u32 = 0;
        let status = unsafe { pixGetPixel(self.ptr, x as i32, y as i32, &mut value) };
        if status != 0 {
            return Err(Jbig2Error::pix(format!("Failed to read pixel ({x}, {y})")));
        }
        Ok(value)
    }

    /// Number of foreground pixels in a 1-bit image.
    pub fn count_foreground(&self) -> Result<u64> {
        if self.get_depth() != 1 {
            return Err(Jbig2Error::pix(format!(
                "count_foreground requires a 1-bit Pix, got {} bpp",
                self.get_depth()
            )));
        }
        let mut count = 0;
        let status = unsafe { pixCountPixels(self.ptr, &mut count, ptr::null_mut()) };
        if status != 0 {
            return Err(Jbig2Error::pix("Failed to count pixels"));
        }
        Ok(count as u64)
    }

    /// Create a refcounted alias of this Pix via leptonica's pixClone.
    ///
    /// This does **not** perform a deep copy. The returned `Pix` shares the
    /// same underlying pixel data through leptonica's internal reference count.
    /// Each `Pix` (original and alias) must still be dropped independently;
    /// leptonica will free the backing memory only when the last reference is
    /// destroyed.
    pub fn leptonica_clone(&self) -> Result<Pix> {
        unsafe {
            let ptr = pixClone(self.ptr);
            if ptr.is_null() {
                Err(Jbig2Error::pix("Failed to clone Pix"))
            } else {
                Ok(Pix { ptr })
            }
        }
    }

    /// Raw handle for passing to C APIs. Ownership stays with `self`.
    pub fn as_ptr(&self) -> *mut PIX {
        self.ptr
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.get_width() || y >= self.get_height() {
            return Err(Jbig2Error::pix(format!(
                "Pixel ({x}, {y}) outside {}x{} image",
                self.get_width(),
                self.get_height()
            )));
        }
        Ok(())
    }
}

impl Drop for Pix {
    fn drop(&mut self) {
        unsafe {
            if !self.ptr.is_null() {
                pixDestroy(&mut self.ptr);
            }
        }
    }
}

// Pix is not Clone at the Rust level: pixClone is a refcounted alias, while
// the Clone trait would imply an independent deep copy.
