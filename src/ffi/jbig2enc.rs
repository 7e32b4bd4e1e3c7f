// Safe wrapper around the jbig2enc C-linkage adapter

use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;

use libc::c_int;
use tracing::{debug, warn};

use super::jbig2enc_sys::{jbig2enc_encode_generic_c, jbig2enc_free_buffer};
use super::leptonica::Pix;
use super::leptonica_sys::PIX;
use crate::error::{Jbig2Error, Result};

/// Adaptive-template position for generic-region coding.
///
/// Values are handed to jbig2enc uninterpreted; the encoder defines which
/// positions it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOffset {
    pub x: i32,
    pub y: i32,
}

impl TemplateOffset {
    /// Let the encoder choose the template position.
    pub const AUTO: TemplateOffset = TemplateOffset { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        TemplateOffset { x, y }
    }
}

impl Default for TemplateOffset {
    fn default() -> Self {
        Self::AUTO
    }
}

/// Encoding controls for [`encode_generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericRegionOptions {
    /// Typical prediction for generic direct coding (TPGD).
    pub duplicate_line_removal: bool,
    pub template: TemplateOffset,
    pub use_refinement: bool,
}

impl Default for GenericRegionOptions {
    fn default() -> Self {
        GenericRegionOptions {
            duplicate_line_removal: true,
            template: TemplateOffset::AUTO,
            use_refinement: false,
        }
    }
}

/// The scalar arguments exactly as they cross the C boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawGenericArgs {
    pub duplicate_line_removal: c_int,
    pub tpl_x: c_int,
    pub tpl_y: c_int,
    pub use_refinement: c_int,
}

impl GenericRegionOptions {
    pub fn to_raw(&self) -> RawGenericArgs {
        RawGenericArgs {
            duplicate_line_removal: raw_flag(self.duplicate_line_removal),
            tpl_x: self.template.x,
            tpl_y: self.template.y,
            use_refinement: raw_flag(self.use_refinement),
        }
    }
}

/// Encode a bool as the adapter's integer flag (0 or 1).
pub fn raw_flag(value: bool) -> c_int {
    c_int::from(value)
}

/// A JBIG2 byte buffer allocated by jbig2enc.
///
/// Owns the allocation and releases it through the adapter's paired
/// deallocator on drop, so the buffer is freed on every exit path.
pub struct EncodedBuffer {
    ptr: NonNull<u8>,
    len: usize,
}

// The buffer is plain bytes with a single owner.
unsafe impl Send for EncodedBuffer {}
unsafe impl Sync for EncodedBuffer {}

impl EncodedBuffer {
    /// Take ownership of a buffer returned by the adapter.
    ///
    /// # Safety
    /// `ptr` must come from `jbig2enc_encode_generic_c` and point to at least
    /// `len` initialized bytes that nothing else will free.
    unsafe fn from_raw(ptr: NonNull<u8>, len: usize) -> Self {
        EncodedBuffer { ptr, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Address of the underlying allocation.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }
}

impl Deref for EncodedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedBuffer")
            .field("len", &self.len)
            .finish()
    }
}

impl Drop for EncodedBuffer {
    fn drop(&mut self) {
        unsafe { jbig2enc_free_buffer(self.ptr.as_ptr().cast()) }
    }
}

/// Encode a 1-bit PIX using JBIG2 generic region encoding.
///
/// # Arguments
/// * `pix` - A 1-bit leptonica Pix image
/// * `options` - Duplicate line removal, template position and refinement
///
/// # Returns
/// An [`EncodedBuffer`] holding the JBIG2 data. Each call returns its own
/// allocation.
pub fn encode_generic(pix: &Pix, options: &GenericRegionOptions) -> Result<EncodedBuffer> {
    if pix.get_depth() != 1 {
        return Err(Jbig2Error::jbig2_encode(format!(
            "JBIG2 generic encoding requires a 1-bit Pix, got {} bpp",
            pix.get_depth()
        )));
    }

    debug!(
        width = pix.get_width(),
        height = pix.get_height(),
        ?options,
        "encoding generic region"
    );

    unsafe { encode_generic_raw(pix.as_ptr(), options) }
}

/// Forward a raw PIX handle to the adapter.
///
/// A null handle is rejected before reaching jbig2enc. No other validation
/// is done here; jbig2enc decides what input it accepts.
///
/// # Safety
/// A non-null `pix` must point to a live leptonica PIX that is not being
/// mutated concurrently. Whether jbig2enc may be called from several threads
/// at once is up to the library.
pub unsafe fn encode_generic_raw(
    pix: *mut PIX,
    options: &GenericRegionOptions,
) -> Result<EncodedBuffer> {
    if pix.is_null() {
        return Err(Jbig2Error::jbig2_encode("PIX handle is null"));
    }

    let args = options.to_raw();
    let mut length: c_int = 0;
    let data = unsafe {
        jbig2enc_encode_generic_c(
            pix,
            args.duplicate_line_removal,
            args.tpl_x,
            args.tpl_y,
            args.use_refinement,
            &mut length,
        )
    };

    let Some(data) = NonNull::new(data) else {
        warn!(?options, "jbig2enc returned NULL");
        return Err(Jbig2Error::jbig2_encode("jbig2enc returned NULL"));
    };

    // Own the allocation before checking the length so it is freed either way.
    let mut buffer = unsafe { EncodedBuffer::from_raw(data, 0) };
    buffer.len = usize::try_from(length).map_err(|_| {
        Jbig2Error::jbig2_encode(format!("jbig2enc reported negative length {length}"))
    })?;

    debug!(bytes = buffer.len(), "generic region encoded");
    Ok(buffer)
}
