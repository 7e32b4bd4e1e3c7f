// Hand-written FFI bindings for leptonica.
// Only the calls needed to build and inspect 1-bit masks are exposed here.

use libc::c_int;

/// Opaque representation of leptonica's PIX structure.
/// We never access internal fields; all interaction goes through the C API.
#[repr(C)]
pub struct PIX {
    _opaque: [u8; 0],
}

unsafe extern "C" {
    // --- Creation and destruction ---

    pub fn pixCreate(width: c_int, height: c_int, depth: c_int) -> *mut PIX;
    pub fn pixDestroy(ppix: *mut *mut PIX);
    pub fn pixClone(pix: *mut PIX) -> *mut PIX;

    // --- Properties ---

    pub fn pixGetWidth(pix: *const PIX) -> c_int;
    pub fn pixGetHeight(pix: *const PIX) -> c_int;
    pub fn pixGetDepth(pix: *const PIX) -> c_int;
    pub fn pixGetWpl(pix: *const PIX) -> c_int;
    pub fn pixGetData(pix: *mut PIX) -> *mut u32;

    // --- Pixel access ---

    pub fn pixSetAll(pix: *mut PIX) -> c_int;
    pub fn pixClearAll(pix: *mut PIX) -> c_int;
    pub fn pixSetPixel(pix: *mut PIX, x: c_int, y: c_int, val: u32) -> c_int;
    pub fn pixGetPixel(pix: *mut PIX, x: c_int, y: c_int, pval: *mut u32) -> c_int;
    pub fn pixCountPixels(pix: *mut PIX, pcount: *mut c_int, tab8: *mut c_int) -> c_int;
}
