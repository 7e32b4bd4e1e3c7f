// Raw declarations for the C-linkage adapter in csrc/jbig2enc_shim.cpp.
//
// jbig2_encode_generic itself has C++ linkage; these are the unmangled
// entry points the shim re-exports.

use super::leptonica_sys::PIX;

unsafe extern "C" {
    /// Encode a 1-bit PIX using JBIG2 generic region encoding.
    ///
    /// # Arguments
    /// * `pix` - Pointer to a 1-bit leptonica PIX
    /// * `duplicate_line_removal` - Enable TPGD (0 = off, nonzero = on)
    /// * `tpl_x` - Template x position (-1 for auto)
    /// * `tpl_y` - Template y position (-1 for auto)
    /// * `use_refinement` - Enable refinement coding (0 = off, nonzero = on)
    /// * `length` - Output: length of returned buffer in bytes
    ///
    /// # Returns
    /// Pointer to a malloc'd buffer containing JBIG2 data, or NULL on failure.
    /// `*length` is only written on success. The buffer must be released with
    /// [`jbig2enc_free_buffer`].
    pub fn jbig2enc_encode_generic_c(
        pix: *mut PIX,
        duplicate_line_removal: libc::c_int,
        tpl_x: libc::c_int,
        tpl_y: libc::c_int,
        use_refinement: libc::c_int,
        length: *mut libc::c_int,
    ) -> *mut u8;

    /// Free a buffer returned by [`jbig2enc_encode_generic_c`] with the
    /// allocator jbig2enc used for it.
    pub fn jbig2enc_free_buffer(buf: *mut libc::c_void);
}
