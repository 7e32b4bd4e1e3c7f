pub mod jbig2enc;
pub mod jbig2enc_sys;
pub mod leptonica;
pub mod leptonica_sys;
