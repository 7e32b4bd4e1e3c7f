pub mod bitmap;
pub mod jbig2;
