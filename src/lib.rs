//! Rust binding for jbig2enc's generic-region encoder.
//!
//! The encoder is C++-only; `csrc/jbig2enc_shim.cpp` re-exports it with C
//! linkage and [`ffi::jbig2enc`] wraps that entry point safely.

pub mod config;
pub mod error;
pub mod ffi;
pub mod mask;
