//! # Laprus Core
//!
//! Layout encodings and raw foreign declarations shared by the laprus
//! LAPACK marshalling layer.
//!
//! This crate provides:
//! - **Layout encodings**: norm / triangle / transpose selectors and the
//!   single-character tokens the Fortran routines expect, plus derived
//!   dimensions (leading dimension, band storage strides, packed lengths).
//! - **Raw declarations**: Fortran-convention LAPACK entry points (only
//!   compiled when `--features native` is enabled). Safe marshalling lives
//!   in `laprus-lapack`.

pub mod layout;

// Native LAPACK declarations (only compiled when --features native is enabled)
#[cfg(feature = "native")]
pub mod lapack_ffi;

pub use layout::{band_stride, band_stride_lu, leading_dim, packed_len};
pub use layout::{Norm, Transpose, Uplo};
