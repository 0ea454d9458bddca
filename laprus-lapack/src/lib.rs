// Dispatch methods mirror the Fortran argument lists — many parameters are
// inherent to the API.
#![allow(clippy::too_many_arguments)]

//! # Laprus
//!
//! Safe marshalling layer over a native LAPACK library.
//!
//! The numerical kernels live in the native library; this crate contributes
//! the layout translation, workspace sizing, and status classification
//! around them:
//!
//! - **Norms** (`dlange`/`zlange`, `dlansp`/`zlanhp`, `dlangb`/`zlangb`) over
//!   general dense, symmetric/Hermitian packed, and general band storage
//! - **LU factorization** (`dgetrf`/`zgetrf`, band `dgbtrf`/`zgbtrf`,
//!   tridiagonal `dgttrf`/`zgttrf`) with partial pivoting
//! - **Cholesky factorization** (`dpotrf`/`zpotrf`, packed `dpptrf`/`zpptrf`,
//!   band `dpbtrf`/`zpbtrf`, tridiagonal `dpttrf`/`zpttrf`,
//!   rectangular-full-packed `dpftrf`/`zpftrf`)
//! - **Bunch-Kaufman factorization** (`dsytrf`/`zsytrf`/`zhetrf`, packed
//!   `dsptrf`/`zsptrf`/`zhptrf`) with workspace queries
//! - **Solves** from computed factors (`dgetrs`/`zgetrs`, `dpotrs`/`zpotrs`)
//!
//! All buffers are caller-owned, column-major, and mutated in place. Leading
//! dimensions and band strides are derived from the shape parameters; buffer
//! lengths are the caller's contract.
//!
//! ## Drivers
//!
//! Native entry points sit behind the [`NormRoutines`] / [`FactorRoutines`] /
//! [`SolveRoutines`] traits. The [`NativeLapack`] adapter (enabled with
//! `--features native`) implements them over the Fortran symbols declared in
//! `laprus-core`; any other implementation can be injected for testing or for
//! an alternate native build.
//!
//! ```ignore
//! // Requires a linked LAPACK: build with --features native.
//! use laprus_lapack::{Lapack, Uplo};
//!
//! let lap = Lapack::native();
//! let mut a = vec![4.0, 2.0, 2.0, 3.0]; // column-major 2x2, SPD
//! lap.dpotrf(Uplo::Lower, 2, &mut a)?;
//! let mut b = vec![8.0, 8.0];
//! lap.dpotrs(Uplo::Lower, 2, 1, &a, &mut b)?;
//! # Ok::<(), laprus_lapack::LapackError>(())
//! ```

pub mod driver;
pub mod error;
pub mod factor;
pub mod norm;
pub mod solve;
pub mod workspace;

#[cfg(test)]
pub(crate) mod refdrv;

#[cfg(feature = "native")]
pub use driver::NativeLapack;
pub use driver::{FactorRoutines, NormRoutines, SolveRoutines};
pub use error::{check, LapackError, Result};

// Re-export layout types for convenience
pub use laprus_core::layout::{Norm, Transpose, Uplo};

/// Identity of the native library a dispatch instance is bound to.
///
/// Purely descriptive: carried for diagnostics, never consulted on the call
/// path. Which binary actually provides the symbols is a link-time decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryId {
    /// Link name of the native binary.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

impl Default for LibraryId {
    fn default() -> Self {
        Self {
            name: "lapack",
            description: "native LAPACK, Fortran calling convention",
        }
    }
}

/// Dispatch layer over a LAPACK driver.
///
/// Holds the driver and the immutable library identity; otherwise stateless.
/// Every operation is a single synchronous native call on caller-owned
/// buffers, so a shared instance is safe to use from multiple threads as long
/// as no buffer is passed into two concurrent calls.
pub struct Lapack<D> {
    driver: D,
    id: LibraryId,
}

impl<D> Lapack<D> {
    /// Bind the dispatch layer to `driver` under the given identity.
    pub fn new(driver: D, id: LibraryId) -> Self {
        Self { driver, id }
    }

    /// Bind the dispatch layer to `driver` under the default identity.
    pub fn with_driver(driver: D) -> Self {
        Self::new(driver, LibraryId::default())
    }

    /// Identity of the underlying library.
    pub fn id(&self) -> &LibraryId {
        &self.id
    }

    pub(crate) fn driver(&self) -> &D {
        &self.driver
    }
}

#[cfg(feature = "native")]
impl Lapack<NativeLapack> {
    /// Dispatch layer bound to the system LAPACK.
    pub fn native() -> Self {
        Self::with_driver(NativeLapack)
    }
}
