//! Solve dispatch over previously computed factors.
//!
//! `b` holds the right-hand sides on entry (n x nrhs, column-major) and the
//! solution on exit. The factor buffers are exactly what the matching
//! factorization wrote; they are read-only here.

use crate::driver::SolveRoutines;
use crate::error::{check, Result};
use crate::Lapack;
use laprus_core::layout::{leading_dim, Transpose, Uplo};
use num_complex::Complex;

impl<D: SolveRoutines> Lapack<D> {
    /// Solve A * X = B (or the transposed system) from `dgetrf` factors.
    pub fn dgetrs(
        &self,
        trans: Transpose,
        n: usize,
        nrhs: usize,
        a: &[f64],
        ipiv: &[i32],
        b: &mut [f64],
    ) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let ldb = leading_dim(n) as i32;
        check(
            "dgetrs",
            self.driver()
                .dgetrs(trans.token(), n as i32, nrhs as i32, a, lda, ipiv, b, ldb),
        )
    }

    /// Complex LU solve.
    pub fn zgetrs(
        &self,
        trans: Transpose,
        n: usize,
        nrhs: usize,
        a: &[Complex<f64>],
        ipiv: &[i32],
        b: &mut [Complex<f64>],
    ) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let ldb = leading_dim(n) as i32;
        check(
            "zgetrs",
            self.driver()
                .zgetrs(trans.token(), n as i32, nrhs as i32, a, lda, ipiv, b, ldb),
        )
    }

    /// Solve A * X = B from `dpotrf` factors.
    pub fn dpotrs(&self, uplo: Uplo, n: usize, nrhs: usize, a: &[f64], b: &mut [f64]) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let ldb = leading_dim(n) as i32;
        check(
            "dpotrs",
            self.driver()
                .dpotrs(uplo.token(), n as i32, nrhs as i32, a, lda, b, ldb),
        )
    }

    /// Hermitian Cholesky solve.
    pub fn zpotrs(
        &self,
        uplo: Uplo,
        n: usize,
        nrhs: usize,
        a: &[Complex<f64>],
        b: &mut [Complex<f64>],
    ) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let ldb = leading_dim(n) as i32;
        check(
            "zpotrs",
            self.driver()
                .zpotrs(uplo.token(), n as i32, nrhs as i32, a, lda, b, ldb),
        )
    }
}
