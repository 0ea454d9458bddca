//! Matrix norm dispatch.
//!
//! Each method encodes the norm selector, derives the storage stride from the
//! shape parameters, and forwards to the driver. The native side reads `work`
//! only for the one-norm/infinity-norm variants (length >= m for `dlange`'s
//! infinity norm, >= n for the packed routines); it may be left empty
//! otherwise.

use crate::driver::NormRoutines;
use crate::Lapack;
use laprus_core::layout::{band_stride, leading_dim, Norm, Uplo};
use num_complex::Complex;

impl<D: NormRoutines> Lapack<D> {
    /// Norm of a general dense m x n matrix, column-major.
    pub fn dlange(&self, norm: Norm, m: usize, n: usize, a: &[f64], work: &mut [f64]) -> f64 {
        let lda = leading_dim(m) as i32;
        self.driver()
            .dlange(norm.token(), m as i32, n as i32, a, lda, work)
    }

    /// Norm of a general dense complex m x n matrix, column-major.
    pub fn zlange(
        &self,
        norm: Norm,
        m: usize,
        n: usize,
        a: &[Complex<f64>],
        work: &mut [f64],
    ) -> f64 {
        let lda = leading_dim(m) as i32;
        self.driver()
            .zlange(norm.token(), m as i32, n as i32, a, lda, work)
    }

    /// Norm of a symmetric n x n matrix with one triangle in packed storage
    /// (length n*(n+1)/2).
    pub fn dlansp(&self, norm: Norm, uplo: Uplo, n: usize, ap: &[f64], work: &mut [f64]) -> f64 {
        self.driver()
            .dlansp(norm.token(), uplo.token(), n as i32, ap, work)
    }

    /// Norm of a Hermitian n x n matrix in packed storage.
    pub fn zlanhp(
        &self,
        norm: Norm,
        uplo: Uplo,
        n: usize,
        ap: &[Complex<f64>],
        work: &mut [f64],
    ) -> f64 {
        self.driver()
            .zlanhp(norm.token(), uplo.token(), n as i32, ap, work)
    }

    /// Norm of a general n x n band matrix with kl sub- and ku
    /// super-diagonals, stored with stride kl + ku + 1.
    pub fn dlangb(
        &self,
        norm: Norm,
        n: usize,
        kl: usize,
        ku: usize,
        ab: &[f64],
        work: &mut [f64],
    ) -> f64 {
        let ldab = band_stride(kl, ku) as i32;
        self.driver()
            .dlangb(norm.token(), n as i32, kl as i32, ku as i32, ab, ldab, work)
    }

    /// Norm of a general complex band matrix.
    pub fn zlangb(
        &self,
        norm: Norm,
        n: usize,
        kl: usize,
        ku: usize,
        ab: &[Complex<f64>],
        work: &mut [f64],
    ) -> f64 {
        let ldab = band_stride(kl, ku) as i32;
        self.driver()
            .zlangb(norm.token(), n as i32, kl as i32, ku as i32, ab, ldab, work)
    }
}
