//! Factorization dispatch.
//!
//! One method per (factorization x numeric domain). Buffers are overwritten
//! with the computed factors; pivot sequences keep the native 1-based
//! convention (Bunch-Kaufman writes signed entries encoding 2x2 blocks).
//! Leading dimensions and band strides are derived from the shape parameters;
//! buffer lengths are not validated here.

use crate::driver::FactorRoutines;
use crate::error::{check, Result};
use crate::Lapack;
use laprus_core::layout::{band_stride, band_stride_lu, leading_dim, Transpose, Uplo};
use num_complex::Complex;

impl<D: FactorRoutines> Lapack<D> {
    /// LU factorization of a general dense m x n matrix with partial
    /// pivoting. `a` is overwritten with L (unit lower) and U; `ipiv`
    /// receives min(m, n) row interchanges.
    pub fn dgetrf(&self, m: usize, n: usize, a: &mut [f64], ipiv: &mut [i32]) -> Result<()> {
        let lda = leading_dim(m) as i32;
        check(
            "dgetrf",
            self.driver().dgetrf(m as i32, n as i32, a, lda, ipiv),
        )
    }

    /// Complex LU factorization with partial pivoting.
    pub fn zgetrf(
        &self,
        m: usize,
        n: usize,
        a: &mut [Complex<f64>],
        ipiv: &mut [i32],
    ) -> Result<()> {
        let lda = leading_dim(m) as i32;
        check(
            "zgetrf",
            self.driver().zgetrf(m as i32, n as i32, a, lda, ipiv),
        )
    }

    /// LU factorization of a general band matrix with kl sub- and ku
    /// super-diagonals. `ab` uses the LU band layout with stride
    /// 2*kl + ku + 1; the extra kl rows absorb pivoting fill-in.
    pub fn dgbtrf(
        &self,
        m: usize,
        n: usize,
        kl: usize,
        ku: usize,
        ab: &mut [f64],
        ipiv: &mut [i32],
    ) -> Result<()> {
        let ldab = band_stride_lu(kl, ku) as i32;
        check(
            "dgbtrf",
            self.driver()
                .dgbtrf(m as i32, n as i32, kl as i32, ku as i32, ab, ldab, ipiv),
        )
    }

    /// Complex band LU factorization.
    pub fn zgbtrf(
        &self,
        m: usize,
        n: usize,
        kl: usize,
        ku: usize,
        ab: &mut [Complex<f64>],
        ipiv: &mut [i32],
    ) -> Result<()> {
        let ldab = band_stride_lu(kl, ku) as i32;
        check(
            "zgbtrf",
            self.driver()
                .zgbtrf(m as i32, n as i32, kl as i32, ku as i32, ab, ldab, ipiv),
        )
    }

    /// LU factorization of a general tridiagonal matrix given as its three
    /// diagonals. `du2` (length n-2) receives the second super-diagonal of U.
    pub fn dgttrf(
        &self,
        n: usize,
        dl: &mut [f64],
        d: &mut [f64],
        du: &mut [f64],
        du2: &mut [f64],
        ipiv: &mut [i32],
    ) -> Result<()> {
        check(
            "dgttrf",
            self.driver().dgttrf(n as i32, dl, d, du, du2, ipiv),
        )
    }

    /// Complex tridiagonal LU factorization.
    pub fn zgttrf(
        &self,
        n: usize,
        dl: &mut [Complex<f64>],
        d: &mut [Complex<f64>],
        du: &mut [Complex<f64>],
        du2: &mut [Complex<f64>],
        ipiv: &mut [i32],
    ) -> Result<()> {
        check(
            "zgttrf",
            self.driver().zgttrf(n as i32, dl, d, du, du2, ipiv),
        )
    }

    /// Cholesky factorization of a symmetric positive-definite dense matrix.
    /// The `uplo` triangle of `a` is overwritten with the factor.
    pub fn dpotrf(&self, uplo: Uplo, n: usize, a: &mut [f64]) -> Result<()> {
        let lda = leading_dim(n) as i32;
        check("dpotrf", self.driver().dpotrf(uplo.token(), n as i32, a, lda))
    }

    /// Cholesky factorization of a Hermitian positive-definite dense matrix.
    pub fn zpotrf(&self, uplo: Uplo, n: usize, a: &mut [Complex<f64>]) -> Result<()> {
        let lda = leading_dim(n) as i32;
        check("zpotrf", self.driver().zpotrf(uplo.token(), n as i32, a, lda))
    }

    /// Cholesky factorization in packed storage (length n*(n+1)/2).
    pub fn dpptrf(&self, uplo: Uplo, n: usize, ap: &mut [f64]) -> Result<()> {
        check("dpptrf", self.driver().dpptrf(uplo.token(), n as i32, ap))
    }

    /// Hermitian packed Cholesky factorization.
    pub fn zpptrf(&self, uplo: Uplo, n: usize, ap: &mut [Complex<f64>]) -> Result<()> {
        check("zpptrf", self.driver().zpptrf(uplo.token(), n as i32, ap))
    }

    /// Cholesky factorization of a positive-definite band matrix with kd
    /// off-diagonals, stored with stride kd + 1.
    pub fn dpbtrf(&self, uplo: Uplo, n: usize, kd: usize, ab: &mut [f64]) -> Result<()> {
        let ldab = band_stride(kd, 0) as i32;
        check(
            "dpbtrf",
            self.driver().dpbtrf(uplo.token(), n as i32, kd as i32, ab, ldab),
        )
    }

    /// Hermitian band Cholesky factorization.
    pub fn zpbtrf(&self, uplo: Uplo, n: usize, kd: usize, ab: &mut [Complex<f64>]) -> Result<()> {
        let ldab = band_stride(kd, 0) as i32;
        check(
            "zpbtrf",
            self.driver().zpbtrf(uplo.token(), n as i32, kd as i32, ab, ldab),
        )
    }

    /// Cholesky factorization of a positive-definite tridiagonal matrix
    /// given as diagonal `d` (length n) and off-diagonal `e` (length n-1).
    pub fn dpttrf(&self, n: usize, d: &mut [f64], e: &mut [f64]) -> Result<()> {
        check("dpttrf", self.driver().dpttrf(n as i32, d, e))
    }

    /// Hermitian tridiagonal factorization; the diagonal stays real.
    pub fn zpttrf(&self, n: usize, d: &mut [f64], e: &mut [Complex<f64>]) -> Result<()> {
        check("zpttrf", self.driver().zpttrf(n as i32, d, e))
    }

    /// Cholesky factorization in rectangular-full-packed storage
    /// (length n*(n+1)/2). `transr` selects the normal or transposed RFP
    /// layout.
    pub fn dpftrf(&self, transr: Transpose, uplo: Uplo, n: usize, a: &mut [f64]) -> Result<()> {
        check(
            "dpftrf",
            self.driver().dpftrf(transr.token(), uplo.token(), n as i32, a),
        )
    }

    /// Hermitian RFP Cholesky factorization; `transr` is no-transpose or
    /// conjugate-transpose.
    pub fn zpftrf(
        &self,
        transr: Transpose,
        uplo: Uplo,
        n: usize,
        a: &mut [Complex<f64>],
    ) -> Result<()> {
        check(
            "zpftrf",
            self.driver().zpftrf(transr.token(), uplo.token(), n as i32, a),
        )
    }

    /// Bunch-Kaufman factorization of an indefinite symmetric dense matrix.
    /// `work` should have the length reported by
    /// [`dsytrf_work_size`](Lapack::dsytrf_work_size).
    pub fn dsytrf(
        &self,
        uplo: Uplo,
        n: usize,
        a: &mut [f64],
        ipiv: &mut [i32],
        work: &mut [f64],
    ) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let lwork = work.len() as i32;
        check(
            "dsytrf",
            self.driver()
                .dsytrf(uplo.token(), n as i32, a, lda, ipiv, work, lwork),
        )
    }

    /// Complex symmetric Bunch-Kaufman factorization.
    pub fn zsytrf(
        &self,
        uplo: Uplo,
        n: usize,
        a: &mut [Complex<f64>],
        ipiv: &mut [i32],
        work: &mut [Complex<f64>],
    ) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let lwork = work.len() as i32;
        check(
            "zsytrf",
            self.driver()
                .zsytrf(uplo.token(), n as i32, a, lda, ipiv, work, lwork),
        )
    }

    /// Hermitian Bunch-Kaufman factorization.
    pub fn zhetrf(
        &self,
        uplo: Uplo,
        n: usize,
        a: &mut [Complex<f64>],
        ipiv: &mut [i32],
        work: &mut [Complex<f64>],
    ) -> Result<()> {
        let lda = leading_dim(n) as i32;
        let lwork = work.len() as i32;
        check(
            "zhetrf",
            self.driver()
                .zhetrf(uplo.token(), n as i32, a, lda, ipiv, work, lwork),
        )
    }

    /// Bunch-Kaufman factorization in packed storage. No workspace needed.
    pub fn dsptrf(&self, uplo: Uplo, n: usize, ap: &mut [f64], ipiv: &mut [i32]) -> Result<()> {
        check("dsptrf", self.driver().dsptrf(uplo.token(), n as i32, ap, ipiv))
    }

    /// Complex symmetric packed Bunch-Kaufman factorization.
    pub fn zsptrf(
        &self,
        uplo: Uplo,
        n: usize,
        ap: &mut [Complex<f64>],
        ipiv: &mut [i32],
    ) -> Result<()> {
        check("zsptrf", self.driver().zsptrf(uplo.token(), n as i32, ap, ipiv))
    }

    /// Hermitian packed Bunch-Kaufman factorization.
    pub fn zhptrf(
        &self,
        uplo: Uplo,
        n: usize,
        ap: &mut [Complex<f64>],
        ipiv: &mut [i32],
    ) -> Result<()> {
        check("zhptrf", self.driver().zhptrf(uplo.token(), n as i32, ap, ipiv))
    }
}
