//! Driver traits — the native routine boundary.
//!
//! One trait per operation group, with the raw LAPACK argument shapes:
//! single-byte option tokens, `i32` dimensions and strides, `i32` status
//! returns, and buffers that the callee mutates in place. Encoding of
//! structural enums and derivation of strides happen above this boundary in
//! the dispatch layer; nothing below it validates buffer lengths.
//!
//! [`NativeLapack`] implements the traits over the Fortran symbols declared
//! in `laprus_core::lapack_ffi` and is the only code touching raw foreign
//! memory. Test drivers implement them in safe Rust.

use num_complex::Complex;

/// Matrix norm routines. These are Fortran functions: they return the norm
/// value directly and have no status channel.
pub trait NormRoutines {
    /// Norm of a general dense m x n matrix.
    fn dlange(&self, norm: u8, m: i32, n: i32, a: &[f64], lda: i32, work: &mut [f64]) -> f64;
    /// Norm of a general dense complex m x n matrix.
    fn zlange(&self, norm: u8, m: i32, n: i32, a: &[Complex<f64>], lda: i32, work: &mut [f64])
        -> f64;

    /// Norm of a symmetric matrix in packed storage.
    fn dlansp(&self, norm: u8, uplo: u8, n: i32, ap: &[f64], work: &mut [f64]) -> f64;
    /// Norm of a Hermitian matrix in packed storage.
    fn zlanhp(&self, norm: u8, uplo: u8, n: i32, ap: &[Complex<f64>], work: &mut [f64]) -> f64;

    /// Norm of a general band matrix with kl sub- and ku super-diagonals.
    fn dlangb(
        &self,
        norm: u8,
        n: i32,
        kl: i32,
        ku: i32,
        ab: &[f64],
        ldab: i32,
        work: &mut [f64],
    ) -> f64;
    /// Norm of a general complex band matrix.
    fn zlangb(
        &self,
        norm: u8,
        n: i32,
        kl: i32,
        ku: i32,
        ab: &[Complex<f64>],
        ldab: i32,
        work: &mut [f64],
    ) -> f64;
}

/// Factorization routines. Each returns the raw `info` status.
pub trait FactorRoutines {
    /// LU factorization of a general dense m x n matrix, partial pivoting.
    fn dgetrf(&self, m: i32, n: i32, a: &mut [f64], lda: i32, ipiv: &mut [i32]) -> i32;
    fn zgetrf(&self, m: i32, n: i32, a: &mut [Complex<f64>], lda: i32, ipiv: &mut [i32]) -> i32;

    /// LU factorization of a general band matrix.
    fn dgbtrf(
        &self,
        m: i32,
        n: i32,
        kl: i32,
        ku: i32,
        ab: &mut [f64],
        ldab: i32,
        ipiv: &mut [i32],
    ) -> i32;
    fn zgbtrf(
        &self,
        m: i32,
        n: i32,
        kl: i32,
        ku: i32,
        ab: &mut [Complex<f64>],
        ldab: i32,
        ipiv: &mut [i32],
    ) -> i32;

    /// LU factorization of a general tridiagonal matrix.
    fn dgttrf(
        &self,
        n: i32,
        dl: &mut [f64],
        d: &mut [f64],
        du: &mut [f64],
        du2: &mut [f64],
        ipiv: &mut [i32],
    ) -> i32;
    fn zgttrf(
        &self,
        n: i32,
        dl: &mut [Complex<f64>],
        d: &mut [Complex<f64>],
        du: &mut [Complex<f64>],
        du2: &mut [Complex<f64>],
        ipiv: &mut [i32],
    ) -> i32;

    /// Cholesky factorization of a positive-definite dense matrix.
    fn dpotrf(&self, uplo: u8, n: i32, a: &mut [f64], lda: i32) -> i32;
    fn zpotrf(&self, uplo: u8, n: i32, a: &mut [Complex<f64>], lda: i32) -> i32;

    /// Cholesky factorization in packed storage.
    fn dpptrf(&self, uplo: u8, n: i32, ap: &mut [f64]) -> i32;
    fn zpptrf(&self, uplo: u8, n: i32, ap: &mut [Complex<f64>]) -> i32;

    /// Cholesky factorization of a band matrix with kd off-diagonals.
    fn dpbtrf(&self, uplo: u8, n: i32, kd: i32, ab: &mut [f64], ldab: i32) -> i32;
    fn zpbtrf(&self, uplo: u8, n: i32, kd: i32, ab: &mut [Complex<f64>], ldab: i32) -> i32;

    /// Cholesky factorization of a positive-definite tridiagonal matrix.
    fn dpttrf(&self, n: i32, d: &mut [f64], e: &mut [f64]) -> i32;
    fn zpttrf(&self, n: i32, d: &mut [f64], e: &mut [Complex<f64>]) -> i32;

    /// Cholesky factorization in rectangular-full-packed storage.
    fn dpftrf(&self, transr: u8, uplo: u8, n: i32, a: &mut [f64]) -> i32;
    fn zpftrf(&self, transr: u8, uplo: u8, n: i32, a: &mut [Complex<f64>]) -> i32;

    /// Bunch-Kaufman factorization of an indefinite symmetric dense matrix.
    /// `lwork = -1` is the workspace query: the recommended length is written
    /// to `work[0]` and the matrix is not referenced.
    fn dsytrf(
        &self,
        uplo: u8,
        n: i32,
        a: &mut [f64],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [f64],
        lwork: i32,
    ) -> i32;
    fn zsytrf(
        &self,
        uplo: u8,
        n: i32,
        a: &mut [Complex<f64>],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [Complex<f64>],
        lwork: i32,
    ) -> i32;
    /// Hermitian variant of the Bunch-Kaufman factorization.
    fn zhetrf(
        &self,
        uplo: u8,
        n: i32,
        a: &mut [Complex<f64>],
        lda: i32,
        ipiv: &mut [i32],
        work: &mut [Complex<f64>],
        lwork: i32,
    ) -> i32;

    /// Bunch-Kaufman factorization in packed storage.
    fn dsptrf(&self, uplo: u8, n: i32, ap: &mut [f64], ipiv: &mut [i32]) -> i32;
    fn zsptrf(&self, uplo: u8, n: i32, ap: &mut [Complex<f64>], ipiv: &mut [i32]) -> i32;
    /// Hermitian variant of the packed Bunch-Kaufman factorization.
    fn zhptrf(&self, uplo: u8, n: i32, ap: &mut [Complex<f64>], ipiv: &mut [i32]) -> i32;
}

/// Solve routines over previously computed factors.
pub trait SolveRoutines {
    /// Solve A * X = B (or transposed) from `dgetrf` factors.
    fn dgetrs(
        &self,
        trans: u8,
        n: i32,
        nrhs: i32,
        a: &[f64],
        lda: i32,
        ipiv: &[i32],
        b: &mut [f64],
        ldb: i32,
    ) -> i32;
    fn zgetrs(
        &self,
        trans: u8,
        n: i32,
        nrhs: i32,
        a: &[Complex<f64>],
        lda: i32,
        ipiv: &[i32],
        b: &mut [Complex<f64>],
        ldb: i32,
    ) -> i32;

    /// Solve A * X = B from `dpotrf` factors.
    fn dpotrs(
        &self,
        uplo: u8,
        n: i32,
        nrhs: i32,
        a: &[f64],
        lda: i32,
        b: &mut [f64],
        ldb: i32,
    ) -> i32;
    fn zpotrs(
        &self,
        uplo: u8,
        n: i32,
        nrhs: i32,
        a: &[Complex<f64>],
        lda: i32,
        b: &mut [Complex<f64>],
        ldb: i32,
    ) -> i32;
}

/// Adapter over the system LAPACK.
///
/// Buffers cross the boundary as raw pointers; an empty slice stands in for
/// a matrix that the native contract does not reference (workspace queries).
/// The callee mutates in place without bounds checking, so buffer lengths
/// must satisfy the storage contracts documented on the dispatch methods.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLapack;

#[cfg(feature = "native")]
mod native {
    use super::*;
    use laprus_core::lapack_ffi as ffi;

    impl NormRoutines for NativeLapack {
        fn dlange(&self, norm: u8, m: i32, n: i32, a: &[f64], lda: i32, work: &mut [f64]) -> f64 {
            unsafe { ffi::dlange_(&norm, &m, &n, a.as_ptr(), &lda, work.as_mut_ptr()) }
        }

        fn zlange(
            &self,
            norm: u8,
            m: i32,
            n: i32,
            a: &[Complex<f64>],
            lda: i32,
            work: &mut [f64],
        ) -> f64 {
            unsafe { ffi::zlange_(&norm, &m, &n, a.as_ptr(), &lda, work.as_mut_ptr()) }
        }

        fn dlansp(&self, norm: u8, uplo: u8, n: i32, ap: &[f64], work: &mut [f64]) -> f64 {
            unsafe { ffi::dlansp_(&norm, &uplo, &n, ap.as_ptr(), work.as_mut_ptr()) }
        }

        fn zlanhp(
            &self,
            norm: u8,
            uplo: u8,
            n: i32,
            ap: &[Complex<f64>],
            work: &mut [f64],
        ) -> f64 {
            unsafe { ffi::zlanhp_(&norm, &uplo, &n, ap.as_ptr(), work.as_mut_ptr()) }
        }

        fn dlangb(
            &self,
            norm: u8,
            n: i32,
            kl: i32,
            ku: i32,
            ab: &[f64],
            ldab: i32,
            work: &mut [f64],
        ) -> f64 {
            unsafe { ffi::dlangb_(&norm, &n, &kl, &ku, ab.as_ptr(), &ldab, work.as_mut_ptr()) }
        }

        fn zlangb(
            &self,
            norm: u8,
            n: i32,
            kl: i32,
            ku: i32,
            ab: &[Complex<f64>],
            ldab: i32,
            work: &mut [f64],
        ) -> f64 {
            unsafe { ffi::zlangb_(&norm, &n, &kl, &ku, ab.as_ptr(), &ldab, work.as_mut_ptr()) }
        }
    }

    impl FactorRoutines for NativeLapack {
        fn dgetrf(&self, m: i32, n: i32, a: &mut [f64], lda: i32, ipiv: &mut [i32]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dgetrf_(&m, &n, a.as_mut_ptr(), &lda, ipiv.as_mut_ptr(), &mut info);
            }
            info
        }

        fn zgetrf(
            &self,
            m: i32,
            n: i32,
            a: &mut [Complex<f64>],
            lda: i32,
            ipiv: &mut [i32],
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zgetrf_(&m, &n, a.as_mut_ptr(), &lda, ipiv.as_mut_ptr(), &mut info);
            }
            info
        }

        fn dgbtrf(
            &self,
            m: i32,
            n: i32,
            kl: i32,
            ku: i32,
            ab: &mut [f64],
            ldab: i32,
            ipiv: &mut [i32],
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dgbtrf_(
                    &m,
                    &n,
                    &kl,
                    &ku,
                    ab.as_mut_ptr(),
                    &ldab,
                    ipiv.as_mut_ptr(),
                    &mut info,
                );
            }
            info
        }

        fn zgbtrf(
            &self,
            m: i32,
            n: i32,
            kl: i32,
            ku: i32,
            ab: &mut [Complex<f64>],
            ldab: i32,
            ipiv: &mut [i32],
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zgbtrf_(
                    &m,
                    &n,
                    &kl,
                    &ku,
                    ab.as_mut_ptr(),
                    &ldab,
                    ipiv.as_mut_ptr(),
                    &mut info,
                );
            }
            info
        }

        fn dgttrf(
            &self,
            n: i32,
            dl: &mut [f64],
            d: &mut [f64],
            du: &mut [f64],
            du2: &mut [f64],
            ipiv: &mut [i32],
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dgttrf_(
                    &n,
                    dl.as_mut_ptr(),
                    d.as_mut_ptr(),
                    du.as_mut_ptr(),
                    du2.as_mut_ptr(),
                    ipiv.as_mut_ptr(),
                    &mut info,
                );
            }
            info
        }

        fn zgttrf(
            &self,
            n: i32,
            dl: &mut [Complex<f64>],
            d: &mut [Complex<f64>],
            du: &mut [Complex<f64>],
            du2: &mut [Complex<f64>],
            ipiv: &mut [i32],
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zgttrf_(
                    &n,
                    dl.as_mut_ptr(),
                    d.as_mut_ptr(),
                    du.as_mut_ptr(),
                    du2.as_mut_ptr(),
                    ipiv.as_mut_ptr(),
                    &mut info,
                );
            }
            info
        }

        fn dpotrf(&self, uplo: u8, n: i32, a: &mut [f64], lda: i32) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dpotrf_(&uplo, &n, a.as_mut_ptr(), &lda, &mut info);
            }
            info
        }

        fn zpotrf(&self, uplo: u8, n: i32, a: &mut [Complex<f64>], lda: i32) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zpotrf_(&uplo, &n, a.as_mut_ptr(), &lda, &mut info);
            }
            info
        }

        fn dpptrf(&self, uplo: u8, n: i32, ap: &mut [f64]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dpptrf_(&uplo, &n, ap.as_mut_ptr(), &mut info);
            }
            info
        }

        fn zpptrf(&self, uplo: u8, n: i32, ap: &mut [Complex<f64>]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zpptrf_(&uplo, &n, ap.as_mut_ptr(), &mut info);
            }
            info
        }

        fn dpbtrf(&self, uplo: u8, n: i32, kd: i32, ab: &mut [f64], ldab: i32) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dpbtrf_(&uplo, &n, &kd, ab.as_mut_ptr(), &ldab, &mut info);
            }
            info
        }

        fn zpbtrf(&self, uplo: u8, n: i32, kd: i32, ab: &mut [Complex<f64>], ldab: i32) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zpbtrf_(&uplo, &n, &kd, ab.as_mut_ptr(), &ldab, &mut info);
            }
            info
        }

        fn dpttrf(&self, n: i32, d: &mut [f64], e: &mut [f64]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dpttrf_(&n, d.as_mut_ptr(), e.as_mut_ptr(), &mut info);
            }
            info
        }

        fn zpttrf(&self, n: i32, d: &mut [f64], e: &mut [Complex<f64>]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zpttrf_(&n, d.as_mut_ptr(), e.as_mut_ptr(), &mut info);
            }
            info
        }

        fn dpftrf(&self, transr: u8, uplo: u8, n: i32, a: &mut [f64]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dpftrf_(&transr, &uplo, &n, a.as_mut_ptr(), &mut info);
            }
            info
        }

        fn zpftrf(&self, transr: u8, uplo: u8, n: i32, a: &mut [Complex<f64>]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zpftrf_(&transr, &uplo, &n, a.as_mut_ptr(), &mut info);
            }
            info
        }

        fn dsytrf(
            &self,
            uplo: u8,
            n: i32,
            a: &mut [f64],
            lda: i32,
            ipiv: &mut [i32],
            work: &mut [f64],
            lwork: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dsytrf_(
                    &uplo,
                    &n,
                    a.as_mut_ptr(),
                    &lda,
                    ipiv.as_mut_ptr(),
                    work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
            }
            info
        }

        fn zsytrf(
            &self,
            uplo: u8,
            n: i32,
            a: &mut [Complex<f64>],
            lda: i32,
            ipiv: &mut [i32],
            work: &mut [Complex<f64>],
            lwork: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zsytrf_(
                    &uplo,
                    &n,
                    a.as_mut_ptr(),
                    &lda,
                    ipiv.as_mut_ptr(),
                    work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
            }
            info
        }

        fn zhetrf(
            &self,
            uplo: u8,
            n: i32,
            a: &mut [Complex<f64>],
            lda: i32,
            ipiv: &mut [i32],
            work: &mut [Complex<f64>],
            lwork: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zhetrf_(
                    &uplo,
                    &n,
                    a.as_mut_ptr(),
                    &lda,
                    ipiv.as_mut_ptr(),
                    work.as_mut_ptr(),
                    &lwork,
                    &mut info,
                );
            }
            info
        }

        fn dsptrf(&self, uplo: u8, n: i32, ap: &mut [f64], ipiv: &mut [i32]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dsptrf_(&uplo, &n, ap.as_mut_ptr(), ipiv.as_mut_ptr(), &mut info);
            }
            info
        }

        fn zsptrf(&self, uplo: u8, n: i32, ap: &mut [Complex<f64>], ipiv: &mut [i32]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zsptrf_(&uplo, &n, ap.as_mut_ptr(), ipiv.as_mut_ptr(), &mut info);
            }
            info
        }

        fn zhptrf(&self, uplo: u8, n: i32, ap: &mut [Complex<f64>], ipiv: &mut [i32]) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zhptrf_(&uplo, &n, ap.as_mut_ptr(), ipiv.as_mut_ptr(), &mut info);
            }
            info
        }
    }

    impl SolveRoutines for NativeLapack {
        fn dgetrs(
            &self,
            trans: u8,
            n: i32,
            nrhs: i32,
            a: &[f64],
            lda: i32,
            ipiv: &[i32],
            b: &mut [f64],
            ldb: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dgetrs_(
                    &trans,
                    &n,
                    &nrhs,
                    a.as_ptr(),
                    &lda,
                    ipiv.as_ptr(),
                    b.as_mut_ptr(),
                    &ldb,
                    &mut info,
                );
            }
            info
        }

        fn zgetrs(
            &self,
            trans: u8,
            n: i32,
            nrhs: i32,
            a: &[Complex<f64>],
            lda: i32,
            ipiv: &[i32],
            b: &mut [Complex<f64>],
            ldb: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zgetrs_(
                    &trans,
                    &n,
                    &nrhs,
                    a.as_ptr(),
                    &lda,
                    ipiv.as_ptr(),
                    b.as_mut_ptr(),
                    &ldb,
                    &mut info,
                );
            }
            info
        }

        fn dpotrs(
            &self,
            uplo: u8,
            n: i32,
            nrhs: i32,
            a: &[f64],
            lda: i32,
            b: &mut [f64],
            ldb: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::dpotrs_(
                    &uplo,
                    &n,
                    &nrhs,
                    a.as_ptr(),
                    &lda,
                    b.as_mut_ptr(),
                    &ldb,
                    &mut info,
                );
            }
            info
        }

        fn zpotrs(
            &self,
            uplo: u8,
            n: i32,
            nrhs: i32,
            a: &[Complex<f64>],
            lda: i32,
            b: &mut [Complex<f64>],
            ldb: i32,
        ) -> i32 {
            let mut info = 0;
            unsafe {
                ffi::zpotrs_(
                    &uplo,
                    &n,
                    &nrhs,
                    a.as_ptr(),
                    &lda,
                    b.as_mut_ptr(),
                    &ldb,
                    &mut info,
                );
            }
            info
        }
    }
}
