//! Raw FFI declarations for the native LAPACK library.
//!
//! These map 1:1 to the reference Fortran interfaces: every scalar is passed
//! by reference, character options are single-byte tokens, and each
//! factorization reports through a by-reference `info` scalar. The norm
//! routines are Fortran functions and return their value directly.
//! All functions are unsafe — the safe marshalling lives in `laprus-lapack`.
//!
//! Convention: symbols carry the trailing underscore of the Fortran ABI.
//! Which binary provides them (reference LAPACK, OpenBLAS, MKL, Accelerate)
//! is decided by the platform link configuration, not by this crate.
//! `Complex<f64>` has the Fortran `COMPLEX*16` layout (two adjacent f64).

use num_complex::Complex;
use std::os::raw::{c_double, c_int};

// ═══════════════════════════════════════════════════════════════
// Matrix norms
// ═══════════════════════════════════════════════════════════════

extern "C" {
    pub fn dlange_(
        norm: *const u8,
        m: *const c_int,
        n: *const c_int,
        a: *const c_double,
        lda: *const c_int,
        work: *mut c_double,
    ) -> c_double;
    pub fn zlange_(
        norm: *const u8,
        m: *const c_int,
        n: *const c_int,
        a: *const Complex<f64>,
        lda: *const c_int,
        work: *mut c_double,
    ) -> c_double;

    pub fn dlansp_(
        norm: *const u8,
        uplo: *const u8,
        n: *const c_int,
        ap: *const c_double,
        work: *mut c_double,
    ) -> c_double;
    pub fn zlanhp_(
        norm: *const u8,
        uplo: *const u8,
        n: *const c_int,
        ap: *const Complex<f64>,
        work: *mut c_double,
    ) -> c_double;

    pub fn dlangb_(
        norm: *const u8,
        n: *const c_int,
        kl: *const c_int,
        ku: *const c_int,
        ab: *const c_double,
        ldab: *const c_int,
        work: *mut c_double,
    ) -> c_double;
    pub fn zlangb_(
        norm: *const u8,
        n: *const c_int,
        kl: *const c_int,
        ku: *const c_int,
        ab: *const Complex<f64>,
        ldab: *const c_int,
        work: *mut c_double,
    ) -> c_double;
}

// ═══════════════════════════════════════════════════════════════
// LU factorization — general dense, band, tridiagonal
// ═══════════════════════════════════════════════════════════════

extern "C" {
    pub fn dgetrf_(
        m: *const c_int,
        n: *const c_int,
        a: *mut c_double,
        lda: *const c_int,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
    pub fn zgetrf_(
        m: *const c_int,
        n: *const c_int,
        a: *mut Complex<f64>,
        lda: *const c_int,
        ipiv: *mut c_int,
        info: *mut c_int,
    );

    pub fn dgbtrf_(
        m: *const c_int,
        n: *const c_int,
        kl: *const c_int,
        ku: *const c_int,
        ab: *mut c_double,
        ldab: *const c_int,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
    pub fn zgbtrf_(
        m: *const c_int,
        n: *const c_int,
        kl: *const c_int,
        ku: *const c_int,
        ab: *mut Complex<f64>,
        ldab: *const c_int,
        ipiv: *mut c_int,
        info: *mut c_int,
    );

    pub fn dgttrf_(
        n: *const c_int,
        dl: *mut c_double,
        d: *mut c_double,
        du: *mut c_double,
        du2: *mut c_double,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
    pub fn zgttrf_(
        n: *const c_int,
        dl: *mut Complex<f64>,
        d: *mut Complex<f64>,
        du: *mut Complex<f64>,
        du2: *mut Complex<f64>,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
}

// ═══════════════════════════════════════════════════════════════
// Cholesky factorization — dense, packed, band, tridiagonal, RFP
// ═══════════════════════════════════════════════════════════════

extern "C" {
    pub fn dpotrf_(
        uplo: *const u8,
        n: *const c_int,
        a: *mut c_double,
        lda: *const c_int,
        info: *mut c_int,
    );
    pub fn zpotrf_(
        uplo: *const u8,
        n: *const c_int,
        a: *mut Complex<f64>,
        lda: *const c_int,
        info: *mut c_int,
    );

    pub fn dpptrf_(uplo: *const u8, n: *const c_int, ap: *mut c_double, info: *mut c_int);
    pub fn zpptrf_(uplo: *const u8, n: *const c_int, ap: *mut Complex<f64>, info: *mut c_int);

    pub fn dpbtrf_(
        uplo: *const u8,
        n: *const c_int,
        kd: *const c_int,
        ab: *mut c_double,
        ldab: *const c_int,
        info: *mut c_int,
    );
    pub fn zpbtrf_(
        uplo: *const u8,
        n: *const c_int,
        kd: *const c_int,
        ab: *mut Complex<f64>,
        ldab: *const c_int,
        info: *mut c_int,
    );

    pub fn dpttrf_(n: *const c_int, d: *mut c_double, e: *mut c_double, info: *mut c_int);
    pub fn zpttrf_(n: *const c_int, d: *mut c_double, e: *mut Complex<f64>, info: *mut c_int);

    pub fn dpftrf_(
        transr: *const u8,
        uplo: *const u8,
        n: *const c_int,
        a: *mut c_double,
        info: *mut c_int,
    );
    pub fn zpftrf_(
        transr: *const u8,
        uplo: *const u8,
        n: *const c_int,
        a: *mut Complex<f64>,
        info: *mut c_int,
    );
}

// ═══════════════════════════════════════════════════════════════
// Bunch-Kaufman factorization — indefinite dense and packed
// ═══════════════════════════════════════════════════════════════

extern "C" {
    pub fn dsytrf_(
        uplo: *const u8,
        n: *const c_int,
        a: *mut c_double,
        lda: *const c_int,
        ipiv: *mut c_int,
        work: *mut c_double,
        lwork: *const c_int,
        info: *mut c_int,
    );
    pub fn zsytrf_(
        uplo: *const u8,
        n: *const c_int,
        a: *mut Complex<f64>,
        lda: *const c_int,
        ipiv: *mut c_int,
        work: *mut Complex<f64>,
        lwork: *const c_int,
        info: *mut c_int,
    );
    pub fn zhetrf_(
        uplo: *const u8,
        n: *const c_int,
        a: *mut Complex<f64>,
        lda: *const c_int,
        ipiv: *mut c_int,
        work: *mut Complex<f64>,
        lwork: *const c_int,
        info: *mut c_int,
    );

    pub fn dsptrf_(
        uplo: *const u8,
        n: *const c_int,
        ap: *mut c_double,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
    pub fn zsptrf_(
        uplo: *const u8,
        n: *const c_int,
        ap: *mut Complex<f64>,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
    pub fn zhptrf_(
        uplo: *const u8,
        n: *const c_int,
        ap: *mut Complex<f64>,
        ipiv: *mut c_int,
        info: *mut c_int,
    );
}

// ═══════════════════════════════════════════════════════════════
// Solves using computed factors
// ═══════════════════════════════════════════════════════════════

extern "C" {
    pub fn dgetrs_(
        trans: *const u8,
        n: *const c_int,
        nrhs: *const c_int,
        a: *const c_double,
        lda: *const c_int,
        ipiv: *const c_int,
        b: *mut c_double,
        ldb: *const c_int,
        info: *mut c_int,
    );
    pub fn zgetrs_(
        trans: *const u8,
        n: *const c_int,
        nrhs: *const c_int,
        a: *const Complex<f64>,
        lda: *const c_int,
        ipiv: *const c_int,
        b: *mut Complex<f64>,
        ldb: *const c_int,
        info: *mut c_int,
    );

    pub fn dpotrs_(
        uplo: *const u8,
        n: *const c_int,
        nrhs: *const c_int,
        a: *const c_double,
        lda: *const c_int,
        b: *mut c_double,
        ldb: *const c_int,
        info: *mut c_int,
    );
    pub fn zpotrs_(
        uplo: *const u8,
        n: *const c_int,
        nrhs: *const c_int,
        a: *const Complex<f64>,
        lda: *const c_int,
        b: *mut Complex<f64>,
        ldb: *const c_int,
        info: *mut c_int,
    );
}
