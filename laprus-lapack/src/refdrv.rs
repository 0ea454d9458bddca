//! Reference driver for the dispatch tests.
//!
//! Implements the driver traits in safe Rust: unblocked textbook kernels
//! where the tests check numeric output (dense norms, dense LU and solve,
//! dense Cholesky and solve, Bunch-Kaufman with workspace query), and call
//! recording with a scriptable status everywhere else. Every call is
//! recorded with the tokens and dimensions it received, so the tests can
//! assert what the dispatch layer derived.

use crate::driver::{FactorRoutines, NormRoutines, SolveRoutines};
use num_complex::Complex;
use std::cell::{Cell, RefCell};

/// Workspace blocking factor reported by the query paths: a query for an
/// n x n factorization answers n * QUERY_BLOCK.
pub const QUERY_BLOCK: usize = 64;

/// One recorded driver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub routine: &'static str,
    pub tokens: Vec<u8>,
    pub dims: Vec<i32>,
}

/// Safe in-process stand-in for the native library.
#[derive(Default)]
pub struct RefDriver {
    pub calls: RefCell<Vec<Call>>,
    /// Status returned by routines without a reference kernel; also
    /// overrides the kernels when non-zero.
    pub scripted_info: Cell<i32>,
}

impl RefDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_call(&self) -> Call {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("no driver call recorded")
    }

    fn record(&self, routine: &'static str, tokens: &[u8], dims: &[i32]) {
        self.calls.borrow_mut().push(Call {
            routine,
            tokens: tokens.to_vec(),
            dims: dims.to_vec(),
        });
    }
}

// ============================================================================
// Reference kernels — column-major, unblocked
// ============================================================================

fn dense_norm_f64(norm: u8, m: usize, n: usize, a: &[f64], lda: usize) -> f64 {
    if m == 0 || n == 0 {
        return 0.0;
    }
    match norm {
        b'1' | b'O' => (0..n)
            .map(|j| (0..m).map(|i| a[j * lda + i].abs()).sum())
            .fold(0.0, f64::max),
        b'I' => (0..m)
            .map(|i| (0..n).map(|j| a[j * lda + i].abs()).sum())
            .fold(0.0, f64::max),
        b'F' => (0..n)
            .flat_map(|j| (0..m).map(move |i| (i, j)))
            .map(|(i, j)| a[j * lda + i] * a[j * lda + i])
            .sum::<f64>()
            .sqrt(),
        _ => (0..n)
            .flat_map(|j| (0..m).map(move |i| (i, j)))
            .map(|(i, j)| a[j * lda + i].abs())
            .fold(0.0, f64::max),
    }
}

fn dense_norm_z(norm: u8, m: usize, n: usize, a: &[Complex<f64>], lda: usize) -> f64 {
    if m == 0 || n == 0 {
        return 0.0;
    }
    match norm {
        b'1' | b'O' => (0..n)
            .map(|j| (0..m).map(|i| a[j * lda + i].norm()).sum())
            .fold(0.0, f64::max),
        b'I' => (0..m)
            .map(|i| (0..n).map(|j| a[j * lda + i].norm()).sum())
            .fold(0.0, f64::max),
        b'F' => (0..n)
            .flat_map(|j| (0..m).map(move |i| (i, j)))
            .map(|(i, j)| a[j * lda + i].norm_sqr())
            .sum::<f64>()
            .sqrt(),
        _ => (0..n)
            .flat_map(|j| (0..m).map(move |i| (i, j)))
            .map(|(i, j)| a[j * lda + i].norm())
            .fold(0.0, f64::max),
    }
}

/// Stored (row, column, modulus) triples of one packed triangle.
fn packed_entries(uplo: u8, n: usize, moduli: &[f64]) -> Vec<(usize, usize, f64)> {
    let mut out = Vec::with_capacity(moduli.len());
    let mut k = 0;
    if uplo == b'U' {
        for j in 0..n {
            for i in 0..=j {
                out.push((i, j, moduli[k]));
                k += 1;
            }
        }
    } else {
        for j in 0..n {
            for i in j..n {
                out.push((i, j, moduli[k]));
                k += 1;
            }
        }
    }
    out
}

fn packed_norm(norm: u8, uplo: u8, n: usize, moduli: &[f64]) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let mut colsum = vec![0.0f64; n];
    let mut frob = 0.0;
    let mut maxabs = 0.0f64;
    for (i, j, av) in packed_entries(uplo, n, moduli) {
        maxabs = maxabs.max(av);
        colsum[j] += av;
        if i != j {
            colsum[i] += av;
            frob += 2.0 * av * av;
        } else {
            frob += av * av;
        }
    }
    match norm {
        b'1' | b'O' | b'I' => colsum.into_iter().fold(0.0, f64::max),
        b'F' => frob.sqrt(),
        _ => maxabs,
    }
}

fn getrf_f64(m: usize, n: usize, a: &mut [f64], lda: usize, ipiv: &mut [i32]) -> i32 {
    let min_mn = m.min(n);
    for k in 0..min_mn {
        let mut max_val = 0.0f64;
        let mut max_idx = k;
        for i in k..m {
            let v = a[k * lda + i].abs();
            if v > max_val {
                max_val = v;
                max_idx = i;
            }
        }
        ipiv[k] = (max_idx + 1) as i32;
        if max_val == 0.0 {
            return (k + 1) as i32;
        }
        if max_idx != k {
            for j in 0..n {
                a.swap(j * lda + k, j * lda + max_idx);
            }
        }
        let inv = 1.0 / a[k * lda + k];
        for i in (k + 1)..m {
            a[k * lda + i] *= inv;
        }
        for j in (k + 1)..n {
            let ukj = a[j * lda + k];
            if ukj == 0.0 {
                continue;
            }
            for i in (k + 1)..m {
                a[j * lda + i] -= a[k * lda + i] * ukj;
            }
        }
    }
    0
}

fn getrs_f64(n: usize, nrhs: usize, a: &[f64], lda: usize, ipiv: &[i32], b: &mut [f64], ldb: usize) {
    for k in 0..n {
        let p = (ipiv[k] - 1) as usize;
        if p != k {
            for j in 0..nrhs {
                b.swap(j * ldb + k, j * ldb + p);
            }
        }
    }
    for j in 0..nrhs {
        for k in 0..n {
            let bkj = b[j * ldb + k];
            if bkj == 0.0 {
                continue;
            }
            for i in (k + 1)..n {
                b[j * ldb + i] -= a[k * lda + i] * bkj;
            }
        }
        for k in (0..n).rev() {
            b[j * ldb + k] /= a[k * lda + k];
            let bkj = b[j * ldb + k];
            for i in 0..k {
                b[j * ldb + i] -= a[k * lda + i] * bkj;
            }
        }
    }
}

fn potrf_f64(uplo: u8, n: usize, a: &mut [f64], lda: usize) -> i32 {
    if uplo == b'U' {
        for j in 0..n {
            let mut sum = a[j * lda + j];
            for k in 0..j {
                let u = a[j * lda + k];
                sum -= u * u;
            }
            if sum <= 0.0 {
                return (j + 1) as i32;
            }
            let ujj = sum.sqrt();
            a[j * lda + j] = ujj;
            for i in (j + 1)..n {
                let mut s = a[i * lda + j];
                for k in 0..j {
                    s -= a[i * lda + k] * a[j * lda + k];
                }
                a[i * lda + j] = s / ujj;
            }
        }
    } else {
        for j in 0..n {
            let mut sum = a[j * lda + j];
            for k in 0..j {
                let l = a[k * lda + j];
                sum -= l * l;
            }
            if sum <= 0.0 {
                return (j + 1) as i32;
            }
            let ljj = sum.sqrt();
            a[j * lda + j] = ljj;
            for i in (j + 1)..n {
                let mut s = a[j * lda + i];
                for k in 0..j {
                    s -= a[k * lda + i] * a[k * lda + j];
                }
                a[j * lda + i] = s / ljj;
            }
        }
    }
    0
}

fn potrs_lower_f64(
    n: usize,
    nrhs: usize,
    a: &[f64],
    lda: usize,
    b: &mut [f64],
    ldb: usize,
) {
    for j in 0..nrhs {
        for k in 0..n {
            let mut s = b[j * ldb + k];
            for i in 0..k {
                s -= a[i * lda + k] * b[j * ldb + i];
            }
            b[j * ldb + k] = s / a[k * lda + k];
        }
        for k in (0..n).rev() {
            let mut s = b[j * ldb + k];
            for i in (k + 1)..n {
                s -= a[k * lda + i] * b[j * ldb + i];
            }
            b[j * ldb + k] = s / a[k * lda + k];
        }
    }
}

/// Unpivoted LDL^T on the lower triangle. Good enough for the
/// diagonally-dominant matrices the tests use.
fn sytrf_lower_f64(n: usize, a: &mut [f64], lda: usize, ipiv: &mut [i32]) -> i32 {
    for (k, p) in ipiv.iter_mut().enumerate().take(n) {
        *p = (k + 1) as i32;
    }
    for k in 0..n {
        let d = a[k * lda + k];
        if d == 0.0 {
            return (k + 1) as i32;
        }
        for i in (k + 1)..n {
            let lik = a[k * lda + i] / d;
            for j in (k + 1)..=i {
                a[j * lda + i] -= lik * a[k * lda + j];
            }
            a[k * lda + i] = lik;
        }
    }
    0
}

// ============================================================================
// Trait implementations
// ============================================================================

impl NormRoutines for RefDriver {
    fn dlange(&self, norm: u8, m: i32, n: i32, a: &[f64], lda: i32, _work: &mut [f64]) -> f64 {
        self.record("dlange", &[norm], &[m, n, lda]);
        dense_norm_f64(norm, m as usize, n as usize, a, lda as usize)
    }

    fn zlange(
        &self,
        norm: u8,
        m: i32,
        n: i32,
        a: &[Complex<f64>],
        lda: i32,
        _work: &mut [f64],
    ) -> f64 {
        self.record("zlange", &[norm], &[m, n, lda]);
        dense_norm_z(norm, m as usize, n as usize, a, lda as usize)
    }

    fn dlansp(&self, norm: u8, uplo: u8, n: i32, ap: &[f64], _work: &mut [f64]) -> f64 {
        self.record("dlansp", &[norm, uplo], &[n]);
        let moduli: Vec<f64> = ap.iter().map(|v| v.abs()).collect();
        packed_norm(norm, uplo, n as usize, &moduli)
    }

    fn zlanhp(&self, norm: u8, uplo: u8, n: i32, ap: &[Complex<f64>], _work: &mut [f64]) -> f64 {
        self.record("zlanhp", &[norm, uplo], &[n]);
        let moduli: Vec<f64> = ap.iter().map(|v| v.norm()).collect();
        packed_norm(norm, uplo, n as usize, &moduli)
    }

    fn dlangb(
        &self,
        norm: u8,
        n: i32,
        kl: i32,
        ku: i32,
        _ab: &[f64],
        ldab: i32,
        _work: &mut [f64],
    ) -> f64 {
        self.record("dlangb", &[norm], &[n, kl, ku, ldab]);
        0.0
    }

    fn zlangb(
        &self,
        norm: u8,
        n: i32,
        kl: i32,
        ku: i32,
        _ab: &[Complex<f64>],
        ldab: i32,
        _work: &mut [f64],
    ) -> f64 {
        self.record("zlangb", &[norm], &[n, kl, ku, ldab]);
        0.0
    }
}

impl FactorRoutines for RefDriver {
    fn dgetrf(&self, m: i32, n: i32, a: &mut [f64], lda: i32, ipiv: &mut [i32]) -> i32 {
        self.record("dgetrf", &[], &[m, n, lda]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        getrf_f64(m as usize, n as usize, a, lda as usize, ipiv)
    }

    fn zgetrf(
        &self,
        m: i32,
        n: i32,
        _a: &mut [Complex<f64>],
        lda: i32,
        _ipiv: &mut [i32],
    ) -> i32 {
        self.record("zgetrf", &[], &[m, n, lda]);
        self.scripted_info.get()
    }

    fn dgbtrf(
        &self,
        m: i32,
        n: i32,
        kl: i32,
        ku: i32,
        _ab: &mut [f64],
        ldab: i32,
        _ipiv: &mut [i32],
    ) -> i32 {
        self.record("dgbtrf", &[], &[m, n, kl, ku, ldab]);
        self.scripted_info.get()
    }

    fn zgbtrf(
        &self,
        m: i32,
        n: i32,
        kl: i32,
        ku: i32,
        _ab: &mut [Complex<f64>],
        ldab: i32,
        _ipiv: &mut [i32],
    ) -> i32 {
        self.record("zgbtrf", &[], &[m, n, kl, ku, ldab]);
        self.scripted_info.get()
    }

    fn dgttrf(
        &self,
        n: i32,
        _dl: &mut [f64],
        _d: &mut [f64],
        _du: &mut [f64],
        _du2: &mut [f64],
        _ipiv: &mut [i32],
    ) -> i32 {
        self.record("dgttrf", &[], &[n]);
        self.scripted_info.get()
    }

    fn zgttrf(
        &self,
        n: i32,
        _dl: &mut [Complex<f64>],
        _d: &mut [Complex<f64>],
        _du: &mut [Complex<f64>],
        _du2: &mut [Complex<f64>],
        _ipiv: &mut [i32],
    ) -> i32 {
        self.record("zgttrf", &[], &[n]);
        self.scripted_info.get()
    }

    fn dpotrf(&self, uplo: u8, n: i32, a: &mut [f64], lda: i32) -> i32 {
        self.record("dpotrf", &[uplo], &[n, lda]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        potrf_f64(uplo, n as usize, a, lda as usize)
    }

    fn zpotrf(&self, uplo: u8, n: i32, _a: &mut [Complex<f64>], lda: i32) -> i32 {
        self.record("zpotrf", &[uplo], &[n, lda]);
        self.scripted_info.get()
    }

    fn dpptrf(&self, uplo: u8, n: i32, _ap: &mut [f64]) -> i32 {
        self.record("dpptrf", &[uplo], &[n]);
        self.scripted_info.get()
    }

    fn zpptrf(&self, uplo: u8, n: i32, _ap: &mut [Complex<f64>]) -> i32 {
        self.record("zpptrf", &[uplo], &[n]);
        self.scripted_info.get()
    }

    fn dpbtrf(&self, uplo: u8, n: i32, kd: i32, _ab: &mut [f64], ldab: i32) -> i32 {
        self.record("dpbtrf", &[uplo], &[n, kd, ldab]);
        self.scripted_info.get()
    }

    fn zpbtrf(&self, uplo: u8, n: i32, kd: i32, _ab: &mut [Complex<f64>], ldab: i32) -> i32 {
        self.record("zpbtrf", &[uplo], &[n, kd, ldab]);
        self.scripted_info.get()
    }

    fn dpttrf(&self, n: i32, _d: &mut [f64], _e: &mut [f64]) -> i32 {
        self.record("dpttrf", &[], &[n]);
        self.scripted_info.get()
    }

    fn zpttrf(&self, n: i32, _d: &mut [f64], _e: &mut [Complex<f64>]) -> i32 {
        self.record("zpttrf", &[], &[n]);
        self.scripted_info.get()
    }

    fn dpftrf(&self, transr: u8, uplo: u8, n: i32, _a: &mut [f64]) -> i32 {
        self.record("dpftrf", &[transr, uplo], &[n]);
        self.scripted_info.get()
    }

    fn zpftrf(&self, transr: u8, uplo: u8, n: i32, _a: &mut [Complex<f64>]) -> i32 {
        self.record("zpftrf", &[transr, uplo], &[n]);
        self.scripted_info.get()
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
        self.record("dsytrf", &[uplo], &[n, lda, lwork]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        if lwork == -1 {
            work[0] = (n as usize * QUERY_BLOCK) as f64;
            return 0;
        }
        if uplo == b'L' {
            sytrf_lower_f64(n as usize, a, lda as usize, ipiv)
        } else {
            0
        }
    }

    fn zsytrf(
        &self,
        uplo: u8,
        n: i32,
        _a: &mut [Complex<f64>],
        lda: i32,
        _ipiv: &mut [i32],
        work: &mut [Complex<f64>],
        lwork: i32,
    ) -> i32 {
        self.record("zsytrf", &[uplo], &[n, lda, lwork]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        if lwork == -1 {
            // Junk imaginary component: the query reads only the real part.
            work[0] = Complex::new((n as usize * QUERY_BLOCK) as f64, -1.0);
        }
        0
    }

    fn zhetrf(
        &self,
        uplo: u8,
        n: i32,
        _a: &mut [Complex<f64>],
        lda: i32,
        _ipiv: &mut [i32],
        work: &mut [Complex<f64>],
        lwork: i32,
    ) -> i32 {
        self.record("zhetrf", &[uplo], &[n, lda, lwork]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        if lwork == -1 {
            work[0] = Complex::new((n as usize * QUERY_BLOCK) as f64, -1.0);
        }
        0
    }

    fn dsptrf(&self, uplo: u8, n: i32, _ap: &mut [f64], _ipiv: &mut [i32]) -> i32 {
        self.record("dsptrf", &[uplo], &[n]);
        self.scripted_info.get()
    }

    fn zsptrf(&self, uplo: u8, n: i32, _ap: &mut [Complex<f64>], _ipiv: &mut [i32]) -> i32 {
        self.record("zsptrf", &[uplo], &[n]);
        self.scripted_info.get()
    }

    fn zhptrf(&self, uplo: u8, n: i32, _ap: &mut [Complex<f64>], _ipiv: &mut [i32]) -> i32 {
        self.record("zhptrf", &[uplo], &[n]);
        self.scripted_info.get()
    }
}

impl SolveRoutines for RefDriver {
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
        self.record("dgetrs", &[trans], &[n, nrhs, lda, ldb]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        if trans == b'N' {
            getrs_f64(
                n as usize,
                nrhs as usize,
                a,
                lda as usize,
                ipiv,
                b,
                ldb as usize,
            );
        }
        0
    }

    fn zgetrs(
        &self,
        trans: u8,
        n: i32,
        nrhs: i32,
        _a: &[Complex<f64>],
        lda: i32,
        _ipiv: &[i32],
        _b: &mut [Complex<f64>],
        ldb: i32,
    ) -> i32 {
        self.record("zgetrs", &[trans], &[n, nrhs, lda, ldb]);
        self.scripted_info.get()
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
        self.record("dpotrs", &[uplo], &[n, nrhs, lda, ldb]);
        let s = self.scripted_info.get();
        if s != 0 {
            return s;
        }
        if uplo == b'L' {
            potrs_lower_f64(n as usize, nrhs as usize, a, lda as usize, b, ldb as usize);
        }
        0
    }

    fn zpotrs(
        &self,
        uplo: u8,
        n: i32,
        nrhs: i32,
        _a: &[Complex<f64>],
        lda: i32,
        _b: &mut [Complex<f64>],
        ldb: i32,
    ) -> i32 {
        self.record("zpotrs", &[uplo], &[n, nrhs, lda, ldb]);
        self.scripted_info.get()
    }
}
