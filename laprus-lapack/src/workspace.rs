//! Workspace sizing for routines with a query protocol.
//!
//! The Bunch-Kaufman factorizations take a scratch buffer whose optimal
//! length depends on the native library's block size. Passing `lwork = -1`
//! turns the call into a query: the routine writes the recommended length
//! into a 1-element probe buffer and never touches the matrix, so an empty
//! placeholder is passed in its stead. The reported length is bumped by one
//! to absorb off-by-one reporting seen in some native builds.

use crate::driver::FactorRoutines;
use crate::error::{check, Result};
use crate::Lapack;
use laprus_core::layout::{leading_dim, Uplo};
use num_complex::Complex;

impl<D: FactorRoutines> Lapack<D> {
    /// Optimal workspace length for [`dsytrf`](Lapack::dsytrf).
    pub fn dsytrf_work_size(&self, uplo: Uplo, n: usize) -> Result<usize> {
        let lda = leading_dim(n) as i32;
        let mut probe = [0.0f64];
        let info = self
            .driver()
            .dsytrf(uplo.token(), n as i32, &mut [], lda, &mut [], &mut probe, -1);
        check("dsytrf", info)?;
        Ok(probe[0] as usize + 1)
    }

    /// Optimal workspace length for [`zsytrf`](Lapack::zsytrf).
    pub fn zsytrf_work_size(&self, uplo: Uplo, n: usize) -> Result<usize> {
        let lda = leading_dim(n) as i32;
        let mut probe = [Complex::new(0.0, 0.0)];
        let info = self
            .driver()
            .zsytrf(uplo.token(), n as i32, &mut [], lda, &mut [], &mut probe, -1);
        check("zsytrf", info)?;
        // Only the real component carries the length.
        Ok(probe[0].re as usize + 1)
    }

    /// Optimal workspace length for [`zhetrf`](Lapack::zhetrf).
    pub fn zhetrf_work_size(&self, uplo: Uplo, n: usize) -> Result<usize> {
        let lda = leading_dim(n) as i32;
        let mut probe = [Complex::new(0.0, 0.0)];
        let info = self
            .driver()
            .zhetrf(uplo.token(), n as i32, &mut [], lda, &mut [], &mut probe, -1);
        check("zhetrf", info)?;
        Ok(probe[0].re as usize + 1)
    }
}
