//! Status-code classification for native LAPACK calls.
//!
//! Every factorization and solve reports through a signed `info` scalar:
//! 0 on success, `-i` when the i-th argument (1-indexed) was illegal,
//! `+i` on a numerical failure at index `i`. [`check`] turns that raw code
//! into a structured result carrying the routine identity. Non-zero codes
//! always fail the call — no retry, no partial result.

use thiserror::Error;

/// Result type alias using the laprus error.
pub type Result<T> = std::result::Result<T, LapackError>;

/// Classified outcome of a non-zero native status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LapackError {
    /// The native routine rejected one of its arguments (`info < 0`).
    /// Recoverable by correcting the inputs; never retried here.
    #[error("{routine}: parameter {position} had an illegal value")]
    IllegalArgument {
        /// Routine that reported the status.
        routine: &'static str,
        /// 1-indexed position of the offending argument.
        position: i32,
    },

    /// Valid input, but the matrix lacks the numerical property the routine
    /// requires (`info > 0`): for LU the factor is exactly singular at this
    /// diagonal, for Cholesky the leading minor of this order is not
    /// positive-definite, for Bunch-Kaufman a diagonal block is singular.
    #[error("{routine}: numerical failure at index {index}")]
    NumericalFailure {
        /// Routine that reported the status.
        routine: &'static str,
        /// 1-indexed diagonal / leading-minor index.
        index: i32,
    },

    /// Status value outside the documented range — a contract mismatch with
    /// the linked native library version.
    #[error("{routine}: unmapped status code {info}")]
    UnmappedStatus {
        /// Routine that reported the status.
        routine: &'static str,
        /// Raw status value.
        info: i32,
    },
}

impl LapackError {
    /// Routine that reported the status.
    pub fn routine(&self) -> &'static str {
        match self {
            LapackError::IllegalArgument { routine, .. }
            | LapackError::NumericalFailure { routine, .. }
            | LapackError::UnmappedStatus { routine, .. } => routine,
        }
    }
}

/// Map a raw `info` status to a structured result.
///
/// ```
/// use laprus_lapack::{check, LapackError};
///
/// assert!(check("dgetrf", 0).is_ok());
/// assert_eq!(
///     check("dgetrf", -3),
///     Err(LapackError::IllegalArgument { routine: "dgetrf", position: 3 })
/// );
/// ```
pub fn check(routine: &'static str, info: i32) -> Result<()> {
    if info == 0 {
        return Ok(());
    }
    match info.checked_abs() {
        Some(position) if info < 0 => Err(LapackError::IllegalArgument { routine, position }),
        Some(index) => Err(LapackError::NumericalFailure { routine, index }),
        // |i32::MIN| is not representable; no routine has that many arguments.
        None => Err(LapackError::UnmappedStatus { routine, info }),
    }
}
