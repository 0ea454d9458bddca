//! LAPACK-style structural enumerations and derived dimensions.
//!
//! All buffers in the laprus ecosystem are column-major (Fortran-style).
//! Structural choices — which norm, which triangle, whether to transpose —
//! are encoded as the single-character tokens the native routines expect.
//! Each enum carries its token as the discriminant, so encoding is a cast
//! and decoding is a byte match.

/// Matrix norm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Norm {
    /// Maximum absolute column sum.
    #[default]
    One = b'1',
    /// Maximum absolute row sum.
    Inf = b'I',
    /// Square root of the sum of squared elements.
    Frobenius = b'F',
    /// Largest absolute element. Not a consistent matrix norm.
    MaxAbs = b'M',
}

impl Norm {
    /// Single-character token passed to the native routine.
    #[inline(always)]
    pub const fn token(self) -> u8 {
        self as u8
    }

    /// Decode a native token. Accepts the `'O'` spelling of the one-norm
    /// and lowercase tokens, as the reference routines do.
    pub const fn from_token(t: u8) -> Option<Self> {
        match t.to_ascii_uppercase() {
            b'1' | b'O' => Some(Norm::One),
            b'I' => Some(Norm::Inf),
            b'F' | b'E' => Some(Norm::Frobenius),
            b'M' => Some(Norm::MaxAbs),
            _ => None,
        }
    }
}

/// Which triangular half of a symmetric/Hermitian matrix is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Uplo {
    Upper = b'U',
    #[default]
    Lower = b'L',
}

impl Uplo {
    /// Single-character token passed to the native routine.
    #[inline(always)]
    pub const fn token(self) -> u8 {
        self as u8
    }

    /// Decode a native token.
    pub const fn from_token(t: u8) -> Option<Self> {
        match t.to_ascii_uppercase() {
            b'U' => Some(Uplo::Upper),
            b'L' => Some(Uplo::Lower),
            _ => None,
        }
    }
}

/// Transpose state. Used by the rectangular-full-packed factorizations and
/// the LU solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Transpose {
    /// No transpose.
    #[default]
    NoTrans = b'N',
    /// Transpose.
    Trans = b'T',
    /// Conjugate transpose (for complex types).
    ConjTrans = b'C',
}

impl Transpose {
    /// Single-character token passed to the native routine.
    #[inline(always)]
    pub const fn token(self) -> u8 {
        self as u8
    }

    /// Decode a native token.
    pub const fn from_token(t: u8) -> Option<Self> {
        match t.to_ascii_uppercase() {
            b'N' => Some(Transpose::NoTrans),
            b'T' => Some(Transpose::Trans),
            b'C' => Some(Transpose::ConjTrans),
            _ => None,
        }
    }
}

/// Leading dimension for a column-major matrix with `rows` rows.
///
/// Never less than 1 — the native routines reject `lda = 0` even for
/// empty matrices.
#[inline(always)]
pub const fn leading_dim(rows: usize) -> usize {
    if rows > 1 {
        rows
    } else {
        1
    }
}

/// Row stride of band storage holding `kl` sub- and `ku` super-diagonals.
#[inline(always)]
pub const fn band_stride(kl: usize, ku: usize) -> usize {
    kl + ku + 1
}

/// Row stride of band storage for LU factorization. The extra `kl` rows
/// absorb fill-in from partial pivoting.
#[inline(always)]
pub const fn band_stride_lu(kl: usize, ku: usize) -> usize {
    2 * kl + ku + 1
}

/// Length of one packed triangular half of an `n` x `n` matrix.
#[inline(always)]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}
