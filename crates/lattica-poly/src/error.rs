//! Error type shared by the ring, codec and resultant modules.

use std::fmt;

use lattica_integers::Integer;
use thiserror::Error;

/// Packed formats understood by the codecs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Fixed-width bitfields, one per coefficient.
    Binary,
    /// Five trits per byte, base 3.
    Sves,
    /// Three trits per five bits.
    Tight,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Sves => "sves",
            Self::Tight => "tight",
        };
        f.write_str(name)
    }
}

/// Errors raised by ring arithmetic and the codecs.
///
/// A missing inverse is not an error; the inversion routines return `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Operands of different ring degree, or a decode buffer longer than
    /// the declared coefficient count allows.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Size the operation required.
        expected: usize,
        /// Size it was given.
        found: usize,
    },

    /// A decode buffer that is truncated or holds out-of-range digits.
    #[error("malformed {format} encoding: {reason}")]
    MalformedEncoding {
        /// Format being decoded.
        format: Encoding,
        /// What was wrong with the input.
        reason: String,
    },

    /// A coefficient outside {-1, 0, 1} where a ternary one is required.
    #[error("coefficient {value} at index {index} is not ternary")]
    NotTernary {
        /// Position of the offending coefficient.
        index: usize,
        /// Its value.
        value: i32,
    },

    /// An unreduced result that does not fit a machine-width coefficient.
    #[error("coefficient at index {index} does not fit in 32 bits")]
    CoefficientOverflow {
        /// Position of the offending coefficient.
        index: usize,
    },

    /// A modulus the algorithm cannot work with.
    #[error("invalid modulus {modulus}: {reason}")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: Integer,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// More non-zero coefficients requested than the ring degree holds.
    #[error("cannot place {requested} non-zero coefficients in dimension {n}")]
    InvalidWeight {
        /// Ring degree.
        n: usize,
        /// Requested number of non-zero coefficients.
        requested: usize,
    },
}

impl PolyError {
    pub(crate) fn malformed(format: Encoding, reason: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            format,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_modulus(modulus: impl Into<Integer>, reason: &'static str) -> Self {
        Self::InvalidModulus {
            modulus: modulus.into(),
            reason,
        }
    }
}

/// Result alias for fallible ring operations.
pub type PolyResult<T> = Result<T, PolyError>;

/// Fails with [`PolyError::DimensionMismatch`] unless `found == expected`.
pub(crate) fn check_dimension(expected: usize, found: usize) -> PolyResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PolyError::DimensionMismatch { expected, found })
    }
}
