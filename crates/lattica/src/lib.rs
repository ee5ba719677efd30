//! # Lattica
//!
//! The polynomial ring engine behind NTRU-style lattice cryptography.
//!
//! Lattica works in Z[x]/(x^N - 1) and its reductions modulo small
//! integers, and provides the primitives key generation and encryption
//! build on.
//!
//! ## Features
//!
//! - **Ring Arithmetic**: cyclic convolution with overflow-free `i128`
//!   accumulation, dense and sparse ternary operands
//! - **Inversion**: modulo 3 and modulo powers of two (Newton lifting)
//! - **Resultants**: exact subresultant and fast modular variants, each
//!   with a Bezout cofactor, plus CRT recombination
//! - **Codecs**: fixed-width, sves and tight byte encodings
//! - **Key Search**: parallel retry driver with explicit RNG and cancellation
//!
//! ## Quick Start
//!
//! ```rust
//! use lattica::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = IntegerPolynomial::new(vec![-1, 1, 1, 0, -1, 0, 1, 0, 0, 1, -1]);
//! let fq = a.invert_fq(32).ok_or("not invertible")?;
//! assert!(a.multiply_mod(&fq, 32)?.equals_one());
//!
//! let bytes = fq.to_binary(32);
//! assert_eq!(IntegerPolynomial::from_binary(&bytes, 11, 32)?, fq);
//!
//! let r = a.resultant_mod(46_337)?;
//! assert!(r.verify(&a)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lattica_integers as integers;
pub use lattica_poly as poly;
pub use lattica_search as search;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lattica_integers::{Integer, SmallModulus};
    pub use lattica_poly::{
        BigIntPolynomial, DenseTernaryPolynomial, IntegerPolynomial, PolyError, PolyResult,
        Resultant, RingElement, SparseTernaryPolynomial, TernaryPolynomial,
    };
    pub use lattica_search::{
        find_invertible, CandidateShape, InvertibleCandidate, ParallelSearch, SearchConfig,
        SearchError, StopFlag,
    };
}
