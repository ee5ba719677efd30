//! # lattica-poly
//!
//! Ring arithmetic in Z[x]/(x^N - 1) for NTRU-style lattice cryptography.
//!
//! This crate provides:
//! - Dense ring elements over `i32` ([`IntegerPolynomial`]) and over
//!   arbitrary precision integers ([`BigIntPolynomial`])
//! - Dense and sparse ternary elements behind the [`RingElement`] and
//!   [`TernaryPolynomial`] traits
//! - Inversion modulo 3 and modulo powers of two
//! - Exact and modular resultants against x^N - 1 with a Bezout cofactor
//! - Fixed-width, sves and tight byte encodings
//!
//! ## Overflow
//!
//! Convolutions accumulate in `i128` and narrow back explicitly, either
//! by reducing modulo the caller's modulus or with a checked conversion
//! that reports [`PolyError::CoefficientOverflow`].
//!
//! ## Concurrency
//!
//! Every operation is a pure function of its operands. Independent
//! values can be used from any number of threads without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bigint_poly;
mod bits;
pub mod encoding;
pub mod error;
pub mod integer_poly;
pub mod inversion;
pub mod resultant;
pub mod ring;
pub mod ternary;

#[cfg(test)]
mod proptests;

pub use bigint_poly::BigIntPolynomial;
pub use encoding::{binary_len, bit_width, sves_len, tight_len};
pub use error::{Encoding, PolyError, PolyResult};
pub use integer_poly::IntegerPolynomial;
pub use resultant::Resultant;
pub use ring::RingElement;
pub use ternary::{DenseTernaryPolynomial, SparseTernaryPolynomial, TernaryPolynomial};
