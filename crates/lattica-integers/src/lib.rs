//! # lattica-integers
//!
//! Scalar arithmetic underneath the lattica ring engine.
//!
//! - [`Integer`] is an unbounded signed integer backed by `dashu`. Exact
//!   resultants, Bezout cofactors and CRT combination use it.
//! - [`SmallModulus`] reduces into `[0, m)` for a modulus that fits in
//!   31 bits. The modular resultant and the GF(2)/GF(3) inversions run
//!   on it without allocating.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::SmallModulus;
