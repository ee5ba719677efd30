//! # lattica-search
//!
//! Parallel search for invertible ternary key candidates.
//!
//! Key generation draws random ternary polynomials until one is
//! invertible modulo q and modulo 3. This crate drives that loop:
//!
//! - [`ParallelSearch`] runs attempts on rayon workers, each with its own
//!   seeded `ChaCha8Rng` stream, until one succeeds or a shared
//!   [`StopFlag`] is raised
//! - [`find_invertible`] rejects most candidates with the cheap modular
//!   resultant before attempting either inversion
//!
//! ## Example
//!
//! ```rust
//! use lattica_poly::RingElement;
//! use lattica_search::{find_invertible, CandidateShape, SearchConfig, StopFlag};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shape = CandidateShape::new(107, 2048, 15, 14);
//! let config = SearchConfig::default().with_max_attempts(1_000);
//! let found = find_invertible(&shape, &config, &StopFlag::new(), 42)?;
//!
//! let f = found.f.to_integer_polynomial();
//! assert!(f.multiply_mod(&found.fq, 2048)?.equals_one());
//! assert!(f.multiply_mod(&found.f3, 3)?.equals_one());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod candidate;
pub mod config;
pub mod error;
pub mod parallel;


pub use candidate::{find_invertible, try_candidate, InvertibleCandidate, Rejection};
pub use config::{CandidateShape, SearchConfig};
pub use error::SearchError;
pub use parallel::{Attempt, ParallelSearch, StopFlag};
