//! Search for ternary polynomials invertible mod q and mod 3.

use lattica_poly::{IntegerPolynomial, RingElement, SparseTernaryPolynomial};
use num_traits::Zero;
use rand::Rng;
use tracing::{debug, info};

use crate::config::{CandidateShape, SearchConfig};
use crate::error::SearchError;
use crate::parallel::{ParallelSearch, StopFlag};

/// A ternary polynomial together with its inverses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvertibleCandidate {
    /// The candidate.
    pub f: SparseTernaryPolynomial,
    /// Inverse of `f` modulo q, in `[0, q)`.
    pub fq: IntegerPolynomial,
    /// Inverse of `f` modulo 3, in {0, 1, 2}.
    pub f3: IntegerPolynomial,
}

/// Stage at which a candidate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The modular resultant vanished.
    Resultant,
    /// No inverse modulo 2, hence none modulo q.
    ModQ,
    /// No inverse modulo 3.
    Mod3,
}

/// Draws one candidate and tries to invert it.
///
/// The cheap modular resultant runs first; only candidates whose
/// resultant is non-zero modulo `resultant_prime` reach the inversions.
///
/// # Errors
///
/// [`SearchError::Poly`] if the shape or prime is unusable.
pub fn try_candidate<G: Rng + ?Sized>(
    shape: &CandidateShape,
    resultant_prime: i64,
    rng: &mut G,
) -> Result<Result<InvertibleCandidate, Rejection>, SearchError> {
    let f = SparseTernaryPolynomial::random(shape.n, shape.num_ones, shape.num_neg_ones, rng)?;
    let dense = f.to_integer_polynomial();

    if dense.resultant_mod(resultant_prime)?.res().is_zero() {
        return Ok(Err(Rejection::Resultant));
    }
    let Some(fq) = dense.invert_fq(shape.q) else {
        return Ok(Err(Rejection::ModQ));
    };
    let Some(f3) = dense.invert_f3() else {
        return Ok(Err(Rejection::Mod3));
    };
    Ok(Ok(InvertibleCandidate { f, fq, f3 }))
}

/// Searches for a ternary polynomial of the given shape that is
/// invertible modulo `shape.q` and modulo 3.
///
/// Results are reproducible for a fixed `seed` when the search is
/// sequential. In parallel the winner depends on scheduling.
///
/// # Errors
///
/// [`SearchError::InvalidConfig`] for an unusable shape or config,
/// [`SearchError::Cancelled`] if `stop` is raised, and
/// [`SearchError::Exhausted`] when `max_attempts` runs out.
pub fn find_invertible(
    shape: &CandidateShape,
    config: &SearchConfig,
    stop: &StopFlag,
    seed: u64,
) -> Result<InvertibleCandidate, SearchError> {
    shape.validate()?;
    let prime = config.resultant_prime;

    ParallelSearch::new(config.clone()).run(stop, seed, |rng, attempt| {
        match try_candidate(shape, prime, rng)? {
            Ok(candidate) => {
                info!(
                    attempt = attempt.index,
                    worker = attempt.worker,
                    n = shape.n,
                    "found invertible candidate"
                );
                Ok(Some(candidate))
            }
            Err(stage) => {
                debug!(
                    attempt = attempt.index,
                    worker = attempt.worker,
                    n = shape.n,
                    ?stage,
                    "rejected candidate"
                );
                Ok(None)
            }
        }
    })
}
