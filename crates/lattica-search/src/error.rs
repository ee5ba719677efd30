//! Search errors.

use lattica_poly::PolyError;
use thiserror::Error;

/// Errors that can end a candidate search.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The stop flag was raised before any worker succeeded.
    #[error("search cancelled")]
    Cancelled,

    /// The attempt budget ran out.
    #[error("no candidate found in {attempts} attempts")]
    Exhausted {
        /// Attempts made.
        attempts: u64,
    },

    /// A configuration or shape the search cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A ring operation failed inside an attempt.
    #[error(transparent)]
    Poly(#[from] PolyError),
}
