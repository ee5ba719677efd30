//! Search configuration.

use lattica_integers::modular::primes::P46337;
use lattica_integers::SmallModulus;

use crate::error::SearchError;

/// Configuration for the candidate search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Prime for the modular resultant pre-check.
    pub resultant_prime: i64,
    /// Run workers on the rayon pool; otherwise search on the calling thread.
    pub parallel: bool,
    /// Number of independent workers, each with its own random stream.
    pub workers: usize,
    /// Total attempts across all workers before giving up.
    pub max_attempts: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            resultant_prime: P46337,
            parallel: true,
            workers: rayon::current_num_threads(),
            max_attempts: None,
        }
    }
}

impl SearchConfig {
    /// A single-worker configuration that runs on the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            workers: 1,
            ..Self::default()
        }
    }

    /// Caps the total number of attempts.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Sets the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SearchError> {
        if self.workers == 0 {
            return Err(SearchError::InvalidConfig("workers must be positive".into()));
        }
        if SmallModulus::new(self.resultant_prime).is_none() {
            return Err(SearchError::InvalidConfig(format!(
                "resultant prime {} outside [2, 2^31)",
                self.resultant_prime
            )));
        }
        Ok(())
    }
}

/// Shape of the ternary candidates to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateShape {
    /// Ring degree N.
    pub n: usize,
    /// Power-of-two modulus the candidate must be invertible under.
    pub q: i32,
    /// Number of +1 coefficients.
    pub num_ones: usize,
    /// Number of -1 coefficients.
    pub num_neg_ones: usize,
}

impl CandidateShape {
    /// Creates a shape.
    #[must_use]
    pub fn new(n: usize, q: i32, num_ones: usize, num_neg_ones: usize) -> Self {
        Self {
            n,
            q,
            num_ones,
            num_neg_ones,
        }
    }

    /// Checks that candidates of this shape can exist and can be invertible.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] for a zero degree, a modulus below 2,
    /// more non-zero coefficients than the degree allows, or an even
    /// total weight.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.n == 0 {
            return Err(SearchError::InvalidConfig("ring degree must be positive".into()));
        }
        if self.q < 2 {
            return Err(SearchError::InvalidConfig(format!(
                "modulus {} below 2",
                self.q
            )));
        }
        if self.num_ones + self.num_neg_ones > self.n {
            return Err(SearchError::InvalidConfig(format!(
                "{} non-zero coefficients do not fit degree {}",
                self.num_ones + self.num_neg_ones,
                self.n
            )));
        }
        // f(1) = ones - neg_ones must be odd for an inverse mod 2 to exist
        if (self.num_ones + self.num_neg_ones) % 2 == 0 {
            return Err(SearchError::InvalidConfig(format!(
                "even weight {} + {} is never invertible mod 2",
                self.num_ones, self.num_neg_ones
            )));
        }
        Ok(())
    }
}
