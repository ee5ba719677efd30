//! Parallel retry driver.
//!
//! Runs independent attempts on rayon workers until one succeeds, the
//! stop flag is raised, or the attempt budget is spent. Each worker owns
//! a `ChaCha8Rng` on its own stream of a caller-supplied seed, so a run
//! needs no shared random state. Attempts are not preemptible: workers
//! check the flag between attempts and may finish one extra attempt
//! after a winner is found.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// A shared cancellation flag.
///
/// Clones share the flag. Raising it stops every search it was passed to.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Creates a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true once the flag has been raised.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Identifies one attempt within a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
    /// Worker running the attempt.
    pub worker: usize,
    /// Global attempt number, unique across workers.
    pub index: u64,
}

/// Runs attempts across workers until one produces a value.
#[derive(Clone, Debug)]
pub struct ParallelSearch {
    config: SearchConfig,
}

impl ParallelSearch {
    /// Creates a driver with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Calls `attempt` repeatedly until it returns `Ok(Some(_))`.
    ///
    /// `Ok(None)` is a rejected attempt and is retried; `Err` ends the
    /// search. The first value or error found raises `stop`, which also
    /// halts the other workers.
    ///
    /// # Errors
    ///
    /// [`SearchError::Cancelled`] if `stop` was raised by someone else,
    /// [`SearchError::Exhausted`] if the attempt budget ran out, or the
    /// first error an attempt returned.
    pub fn run<T, F>(&self, stop: &StopFlag, seed: u64, attempt: F) -> Result<T, SearchError>
    where
        T: Send,
        F: Fn(&mut ChaCha8Rng, Attempt) -> Result<Option<T>, SearchError> + Sync,
    {
        self.config.validate()?;
        let counter = AtomicU64::new(0);
        let max_attempts = self.config.max_attempts;

        let worker = |worker: usize| -> Option<Result<T, SearchError>> {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(worker as u64);
            loop {
                if stop.is_stopped() {
                    return None;
                }
                let index = counter.fetch_add(1, Ordering::Relaxed);
                if max_attempts.is_some_and(|max| index >= max) {
                    return None;
                }
                match attempt(&mut rng, Attempt { worker, index }) {
                    Ok(None) => {}
                    found => {
                        stop.stop();
                        return found.transpose();
                    }
                }
            }
        };

        let outcome = if self.config.parallel && self.config.workers > 1 {
            debug!(workers = self.config.workers, seed, "starting parallel search");
            (0..self.config.workers)
                .into_par_iter()
                .filter_map(worker)
                .find_any(|_| true)
        } else {
            debug!(seed, "starting sequential search");
            worker(0)
        };

        match outcome {
            Some(result) => result,
            None => match max_attempts {
                Some(max) if counter.load(Ordering::Relaxed) >= max => {
                    Err(SearchError::Exhausted { attempts: max })
                }
                _ => Err(SearchError::Cancelled),
            },
        }
    }
}
