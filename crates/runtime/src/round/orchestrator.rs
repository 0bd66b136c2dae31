//! Bounded retry loop that produces playable rounds.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use game_core::{FrequencyTable, check_count, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::validator::WordValidator;
use super::{Round, is_viable};
use crate::api::{Result, RoundFailure, RuntimeError};
use crate::oracle::WordOracle;

/// Limits on how long [`RoundOrchestrator::produce_round`] keeps trying.
///
/// `None` disables a limit. With both disabled the search only ends on a
/// viable round, an oracle failure, or the caller dropping the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPolicy {
    pub max_attempts: Option<u32>,
    pub deadline: Option<Duration>,
}

impl RoundPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;
    pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

    pub const fn unbounded() -> Self {
        Self {
            max_attempts: None,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}

impl Default for RoundPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Some(Self::DEFAULT_MAX_ATTEMPTS),
            deadline: Some(Self::DEFAULT_DEADLINE),
        }
    }
}

/// Draws racks and validates them until one is playable.
///
/// Each call runs its own independent loop; concurrent calls only share the
/// random number generator, which is never locked across an `.await`.
pub struct RoundOrchestrator {
    validator: WordValidator,
    table: FrequencyTable,
    policy: RoundPolicy,
    rng: Mutex<StdRng>,
}

impl RoundOrchestrator {
    pub fn new(oracle: Arc<dyn WordOracle>) -> Self {
        Self {
            validator: WordValidator::new(oracle),
            table: FrequencyTable::english(),
            policy: RoundPolicy::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: FrequencyTable) -> Self {
        self.table = table;
        self
    }

    /// Fix the random seed so rack sequences are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn policy(&self) -> RoundPolicy {
        self.policy
    }

    pub fn validator(&self) -> &WordValidator {
        &self.validator
    }

    /// Produce a viable round of `letter_count` letters.
    ///
    /// Racks whose word list has one entry or fewer are discarded and a new
    /// rack is drawn. Oracle failures abort immediately without a retry.
    /// Exhausting the policy yields [`RuntimeError::RoundUnobtainable`].
    pub async fn produce_round(&self, letter_count: usize) -> Result<Round> {
        check_count(letter_count)?;

        let attempts = AtomicU32::new(0);
        let search = self.search(letter_count, &attempts);

        match self.policy.deadline {
            Some(deadline) => match tokio::time::timeout(deadline, search).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    let attempts = attempts.load(Ordering::Relaxed);
                    tracing::warn!(
                        "Round deadline of {:?} elapsed after {} attempts",
                        deadline,
                        attempts
                    );
                    Err(RuntimeError::RoundUnobtainable {
                        attempts,
                        reason: RoundFailure::DeadlineElapsed(deadline),
                    })
                }
            },
            None => search.await,
        }
    }

    async fn search(&self, letter_count: usize, attempts: &AtomicU32) -> Result<Round> {
        loop {
            let attempt = attempts.load(Ordering::Relaxed) + 1;
            if let Some(max_attempts) = self.policy.max_attempts
                && attempt > max_attempts
            {
                tracing::warn!("No playable round after {} attempts", max_attempts);
                return Err(RuntimeError::RoundUnobtainable {
                    attempts: max_attempts,
                    reason: RoundFailure::AttemptsExhausted,
                });
            }
            attempts.store(attempt, Ordering::Relaxed);

            let letters = self.draw(letter_count)?;
            let words = self.validator.validate(&letters).await?;

            if is_viable(&words) {
                tracing::info!(
                    "Round ready after {} attempt(s): {} letters, {} words",
                    attempt,
                    letters.len(),
                    words.len()
                );
                return Ok(Round::new(letters, words));
            }

            tracing::debug!(
                "Attempt {} discarded: rack {:?} has {} usable word(s)",
                attempt,
                WordValidator::query_key(&letters),
                words.len()
            );

            // Oracles that answer without suspending would otherwise starve
            // the deadline timer.
            tokio::task::yield_now().await;
        }
    }

    fn draw(&self, letter_count: usize) -> Result<Vec<char>> {
        // A panic elsewhere cannot leave the generator in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(generate(&self.table, letter_count, &mut *rng)?)
    }
}
