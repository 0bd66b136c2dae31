//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from the word oracle, repositories, and the pure rules in
//! `game-core` so clients can bubble them up with a consistent
//! classification.
use std::fmt;
use std::time::Duration;

use game_core::{GenerateError, QueryError, ValidationError};
use thiserror::Error;

pub use crate::oracle::OracleError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] GenerateError),

    #[error("word oracle unavailable")]
    OracleUnavailable(#[source] OracleError),

    #[error("no playable round after {attempts} attempts ({reason})")]
    RoundUnobtainable { attempts: u32, reason: RoundFailure },

    #[error("rejected score: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Whether the same request may succeed if repeated unchanged.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::OracleUnavailable(_) | Self::RoundUnobtainable { .. }
        )
    }
}

impl From<OracleError> for RuntimeError {
    fn from(error: OracleError) -> Self {
        Self::OracleUnavailable(error)
    }
}

/// Which limit of the round policy was hit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundFailure {
    AttemptsExhausted,
    DeadlineElapsed(Duration),
}

impl fmt::Display for RoundFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundFailure::AttemptsExhausted => write!(f, "attempt limit reached"),
            RoundFailure::DeadlineElapsed(deadline) => {
                write!(f, "deadline of {:?} elapsed", deadline)
            }
        }
    }
}
