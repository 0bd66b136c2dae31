//! Repository contract for the leaderboard record store.

use async_trait::async_trait;
use game_core::ScoreRecord;

use super::error::Result;

/// Append-only store of submitted scores.
///
/// Records are never updated or deleted, so implementations only need to
/// make a single append atomic; concurrent submissions may interleave in any
/// order.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Every stored record, in insertion order.
    async fn find_all(&self) -> Result<Vec<ScoreRecord>>;

    /// Append one already-validated record.
    async fn append(&self, record: &ScoreRecord) -> Result<()>;
}
