//! Leaderboard reads and writes over an injected score repository.

use std::sync::Arc;

use game_core::{QueryParams, ScoreRecord, query};
use serde_json::Value;

use crate::api::Result;
use crate::repository::ScoreRepository;

/// Storage-agnostic leaderboard service.
#[derive(Clone)]
pub struct Leaderboard {
    repository: Arc<dyn ScoreRepository>,
}

impl Leaderboard {
    pub fn new(repository: Arc<dyn ScoreRepository>) -> Self {
        Self { repository }
    }

    /// Records matching `params`, sorted, filtered and limited.
    pub async fn scores(&self, params: &QueryParams) -> Result<Vec<ScoreRecord>> {
        let records = self.repository.find_all().await?;
        Ok(query(&records, params))
    }

    /// Validate and store a single submitted score.
    ///
    /// A malformed submission is rejected before the repository is touched.
    pub async fn submit(&self, candidate: &Value) -> Result<ScoreRecord> {
        let record = ScoreRecord::from_value(candidate)?;
        self.repository.append(&record).await?;

        tracing::info!(
            "Recorded score {} for {:?} on {}",
            record.high_score,
            record.name,
            record.date
        );

        Ok(record)
    }
}
