//! In-memory score store.

use std::sync::RwLock;

use async_trait::async_trait;
use game_core::ScoreRecord;

use crate::repository::{RepositoryError, Result, ScoreRepository};

/// In-memory score store for testing and development.
///
/// Thread-safe but not persistent across process restarts.
#[derive(Default)]
pub struct InMemoryScoreRepository {
    records: RwLock<Vec<ScoreRecord>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records.
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(records.len())
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn find_all(&self) -> Result<Vec<ScoreRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(records.clone())
    }

    async fn append(&self, record: &ScoreRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        records.push(record.clone());
        Ok(())
    }
}
