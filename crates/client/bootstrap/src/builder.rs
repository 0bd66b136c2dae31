//! Builds the round orchestrator and leaderboard used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{
    AnagrammerOracle, DictionaryOracle, FileScoreRepository, InMemoryScoreRepository,
    Leaderboard, RoundOrchestrator, ScoreRepository, WordOracle,
};

use crate::config::{OracleKind, ServiceConfig};
use crate::dirs;

/// Builder that assembles the oracle, score store, and services for clients.
///
/// Without overrides the oracle and repository are chosen from
/// [`ServiceConfig`]; tests and embedders can inject their own.
pub struct ServiceBuilder {
    config: ServiceConfig,
    oracle: Option<Arc<dyn WordOracle>>,
    repository: Option<Arc<dyn ScoreRepository>>,
}

impl ServiceBuilder {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            oracle: None,
            repository: None,
        }
    }

    /// Provide a custom word oracle instead of the configured one.
    pub fn oracle(mut self, oracle: impl WordOracle + 'static) -> Self {
        self.oracle = Some(Arc::new(oracle));
        self
    }

    /// Provide a custom score repository instead of the configured one.
    pub fn repository(mut self, repository: impl ScoreRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    pub fn build(self) -> Result<ServiceSetup> {
        let oracle = match self.oracle {
            Some(oracle) => oracle,
            None => build_oracle(&self.config)?,
        };
        let repository = match self.repository {
            Some(repository) => repository,
            None => build_repository(&self.config)?,
        };

        let rounds = RoundOrchestrator::new(oracle).with_policy(self.config.policy);
        let leaderboard = Leaderboard::new(repository);

        Ok(ServiceSetup {
            config: self.config,
            rounds,
            leaderboard,
        })
    }
}

fn build_oracle(config: &ServiceConfig) -> Result<Arc<dyn WordOracle>> {
    match config.oracle.kind {
        OracleKind::Anagrammer => {
            tracing::debug!("Using anagrammer oracle at {}", config.oracle.base_url);
            let oracle = AnagrammerOracle::new(&config.oracle.base_url, config.oracle.timeout)
                .context("Failed to create anagrammer oracle")?;
            Ok(Arc::new(oracle))
        }
        OracleKind::Dictionary => {
            let path = config
                .oracle
                .dictionary
                .as_ref()
                .context("WORDGAME_DICTIONARY must point to a word list for the dictionary oracle")?;
            let oracle = DictionaryOracle::from_path(path)
                .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
            Ok(Arc::new(oracle))
        }
    }
}

fn build_repository(config: &ServiceConfig) -> Result<Arc<dyn ScoreRepository>> {
    if config.storage.in_memory {
        tracing::debug!("Keeping scores in memory");
        return Ok(Arc::new(InMemoryScoreRepository::new()));
    }

    let path = config
        .storage
        .scores_path
        .clone()
        .unwrap_or_else(dirs::default_scores_path);

    tracing::debug!("Keeping scores in {}", path.display());
    let repository = FileScoreRepository::new(&path)
        .with_context(|| format!("Failed to open score file {}", path.display()))?;

    Ok(Arc::new(repository))
}

/// Services ready for a front-end to drive.
pub struct ServiceSetup {
    pub config: ServiceConfig,
    pub rounds: RoundOrchestrator,
    pub leaderboard: Leaderboard,
}
