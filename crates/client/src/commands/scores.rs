//! Read the leaderboard.

use anyhow::Result;
use clap::Parser;
use client_bootstrap::ServiceSetup;
use runtime::{QueryParams, RuntimeError};

use super::Output;

/// Read the leaderboard
#[derive(Parser, Debug)]
pub struct Scores {
    /// Sort key: name, high_score (default) or date
    #[arg(long)]
    pub sort: Option<String>,

    /// Only show records with exactly this name
    #[arg(long)]
    pub name: Option<String>,

    /// Maximum number of records; negative or non-numeric means none
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,
}

impl Scores {
    pub async fn run(self, setup: &ServiceSetup, output: &Output) -> Result<()> {
        let params = QueryParams::from_raw(
            self.sort.as_deref(),
            self.name.as_deref(),
            self.limit.as_deref(),
        )
        .map_err(RuntimeError::from)?;

        let records = setup.leaderboard.scores(&params).await?;

        output.print(&records)
    }
}
