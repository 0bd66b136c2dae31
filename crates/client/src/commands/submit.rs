//! Submit a score record.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use client_bootstrap::ServiceSetup;
use serde_json::Value;

use super::Output;

/// Submit a single score record
#[derive(Parser, Debug)]
pub struct Submit {
    /// Record as JSON, e.g. '{"name":"Al","high_score":100,"date":"2021-01-01"}'.
    /// Read from stdin when omitted.
    pub record: Option<String>,
}

impl Submit {
    pub async fn run(self, setup: &ServiceSetup, output: &Output) -> Result<()> {
        let text = match self.record {
            Some(record) => record,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read record from stdin")?;
                buffer
            }
        };

        let candidate: Value =
            serde_json::from_str(&text).context("Submitted record is not valid JSON")?;

        setup.leaderboard.submit(&candidate).await?;

        output.print(&"Complete")
    }
}
