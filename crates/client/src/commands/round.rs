//! Generate a playable round.

use anyhow::Result;
use clap::Parser;
use client_bootstrap::ServiceSetup;

use super::Output;

/// Generate a playable round of letters and its words
#[derive(Parser, Debug)]
pub struct Round {
    /// Number of letters (default: WORDGAME_LETTER_COUNT or 7)
    #[arg(short, long)]
    pub letters: Option<usize>,
}

impl Round {
    pub async fn run(self, setup: &ServiceSetup, output: &Output) -> Result<()> {
        let count = self.letters.unwrap_or(setup.config.letter_count);

        let round = setup.rounds.produce_round(count).await?;

        output.print(&round)
    }
}
