//! Look up the words for a rack the player supplies.

use anyhow::{Result, bail};
use clap::Parser;
use client_bootstrap::ServiceSetup;

use super::Output;

/// List the words that can be made from the given letters
#[derive(Parser, Debug)]
pub struct Check {
    /// Letters to check, e.g. `abcde`
    pub letters: String,
}

impl Check {
    pub async fn run(self, setup: &ServiceSetup, output: &Output) -> Result<()> {
        let letters: Vec<char> = self
            .letters
            .chars()
            .filter(|letter| !letter.is_whitespace())
            .collect();

        if letters.is_empty() {
            bail!("No letters given");
        }

        let words = setup.rounds.validator().validate(&letters).await?;

        output.print(&words)
    }
}
