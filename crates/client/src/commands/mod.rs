//! Subcommands of the `wordgame` binary.

mod check;
mod round;
mod scores;
mod submit;

pub use check::Check;
pub use round::Round;
pub use scores::Scores;
pub use submit::Submit;

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes command results to stdout as JSON.
pub struct Output {
    pretty: bool,
}

impl Output {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn print(&self, value: &impl Serialize) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .context("Failed to serialize output")?;

        println!("{json}");
        Ok(())
    }
}
