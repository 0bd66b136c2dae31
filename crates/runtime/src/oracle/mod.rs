//! Word oracles: sources that know which words a rack of letters can form.
//!
//! The runtime only depends on [`WordOracle`]. How candidates are found is
//! an adapter concern: [`AnagrammerOracle`] scrapes a public unscrambler
//! site, [`DictionaryOracle`] answers offline from a word list. Oracles
//! return raw candidates; trivial-word filtering happens in the validator.
mod anagrammer;
mod dictionary;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

pub use anagrammer::{AnagrammerOracle, MarkupExtractor};
pub use dictionary::DictionaryOracle;

/// Failures while consulting a word oracle.
///
/// Transient and permanent failures are not distinguished; callers decide
/// whether to retry.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid markup selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("failed to read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source of candidate words for a rack of letters.
///
/// `key` is the rack joined into a single lowercase string, e.g. `"abcde"`.
/// An empty answer is a normal outcome, not an error.
#[async_trait]
pub trait WordOracle: Send + Sync {
    async fn lookup(&self, key: &str) -> Result<Vec<String>, OracleError>;
}
