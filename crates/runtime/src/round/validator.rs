//! Rack validation against a word oracle.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::Result;
use crate::oracle::WordOracle;

/// Shortest word, in characters, that counts toward a round.
pub const MIN_WORD_LEN: usize = 3;

/// Asks a [`WordOracle`] which words a rack can form.
#[derive(Clone)]
pub struct WordValidator {
    oracle: Arc<dyn WordOracle>,
}

impl WordValidator {
    pub fn new(oracle: Arc<dyn WordOracle>) -> Self {
        Self { oracle }
    }

    /// Oracle query key for a rack: the letters joined in lowercase.
    pub fn query_key(letters: &[char]) -> String {
        letters.iter().flat_map(|letter| letter.to_lowercase()).collect()
    }

    /// Candidate words for `letters`, without trivial or repeated entries.
    ///
    /// Words shorter than [`MIN_WORD_LEN`] are dropped and duplicates keep
    /// their first position. An empty result is not an error; an oracle
    /// failure surfaces as [`RuntimeError::OracleUnavailable`].
    ///
    /// [`RuntimeError::OracleUnavailable`]: crate::RuntimeError::OracleUnavailable
    pub async fn validate(&self, letters: &[char]) -> Result<Vec<String>> {
        let key = Self::query_key(letters);
        let candidates = self.oracle.lookup(&key).await?;

        let mut seen = HashSet::new();
        let words: Vec<String> = candidates
            .into_iter()
            .map(|word| word.trim().to_string())
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .filter(|word| seen.insert(word.clone()))
            .collect();

        tracing::debug!("Rack {:?} has {} usable words", key, words.len());

        Ok(words)
    }
}
