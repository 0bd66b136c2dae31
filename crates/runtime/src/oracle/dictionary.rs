//! Offline oracle answering from an in-memory word list.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;

use super::{OracleError, WordOracle};

/// Word oracle that checks a fixed dictionary against the rack.
///
/// A word is a candidate when every letter it uses is available in the rack
/// at least as many times as the word needs it. Candidates come back in
/// dictionary order.
#[derive(Debug, Clone, Default)]
pub struct DictionaryOracle {
    words: Vec<String>,
}

impl DictionaryOracle {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Load a newline-separated word list.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OracleError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| OracleError::WordList {
            path: path.to_path_buf(),
            source,
        })?;

        let oracle = Self::from_words(contents.lines());
        tracing::info!(
            "Loaded {} dictionary words from {}",
            oracle.words.len(),
            path.display()
        );

        Ok(oracle)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn letter_counts(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in text.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

fn can_form(word: &str, rack: &HashMap<char, usize>) -> bool {
    letter_counts(word)
        .iter()
        .all(|(letter, needed)| rack.get(letter).is_some_and(|available| available >= needed))
}

#[async_trait]
impl WordOracle for DictionaryOracle {
    async fn lookup(&self, key: &str) -> Result<Vec<String>, OracleError> {
        let rack = letter_counts(&key.to_lowercase());

        Ok(self
            .words
            .iter()
            .filter(|word| can_form(word, &rack))
            .cloned()
            .collect())
    }
}
