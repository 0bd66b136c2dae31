//! Round generation: draw a rack, ask the oracle, keep it if it is playable.
//!
//! [`WordValidator`] turns a rack into its non-trivial candidate words and
//! [`RoundOrchestrator`] repeats draw-and-validate until a viable [`Round`]
//! appears or its [`RoundPolicy`] gives up.
mod orchestrator;
mod validator;

use serde::{Deserialize, Serialize};

pub use orchestrator::{RoundOrchestrator, RoundPolicy};
pub use validator::{MIN_WORD_LEN, WordValidator};

/// One game's rack plus the words that can be made from it.
///
/// A round is only handed out when it is viable: more than one word survives
/// the trivial-word filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    letters: Vec<char>,
    words: Vec<String>,
}

impl Round {
    pub(crate) fn new(letters: Vec<char>, words: Vec<String>) -> Self {
        Self { letters, words }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_viable(&self) -> bool {
        is_viable(&self.words)
    }

    pub fn into_parts(self) -> (Vec<char>, Vec<String>) {
        (self.letters, self.words)
    }
}

pub(crate) fn is_viable(words: &[String]) -> bool {
    words.len() > 1
}
