//! Runtime services for the word game.
//!
//! This crate wires the pure rules from `game-core` to the outside world:
//! a word oracle that knows which words a rack can form, score repositories
//! that hold the leaderboard, and the retry policy that turns random racks
//! into playable rounds.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error type downstream clients interact with
//! - [`oracle`] adapts word lookup sources behind [`WordOracle`]
//! - [`repository`] stores submitted scores behind [`ScoreRepository`]
//! - [`round`] validates racks and drives round generation
//! - [`leaderboard`] serves score reads and writes against a repository
pub mod api;
pub mod leaderboard;
pub mod oracle;
pub mod repository;
pub mod round;

pub use api::{Result, RuntimeError};
pub use game_core::{FrequencyTable, MAX_LETTERS, QueryParams, ScoreRecord, SortKey};
pub use leaderboard::Leaderboard;
pub use oracle::{AnagrammerOracle, DictionaryOracle, OracleError, WordOracle};
pub use repository::{
    FileScoreRepository, InMemoryScoreRepository, RepositoryError, ScoreRepository,
};
pub use round::{Round, RoundOrchestrator, RoundPolicy, WordValidator};
