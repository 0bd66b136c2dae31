//! Pure rules for the word game shared across the runtime and clients.
//!
//! `game-core` defines how round letters are drawn and how the leaderboard
//! is queried. Everything here is synchronous and free of I/O so it can be
//! tested in isolation; the `runtime` crate adds the word oracle, score
//! repositories and the round retry policy.
pub mod leaderboard;
pub mod letters;

pub use leaderboard::{
    EXPECTED_SHAPE, QueryError, QueryParams, ScoreRecord, SortKey, ValidationError, parse_limit,
    query,
};
pub use letters::{
    FALLBACK_LETTER, FrequencyTable, GenerateError, MAX_LETTERS, TableError, check_count,
    generate, sample,
};
