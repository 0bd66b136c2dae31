//! Repository layer for leaderboard scores.
//!
//! Repositories hold data that CHANGES while the game runs: submitted score
//! records. Word lookup is handled by oracles, not repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileScoreRepository;
pub use memory::InMemoryScoreRepository;
pub use traits::ScoreRepository;
