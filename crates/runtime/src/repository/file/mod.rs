//! File-based repository implementations.

mod scores;

pub use scores::FileScoreRepository;
