//! In-memory repository implementations for testing and development.

mod scores;

pub use scores::InMemoryScoreRepository;
