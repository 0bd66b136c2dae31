//! Weighted letter drawing for new rounds.
//!
//! A round starts from a multiset of letters sampled with replacement from a
//! [`FrequencyTable`]. The default table follows English letter frequency so
//! common letters (E, T, A) show up far more often than rare ones (Q, Z),
//! which keeps most generated racks playable.
mod frequency;
mod generator;

pub use frequency::{FALLBACK_LETTER, FrequencyTable, TableError, sample};
pub use generator::{GenerateError, MAX_LETTERS, check_count, generate};
