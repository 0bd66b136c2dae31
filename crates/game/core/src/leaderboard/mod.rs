//! Leaderboard records and the query engine that reads them.
//!
//! Records enter through [`ScoreRecord::from_value`], which enforces the
//! canonical `{name, high_score, date}` shape. Reads go through [`query`],
//! which sorts, filters and truncates a copy of the stored records.
mod query;
mod record;

pub use query::{QueryError, QueryParams, SortKey, parse_limit, query};
pub use record::{EXPECTED_SHAPE, ScoreRecord, ValidationError};
