//! Leaderboard query engine: sort, then filter, then limit.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

use super::record::ScoreRecord;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown sort key {0:?}; expected one of name, high_score, date")]
    UnknownSortKey(String),
}

/// Field the leaderboard is ordered by.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by name, ties by descending score.
    Name,
    /// Descending by score.
    #[default]
    HighScore,
    /// Ascending by date string, ties by descending score.
    Date,
}

impl SortKey {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        raw.parse()
            .map_err(|_| QueryError::UnknownSortKey(raw.to_string()))
    }

    fn compare(self, a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
        match self {
            SortKey::HighScore => by_score(a, b),
            SortKey::Name => a.name.cmp(&b.name).then_with(|| by_score(a, b)),
            SortKey::Date => a.date.cmp(&b.date).then_with(|| by_score(a, b)),
        }
    }
}

fn by_score(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.score().total_cmp(&a.score())
}

/// Per-request leaderboard query. Every part is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub sort: Option<SortKey>,
    pub name: Option<String>,
    pub limit: Option<i64>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from raw request strings.
    ///
    /// The limit never fails to parse; see [`parse_limit`].
    pub fn from_raw(
        sort: Option<&str>,
        name: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            sort: sort.map(SortKey::parse).transpose()?,
            name: name.map(str::to_string),
            limit: limit.map(parse_limit),
        })
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Reads the leading integer of `raw`, or 0 when there is none.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"12abc"` is 12 and `"3.9"` is 3. A `0x` prefix
/// switches to hexadecimal, so `"0x10"` is 16. Out-of-range values saturate.
pub fn parse_limit(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if negative { -value } else { value }
}

/// Runs `params` against `records` without touching the input.
///
/// Order of operations is fixed: sort (default `high_score`), then the exact
/// name filter, then the limit clamped to `[0, len]`. The sort is stable, so
/// records equal on the key and on score keep their input order.
pub fn query(records: &[ScoreRecord], params: &QueryParams) -> Vec<ScoreRecord> {
    let mut result = records.to_vec();

    let key = params.sort.unwrap_or_default();
    result.sort_by(|a, b| key.compare(a, b));

    if let Some(name) = &params.name {
        result.retain(|record| &record.name == name);
    }

    if let Some(limit) = params.limit {
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        result.truncate(limit.min(result.len()));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: i64, date: &str) -> ScoreRecord {
        ScoreRecord::new(name, score, date)
    }

    fn names(records: &[ScoreRecord]) -> Vec<(&str, f64)> {
        records
            .iter()
            .map(|record| (record.name.as_str(), record.score()))
            .collect()
    }

    fn sample_board() -> Vec<ScoreRecord> {
        vec![
            record("A", 10, "2021-03-01"),
            record("B", 30, "2021-01-01"),
            record("A", 20, "2021-02-01"),
        ]
    }

    #[test]
    fn test_default_sort_is_high_score_descending() {
        let result = query(&sample_board(), &QueryParams::new());
        assert_eq!(names(&result), vec![("B", 30.0), ("A", 20.0), ("A", 10.0)]);
        for pair in result.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn test_name_filter_limit_scenario() {
        let params = QueryParams::new()
            .with_sort(SortKey::HighScore)
            .with_name("A")
            .with_limit(1);
        let result = query(&sample_board(), &params);
        assert_eq!(result, vec![record("A", 20, "2021-02-01")]);
    }

    #[test]
    fn test_string_sort_breaks_ties_by_score() {
        let board = vec![
            record("b", 1, "x"),
            record("a", 5, "x"),
            record("a", 9, "x"),
            record("c", 7, "x"),
        ];
        let result = query(&board, &QueryParams::new().with_sort(SortKey::Name));
        assert_eq!(
            names(&result),
            vec![("a", 9.0), ("a", 5.0), ("b", 1.0), ("c", 7.0)]
        );
    }

    #[test]
    fn test_date_sort_is_ascending() {
        let result = query(&sample_board(), &QueryParams::new().with_sort(SortKey::Date));
        let dates: Vec<_> = result.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2021-01-01", "2021-02-01", "2021-03-01"]);
    }

    #[test]
    fn test_sort_is_stable_for_full_ties() {
        let mut first = record("a", 5, "d");
        first.extra.insert("seq".into(), 1.into());
        let mut second = record("a", 5, "d");
        second.extra.insert("seq".into(), 2.into());

        let result = query(
            &[first.clone(), second.clone()],
            &QueryParams::new().with_sort(SortKey::Name),
        );
        assert_eq!(result, vec![first, second]);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let result = query(&sample_board(), &QueryParams::new().with_name("a"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_limit_is_clamped() {
        let board = sample_board();
        assert!(query(&board, &QueryParams::new().with_limit(-5)).is_empty());
        assert!(query(&board, &QueryParams::new().with_limit(0)).is_empty());
        assert_eq!(query(&board, &QueryParams::new().with_limit(2)).len(), 2);
        assert_eq!(query(&board, &QueryParams::new().with_limit(100)).len(), 3);
        assert_eq!(query(&board, &QueryParams::new().with_limit(i64::MAX)).len(), 3);
    }

    #[test]
    fn test_query_leaves_input_untouched() {
        let board = sample_board();
        let before = board.clone();
        let _ = query(&board, &QueryParams::new().with_sort(SortKey::Name));
        assert_eq!(board, before);
    }

    #[test]
    fn test_parse_limit_reads_leading_integer() {
        assert_eq!(parse_limit("10"), 10);
        assert_eq!(parse_limit("  7"), 7);
        assert_eq!(parse_limit("12abc"), 12);
        assert_eq!(parse_limit("3.9"), 3);
        assert_eq!(parse_limit("-5"), -5);
        assert_eq!(parse_limit("+4"), 4);
        assert_eq!(parse_limit("abc"), 0);
        assert_eq!(parse_limit(""), 0);
        assert_eq!(parse_limit("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_limit("0x10"), 16);
        assert_eq!(parse_limit(" 0XfF"), 255);
        assert_eq!(parse_limit("-0x2"), -2);
        assert_eq!(parse_limit("0x"), 0);
        assert_eq!(parse_limit("0xg"), 0);
        assert_eq!(parse_limit("010"), 10);
    }

    #[test]
    fn test_from_raw_rejects_unknown_sort() {
        assert_eq!(
            QueryParams::from_raw(Some("score"), None, None),
            Err(QueryError::UnknownSortKey("score".into()))
        );

        let params = QueryParams::from_raw(Some("date"), Some("A"), Some("nope")).unwrap();
        assert_eq!(params.sort, Some(SortKey::Date));
        assert_eq!(params.name.as_deref(), Some("A"));
        assert_eq!(params.limit, Some(0));
    }

    #[test]
    fn test_sort_key_names() {
        assert_eq!(SortKey::HighScore.to_string(), "high_score");
        assert_eq!(SortKey::parse("name"), Ok(SortKey::Name));
        assert_eq!(SortKey::default(), SortKey::HighScore);
    }
}
