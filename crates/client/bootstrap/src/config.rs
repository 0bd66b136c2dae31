//! Service configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::{AnagrammerOracle, MAX_LETTERS, RoundPolicy};
use strum::{Display, EnumString};

/// Which word oracle backs round validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OracleKind {
    /// Scrape the anagrammer.com unscrambler (network required)
    #[default]
    Anagrammer,
    /// Answer from a local word list
    Dictionary,
}

#[derive(Clone, Debug)]
pub struct OracleConfig {
    pub kind: OracleKind,
    pub base_url: String,
    pub timeout: Duration,
    pub dictionary: Option<PathBuf>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            kind: OracleKind::default(),
            base_url: AnagrammerOracle::DEFAULT_BASE_URL.to_string(),
            timeout: AnagrammerOracle::DEFAULT_TIMEOUT,
            dictionary: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    /// Keep scores in process memory only
    pub in_memory: bool,
    /// Score file; defaults to the platform data directory
    pub scores_path: Option<PathBuf>,
}

/// Configuration required to bootstrap the round and leaderboard services.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub letter_count: usize,
    pub policy: RoundPolicy,
    pub oracle: OracleConfig,
    pub storage: StorageConfig,
    pub log_dir: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            letter_count: Self::DEFAULT_LETTER_COUNT,
            policy: RoundPolicy::default(),
            oracle: OracleConfig::default(),
            storage: StorageConfig::default(),
            log_dir: None,
        }
    }
}

impl ServiceConfig {
    pub const DEFAULT_LETTER_COUNT: usize = 7;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WORDGAME_LETTER_COUNT` - Letters per round (default: 7)
    /// - `WORDGAME_MAX_ATTEMPTS` - Round attempt cap, 0 for none (default: 50)
    /// - `WORDGAME_ROUND_DEADLINE_SECS` - Seconds per round, 0 for none (default: 30)
    /// - `WORDGAME_ORACLE` - `anagrammer` or `dictionary` (default: anagrammer)
    /// - `WORDGAME_ORACLE_URL` - Anagrammer results page prefix
    /// - `WORDGAME_ORACLE_TIMEOUT_SECS` - HTTP timeout (default: 10)
    /// - `WORDGAME_DICTIONARY` - Word list for the dictionary oracle
    /// - `WORDGAME_SCORES_PATH` - Score file (default: platform data dir)
    /// - `WORDGAME_IN_MEMORY_SCORES` - Keep scores in memory only (default: false)
    /// - `WORDGAME_LOG_DIR` - Also write logs to this directory (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    ///
    /// Unparseable or out-of-range values are logged and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let parse = |key: &str| read(key).and_then(|value| parse_value::<u64>(key, &value));

        let mut config = Self::default();

        if let Some(count) = parse("WORDGAME_LETTER_COUNT") {
            match usize::try_from(count) {
                Ok(count @ 1..=MAX_LETTERS) => config.letter_count = count,
                _ => tracing::warn!(
                    "Ignoring WORDGAME_LETTER_COUNT={}: must be between 1 and {}",
                    count,
                    MAX_LETTERS
                ),
            }
        }

        // Zero turns a limit off
        if let Some(attempts) = parse("WORDGAME_MAX_ATTEMPTS") {
            let attempts = u32::try_from(attempts).unwrap_or(u32::MAX);
            config.policy.max_attempts = (attempts > 0).then_some(attempts);
        }
        if let Some(secs) = parse("WORDGAME_ROUND_DEADLINE_SECS") {
            config.policy.deadline = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(kind) =
            read("WORDGAME_ORACLE").and_then(|value| parse_value("WORDGAME_ORACLE", &value))
        {
            config.oracle.kind = kind;
        }
        if let Some(url) = read("WORDGAME_ORACLE_URL") {
            config.oracle.base_url = url;
        }
        if let Some(secs) = parse("WORDGAME_ORACLE_TIMEOUT_SECS") {
            config.oracle.timeout = Duration::from_secs(secs.max(1));
        }
        config.oracle.dictionary = read("WORDGAME_DICTIONARY").map(PathBuf::from);

        config.storage.in_memory = read("WORDGAME_IN_MEMORY_SCORES")
            .and_then(|value| parse_value::<bool>("WORDGAME_IN_MEMORY_SCORES", &value))
            .unwrap_or(false);
        config.storage.scores_path = read("WORDGAME_SCORES_PATH").map(PathBuf::from);

        config.log_dir = read("WORDGAME_LOG_DIR").map(PathBuf::from);

        config
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!("Ignoring unparseable {}={:?}", key, value);
    }
    parsed
}
