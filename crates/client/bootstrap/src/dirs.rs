//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

/// Get the platform-specific data directory for the word game
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/wordgame`
/// - Linux: `~/.local/share/wordgame` (or `$XDG_DATA_HOME/wordgame`)
/// - Windows: `%APPDATA%\wordgame`
/// - Fallback: `./wordgame_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wordgame")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./wordgame_data"))
}

/// Default location of the leaderboard score file.
pub fn default_scores_path() -> PathBuf {
    data_dir().join("scores.jsonl")
}
