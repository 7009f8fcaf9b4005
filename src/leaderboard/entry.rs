//! Leaderboard records and their text format.
//!
//! One entry per line: `"<guesses>: <name>"`. Blank lines are ignored when
//! reading. Writing always produces the full list with a trailing newline.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::LeaderboardError;

/// A finished game on the leaderboard. Fewer guesses rank higher.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub guesses: u32,
    pub name: String,
}

impl LeaderboardEntry {
    /// Create an entry. Control characters in the name become spaces.
    pub fn new(guesses: u32, name: impl Into<String>) -> Self {
        Self {
            guesses,
            name: single_line(name.into()),
        }
    }
}

fn single_line(name: String) -> String {
    if name.contains(char::is_control) {
        name.replace(char::is_control, " ")
    } else {
        name
    }
}

impl std::fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // One record per line, even if `name` was edited after construction.
        write!(f, "{}: {}", self.guesses, single_line(self.name.clone()))
    }
}

impl FromStr for LeaderboardEntry {
    type Err = LeaderboardError;

    /// Parse `"<guesses>: <name>"`.
    ///
    /// ```
    /// use memory_match::leaderboard::LeaderboardEntry;
    ///
    /// let entry: LeaderboardEntry = "7: stealth player".parse().unwrap();
    /// assert_eq!(entry, LeaderboardEntry::new(7, "stealth player"));
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || LeaderboardError::MalformedEntry(line.to_string());

        let (guesses, name) = line.split_once(':').ok_or_else(malformed)?;
        let guesses = guesses.trim().parse::<u32>().map_err(|_| malformed())?;
        let name = name.strip_prefix(' ').unwrap_or(name);

        Ok(Self::new(guesses, name))
    }
}

/// Parse a whole leaderboard file, skipping blank lines.
pub fn parse_records(text: &str) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Format entries one per line, in the given order.
#[must_use]
pub fn format_records(entries: &[LeaderboardEntry]) -> String {
    entries.iter().map(|entry| format!("{entry}\n")).collect()
}
