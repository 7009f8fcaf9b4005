//! Scoring and ranking.
//!
//! Entries are ranked by guess count, lowest first. Ties keep insertion
//! order, so an earlier score stays ahead of a later equal one.

use tracing::info;

use super::entry::LeaderboardEntry;
use super::error::LeaderboardError;
use super::store::LeaderboardStore;
use crate::core::config::ConfigKey;

/// Number of leaders shown next to the board.
pub const DEFAULT_TOP_N: usize = 8;

/// Append a new result and rank the whole list.
///
/// ```
/// use memory_match::leaderboard::{record_and_rank, LeaderboardEntry};
///
/// let ranked = record_and_rank(
///     vec![LeaderboardEntry::new(5, "bob"), LeaderboardEntry::new(12, "cara")],
///     "alice",
///     10,
/// );
///
/// let names: Vec<_> = ranked.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["bob", "alice", "cara"]);
/// ```
#[must_use]
pub fn record_and_rank(
    mut existing: Vec<LeaderboardEntry>,
    name: &str,
    guesses: u32,
) -> Vec<LeaderboardEntry> {
    existing.push(LeaderboardEntry::new(guesses, name));
    // `sort_by_key` is stable.
    existing.sort_by_key(|entry| entry.guesses);
    existing
}

/// A ranked leaderboard for one configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Wrap entries that are already ranked.
    #[must_use]
    pub fn from_ranked(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    /// Load the current leaderboard for a configuration.
    pub fn load<S>(store: &S, key: &ConfigKey) -> Result<Self, LeaderboardError>
    where
        S: LeaderboardStore + ?Sized,
    {
        Ok(Self::from_ranked(store.load(key)?))
    }

    /// Record a finished game: load, append, rank, save.
    ///
    /// The whole list is written back in one piece.
    pub fn record<S>(
        store: &mut S,
        key: &ConfigKey,
        name: &str,
        guesses: u32,
    ) -> Result<Self, LeaderboardError>
    where
        S: LeaderboardStore + ?Sized,
    {
        let existing = store.load(key)?;
        let ranked = record_and_rank(existing, name, guesses);
        store.save(key, &ranked)?;

        info!(config = %key, player = name, guesses, entries = ranked.len(), "leaderboard updated");
        Ok(Self::from_ranked(ranked))
    }

    /// All entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The best `n` entries.
    #[must_use]
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// 1-based rank of the latest entry with this name and score.
    #[must_use]
    pub fn rank_of(&self, name: &str, guesses: u32) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|e| e.name == name && e.guesses == guesses)
            .map(|index| index + 1)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nobody has finished this configuration yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
