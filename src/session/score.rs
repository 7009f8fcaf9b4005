//! Per-session score.

use serde::{Deserialize, Serialize};

use crate::rules::ScoreDelta;

/// Guesses and matches for one session.
///
/// A guess is one resolved turn, whatever its outcome. Owned by exactly one
/// `GameSession`; nothing else writes to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub guesses: u32,
    pub matches: u32,
}

impl SessionScore {
    /// Add a turn's delta.
    pub fn apply(&mut self, delta: ScoreDelta) {
        self.guesses += delta.guesses;
        self.matches += delta.matches;
    }

    /// Scoreboard line, e.g. `"Status: 3 guesses, 1 / 4 matches"`.
    #[must_use]
    pub fn status_text(&self, total_pairs: usize) -> String {
        format!(
            "Status: {} guesses, {} / {} matches",
            self.guesses, self.matches, total_pairs
        )
    }
}
