//! Signals emitted to the presentation layer.
//!
//! The engine never draws or waits. It reports what changed and the
//! presentation layer reacts: flipping artwork, scheduling the conceal delay
//! after a mismatch, refreshing the scoreboard.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineSignal {
    /// A card was turned face-up.
    CardRevealed(CardId),

    /// Two cards matched and are now retired.
    CardsMatched(CardId, CardId),

    /// Two cards did not match. The presentation layer must call back
    /// `conceal_acknowledged` for both once its observation delay is over.
    CardsMismatched(CardId, CardId),

    /// A mismatched card is face-down again.
    CardConcealed(CardId),

    /// Running score after a resolved turn.
    ScoreChanged { guesses: u32, matches: u32 },

    /// Every pair has been found.
    SessionWon { guesses: u32 },
}

impl EngineSignal {
    /// Card ids this signal refers to.
    #[must_use]
    pub fn cards(&self) -> Vec<CardId> {
        match *self {
            EngineSignal::CardRevealed(id) | EngineSignal::CardConcealed(id) => vec![id],
            EngineSignal::CardsMatched(a, b) | EngineSignal::CardsMismatched(a, b) => vec![a, b],
            EngineSignal::ScoreChanged { .. } | EngineSignal::SessionWon { .. } => Vec::new(),
        }
    }
}
