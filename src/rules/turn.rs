//! Turn engine: reveal, resolve, conceal.
//!
//! A turn is two reveals followed by one resolution. The engine keeps the
//! ids of face-up, unresolved cards in a `RevealBuffer` (never more than
//! two) and resolves synchronously when the second card is revealed:
//!
//! - Match: both cards retire, `matches += 1`
//! - Mismatch: both cards stay face-up until the presentation layer calls
//!   `conceal_acknowledged` for each of them, and neither can be revealed
//!   again until both have been acknowledged
//!
//! Either way `guesses += 1` and the buffer is emptied.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::cards::is_match;
use crate::core::entity::CardId;

/// Ids of face-up cards awaiting resolution. Holds 0, 1 or 2 entries.
pub type RevealBuffer = SmallVec<[CardId; 2]>;

/// Score change produced by one reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreDelta {
    pub guesses: u32,
    pub matches: u32,
}

/// What a successful reveal did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First card of a turn; waiting for the second.
    Waiting(CardId),
    /// Second card matched the first. Both are retired.
    Matched(CardId, CardId),
    /// Second card did not match. Both are pending conceal.
    Mismatched(CardId, CardId),
}

impl RevealOutcome {
    /// Score change caused by this outcome.
    #[must_use]
    pub fn score_delta(self) -> ScoreDelta {
        match self {
            RevealOutcome::Waiting(_) => ScoreDelta::default(),
            RevealOutcome::Matched(..) => ScoreDelta { guesses: 1, matches: 1 },
            RevealOutcome::Mismatched(..) => ScoreDelta { guesses: 1, matches: 0 },
        }
    }
}

/// A reveal or conceal that was refused. State is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealError {
    #[error("{0} is not on the board")]
    UnknownCard(CardId),

    #[error("{0} is already matched")]
    Retired(CardId),

    #[error("{0} is already face-up")]
    AlreadyRevealed(CardId),

    #[error("{0} was mismatched and has not been concealed yet")]
    AwaitingConceal(CardId),

    #[error("two cards are already face-up")]
    BufferFull,

    #[error("{0} is not waiting to be concealed")]
    NotPendingConceal(CardId),
}

/// A mismatched pair waiting for the presentation layer.
///
/// Both cards stay locked until both have been acknowledged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ConcealPair {
    cards: [CardId; 2],
    concealed: [bool; 2],
}

impl ConcealPair {
    fn new(first: CardId, second: CardId) -> Self {
        Self {
            cards: [first, second],
            concealed: [false; 2],
        }
    }

    fn contains(&self, id: CardId) -> bool {
        self.cards.contains(&id)
    }

    fn awaiting(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards
            .iter()
            .zip(self.concealed)
            .filter(|&(_, done)| !done)
            .map(|(&id, _)| id)
    }

    fn is_done(&self) -> bool {
        self.concealed.iter().all(|&done| done)
    }
}

/// Tracks face-up cards and resolves turns.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    buffer: RevealBuffer,

    /// Mismatched pairs the presentation layer has not fully concealed yet.
    pending: SmallVec<[ConcealPair; 2]>,
}

impl TurnEngine {
    /// Create an engine with nothing face-up.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Face-up cards of the current, unresolved turn.
    #[must_use]
    pub fn buffer(&self) -> &[CardId] {
        &self.buffer
    }

    /// Mismatched cards still waiting for `conceal_acknowledged`.
    #[must_use]
    pub fn pending_conceal(&self) -> Vec<CardId> {
        self.pending.iter().flat_map(ConcealPair::awaiting).collect()
    }

    /// Is this card waiting to be concealed?
    #[must_use]
    pub fn is_pending_conceal(&self, id: CardId) -> bool {
        self.pending.iter().any(|pair| pair.awaiting().any(|pending| pending == id))
    }

    /// Is this card part of a mismatched pair that is not fully concealed?
    #[must_use]
    pub fn is_locked(&self, id: CardId) -> bool {
        self.pending.iter().any(|pair| pair.contains(id))
    }

    /// Check whether `id` may be revealed right now.
    pub fn check_reveal(&self, board: &Board, id: CardId) -> Result<(), RevealError> {
        let card = board.card(id).ok_or(RevealError::UnknownCard(id))?;

        if card.retired {
            return Err(RevealError::Retired(id));
        }
        if self.is_locked(id) {
            return Err(RevealError::AwaitingConceal(id));
        }
        if card.revealed {
            return Err(RevealError::AlreadyRevealed(id));
        }
        if self.buffer.len() >= 2 {
            return Err(RevealError::BufferFull);
        }

        Ok(())
    }

    /// Reveal a card, resolving the turn if it is the second one.
    pub fn reveal(&mut self, board: &mut Board, id: CardId) -> Result<RevealOutcome, RevealError> {
        self.check_reveal(board, id)?;

        if let Some(card) = board.card_mut(id) {
            card.reveal();
        }
        self.buffer.push(id);
        debug!(card = %id, face_up = self.buffer.len(), "card revealed");

        if let [first, second] = self.buffer[..] {
            return Ok(self.resolve(board, first, second));
        }
        Ok(RevealOutcome::Waiting(id))
    }

    fn resolve(&mut self, board: &mut Board, first: CardId, second: CardId) -> RevealOutcome {
        self.buffer.clear();

        let matched = match (board.card(first), board.card(second)) {
            (Some(a), Some(b)) => is_match(a, b),
            _ => false,
        };

        if matched {
            for id in [first, second] {
                if let Some(card) = board.card_mut(id) {
                    card.retire();
                }
            }
            debug!(first = %first, second = %second, "pair matched");
            RevealOutcome::Matched(first, second)
        } else {
            self.pending.push(ConcealPair::new(first, second));
            debug!(first = %first, second = %second, "pair mismatched");
            RevealOutcome::Mismatched(first, second)
        }
    }

    /// Mark a mismatched card face-down again.
    ///
    /// The card stays locked until its partner has been acknowledged too.
    pub fn conceal_acknowledged(&mut self, board: &mut Board, id: CardId) -> Result<(), RevealError> {
        let card = board.card_mut(id).ok_or(RevealError::UnknownCard(id))?;

        let (index, slot) = self
            .pending
            .iter()
            .enumerate()
            .find_map(|(index, pair)| {
                pair.cards
                    .iter()
                    .zip(pair.concealed)
                    .position(|(&pending, done)| pending == id && !done)
                    .map(|slot| (index, slot))
            })
            .ok_or(RevealError::NotPendingConceal(id))?;

        self.pending[index].concealed[slot] = true;
        card.conceal();
        if self.pending[index].is_done() {
            self.pending.remove(index);
        }
        debug!(card = %id, "card concealed");
        Ok(())
    }
}
