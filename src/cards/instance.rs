//! Card instances - runtime card state.
//!
//! `CardInstance` represents one physical card on the board. It is created
//! once by the deck builder and lives for the whole session.
//!
//! ## Lifecycle
//!
//! - Face-down: `revealed == false`, interactive
//! - Face-up: `revealed == true`, waiting for the turn to resolve
//! - Retired: matched; permanently face-up and no longer interactive
//!
//! Retired cards are never removed from the board, only taken out of play.

use serde::{Deserialize, Serialize};

use super::face::CardFace;
use crate::core::entity::CardId;

/// A card instance in a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this instance.
    pub id: CardId,

    /// Artwork shown when revealed.
    pub face: CardFace,

    /// Is this card currently face-up?
    pub revealed: bool,

    /// Has this card been matched and taken out of play?
    pub retired: bool,
}

impl CardInstance {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, face: CardFace) -> Self {
        Self {
            id,
            face,
            revealed: false,
            retired: false,
        }
    }

    /// Can the player still click this card?
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.retired && !self.revealed
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the card face-down again. Retired cards stay face-up.
    pub fn conceal(&mut self) {
        if !self.retired {
            self.revealed = false;
        }
    }

    /// Take a matched card out of play.
    pub fn retire(&mut self) {
        self.revealed = true;
        self.retired = true;
    }
}

/// Two instances match when they show the same face and are different cards.
///
/// A card never matches itself.
///
/// ```
/// use memory_match::cards::{is_match, CardInstance};
/// use memory_match::core::CardId;
///
/// let a = CardInstance::new(CardId(0), "owl".into());
/// let b = CardInstance::new(CardId(1), "owl".into());
/// let c = CardInstance::new(CardId(2), "cat".into());
///
/// assert!(is_match(&a, &b));
/// assert!(!is_match(&a, &a));
/// assert!(!is_match(&a, &c));
/// ```
#[must_use]
pub fn is_match(a: &CardInstance, b: &CardInstance) -> bool {
    a.face == b.face && a.id != b.id
}
