//! Deck construction.
//!
//! The `DeckBuilder` turns an ordered face list into a shuffled deck where
//! every face appears exactly twice. Ids are assigned before the shuffle so
//! they identify instances, not positions.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::face::CardFace;
use super::instance::CardInstance;
use crate::core::entity::CardId;
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// An ordered, shuffled set of card instances.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardInstance>,
}

impl Deck {
    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Iterate over cards in deal order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// How many instances show each face.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<&CardFace, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(&card.face).or_insert(0) += 1;
        }
        counts
    }

    /// Consume the deck, yielding its cards in deal order.
    #[must_use]
    pub fn into_cards(self) -> Vec<CardInstance> {
        self.cards
    }
}

impl IntoIterator for Deck {
    type Item = CardInstance;
    type IntoIter = std::vec::IntoIter<CardInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Builds shuffled decks from a face list.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardFace, DeckBuilder};
/// use memory_match::core::GameRng;
///
/// let faces: Vec<CardFace> = ["owl", "cat", "fox"].into_iter().map(CardFace::from).collect();
/// let deck = DeckBuilder::new(2).build(&faces, &mut GameRng::new(42)).unwrap();
///
/// assert_eq!(deck.len(), 4);
/// assert!(deck.iter().all(|c| c.face.as_str() != "fox"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder {
    pairs: usize,
}

impl DeckBuilder {
    /// Create a builder that deals `pairs` pairs.
    #[must_use]
    pub fn new(pairs: usize) -> Self {
        Self { pairs }
    }

    /// Pick the faces to deal: the first `pairs` distinct entries in order.
    pub fn select_faces<'a>(&self, faces: &'a [CardFace]) -> Result<Vec<&'a CardFace>, ConfigError> {
        let mut seen = FxHashSet::default();
        let selected: Vec<_> = faces
            .iter()
            .filter(|face| seen.insert(face.as_str()))
            .take(self.pairs)
            .collect();

        if selected.len() < self.pairs {
            return Err(ConfigError::InsufficientFaces {
                required: self.pairs,
                available: selected.len(),
            });
        }

        Ok(selected)
    }

    /// Build a shuffled deck.
    ///
    /// Ids `0..2*pairs` are assigned to the duplicated face list, then the
    /// whole sequence is shuffled.
    pub fn build(&self, faces: &[CardFace], rng: &mut GameRng) -> Result<Deck, ConfigError> {
        let selected = self.select_faces(faces)?;

        let mut next_id = CardId::new(0);
        let mut cards = Vec::with_capacity(selected.len() * 2);
        for face in selected.iter().chain(selected.iter()) {
            cards.push(CardInstance::new(next_id, (*face).clone()));
            next_id = next_id.next();
        }

        rng.shuffle(&mut cards);

        debug!(pairs = self.pairs, cards = cards.len(), "deck built");

        Ok(Deck { cards })
    }
}
