//! Grid layout and card lookup.
//!
//! The `Board` places cards in row-major order: row `r`, column `c` holds
//! deck position `r * columns + c`. The last row may be partial. There are
//! no coordinates here; drawing is the presentation layer's job.

use rustc_hash::FxHashMap;

use crate::cards::{CardInstance, Deck};
use crate::core::entity::CardId;
use crate::core::error::ConfigError;

/// Manages the cards of a session and where they sit on the grid.
///
/// ## Usage
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::cards::{CardFace, DeckBuilder};
/// use memory_match::core::GameRng;
///
/// let faces: Vec<CardFace> = ["a", "b", "c", "d", "e"].into_iter().map(CardFace::from).collect();
/// let deck = DeckBuilder::new(5).build(&faces, &mut GameRng::new(1)).unwrap();
/// let board = Board::layout(deck, 4).unwrap();
///
/// assert_eq!(board.rows(), 3);
/// assert!(board.card_at(2, 1).is_some());
/// assert!(board.card_at(2, 2).is_none()); // last row holds only two cards
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    /// Cards in deal (row-major) order.
    cards: Vec<CardInstance>,

    /// Card id -> position in `cards`.
    positions: FxHashMap<CardId, usize>,

    columns: usize,
}

impl Board {
    /// Lay a deck out on a grid `columns` wide.
    pub fn layout(deck: Deck, columns: usize) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::InvalidColumns);
        }

        let cards = deck.into_cards();
        let positions = cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.id, index))
            .collect();

        Ok(Self {
            cards,
            positions,
            columns,
        })
    }

    /// Grid width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows, counting a final partial row.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cards.len().div_ceil(self.columns)
    }

    /// Total cards on the board (retired included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// The card at a grid cell, if that cell is occupied.
    #[must_use]
    pub fn card_at(&self, row: usize, col: usize) -> Option<&CardInstance> {
        if col >= self.columns {
            return None;
        }
        let index = row.checked_mul(self.columns)?.checked_add(col)?;
        self.cards.get(index)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardInstance> {
        self.positions.get(&id).map(|&index| &self.cards[index])
    }

    /// Look up a card by id for mutation.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut CardInstance> {
        let index = *self.positions.get(&id)?;
        self.cards.get_mut(index)
    }

    /// Grid cell of a card.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<(usize, usize)> {
        self.positions
            .get(&id)
            .map(|&index| (index / self.columns, index % self.columns))
    }

    /// Iterate over cards in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Iterate over rows; the last one may be shorter than `columns()`.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CardInstance]> {
        self.cards.chunks(self.columns)
    }

    /// Cards the player can still click.
    pub fn interactive(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter().filter(|c| c.is_interactive())
    }
}
