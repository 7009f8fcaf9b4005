//! Card instance identification.
//!
//! Every card dealt in a session has a unique `CardId`. Ids are assigned
//! once, when the deck is built, and never change afterwards: an id names an
//! instance, not a board position.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::CardId;
//!
//! let first = CardId::new(0);
//! let second = first.next();
//!
//! assert_eq!(second.raw(), 1);
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The id allocated right after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
