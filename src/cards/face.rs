//! Card faces - what a card shows when revealed.
//!
//! A `CardFace` names the artwork on the front of a card. It is not unique
//! per card: every face appears on exactly two instances in a deck.

use serde::{Deserialize, Serialize};

/// Identifier of the artwork shown on a revealed card.
///
/// ```
/// use memory_match::cards::CardFace;
///
/// let face = CardFace::new("cat.gif");
/// assert_eq!(face.as_str(), "cat.gif");
/// assert_eq!(face, CardFace::from("cat.gif"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardFace(String);

impl CardFace {
    /// Create a new face.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the face name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardFace {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CardFace {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for CardFace {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

impl AsRef<str> for CardFace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
