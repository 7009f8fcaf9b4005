//! Card system: faces, instances, and deck construction.
//!
//! ## Key Types
//!
//! - `CardFace`: Artwork identifier, shared by the two cards of a pair
//! - `CardInstance`: Runtime card state (revealed, retired)
//! - `Deck`: Shuffled, duplicated set of instances
//! - `DeckBuilder`: Builds a `Deck` from an ordered face list

pub mod face;
pub mod instance;
pub mod deck;

pub use face::CardFace;
pub use instance::{is_match, CardInstance};
pub use deck::{Deck, DeckBuilder};
