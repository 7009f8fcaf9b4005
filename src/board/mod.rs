//! Board layout for dealt cards.
//!
//! The board is pure indexing: a fixed-width, row-major grid over the deck
//! plus id lookup. It replaces any notion of screen geometry.

pub mod layout;

pub use layout::Board;
