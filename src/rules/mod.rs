//! Turn rules for the memory game.
//!
//! - `TurnEngine`: reveal buffer, match detection, conceal protocol
//! - `EngineSignal`: what the presentation layer is told after each event
//!
//! The engine never blocks. A mismatch is reported immediately and the two
//! cards stay face-up until the presentation layer acknowledges the conceal.

pub mod turn;
pub mod signal;

pub use turn::{RevealBuffer, RevealError, RevealOutcome, ScoreDelta, TurnEngine};
pub use signal::EngineSignal;
