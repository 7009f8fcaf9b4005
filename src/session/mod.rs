//! Game sessions.
//!
//! A `GameSession` owns everything a single game needs: the board, the turn
//! engine, the score and the leaderboard backend. Nothing is shared between
//! sessions.

mod game;
mod score;

pub use game::{GameSession, SessionError, SessionStatus};
pub use score::SessionScore;
