//! # memory-match
//!
//! Engine for a single-player memory (card matching) game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No drawing, no input handling, no timers.
//!    The engine reports `EngineSignal`s and the presentation layer reacts.
//!
//! 2. **Never Blocks**: A mismatch is signalled immediately. The presentation
//!    layer waits as long as it likes, then calls `conceal_acknowledged`.
//!
//! 3. **Session-Owned State**: Score, board and reveal buffer belong to one
//!    `GameSession`. Nothing is global.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors
//! - `cards`: Faces, instances, deck building
//! - `board`: Row-major grid layout
//! - `rules`: Turn engine and presentation signals
//! - `session`: Game session and score
//! - `leaderboard`: Ranking and persistence
//! - `catalog`: Face lists from configuration files
//! - `autoplay`: Headless perfect-memory player
//! - `logging`: Subscriber setup for binaries

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod session;
pub mod leaderboard;
pub mod catalog;
pub mod autoplay;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng,
    PairCount, ConfigKey, GameConfig, ConfigError,
};

pub use crate::cards::{CardFace, CardInstance, Deck, DeckBuilder, is_match};

pub use crate::board::Board;

pub use crate::rules::{EngineSignal, RevealError, RevealOutcome, ScoreDelta, TurnEngine};

pub use crate::session::{GameSession, SessionError, SessionScore, SessionStatus};

pub use crate::leaderboard::{
    record_and_rank, FileStore, Leaderboard, LeaderboardEntry, LeaderboardError,
    LeaderboardStore, MemoryStore,
};

pub use crate::catalog::{AcceptAll, ArtworkDirectory, FaceCatalog, FaceValidator, LoadedConfig};

pub use crate::autoplay::PerfectMemory;
