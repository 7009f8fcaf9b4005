//! Per-configuration leaderboards.
//!
//! ## Key Types
//!
//! - `LeaderboardEntry`: One finished game, `"<guesses>: <name>"` on disk
//! - `record_and_rank`: Append a result and rank by guesses, ties stable
//! - `Leaderboard`: Ranked list plus the load/rank/save transaction
//! - `LeaderboardStore`: Storage backend (`FileStore`, `MemoryStore`)

pub mod entry;
pub mod error;
pub mod ranking;
pub mod store;

pub use entry::{format_records, parse_records, LeaderboardEntry};
pub use error::LeaderboardError;
pub use ranking::{record_and_rank, Leaderboard, DEFAULT_TOP_N};
pub use store::{FileStore, LeaderboardStore, MemoryStore};
