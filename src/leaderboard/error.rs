use thiserror::Error;

/// Errors raised while loading or saving a leaderboard.
///
/// A missing leaderboard is not an error: it loads as an empty list.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("malformed leaderboard line: {0:?}")]
    MalformedEntry(String),

    #[error("leaderboard storage error: {0}")]
    Io(#[from] std::io::Error),
}
