//! Session configuration types.
//!
//! A session is configured at startup by providing:
//! - `PairCount`: How many pairs are dealt (4, 5 or 6)
//! - `ConfigKey`: Which face list is used, and which leaderboard it feeds
//! - `GameConfig`: Combines the above with faces, player name and layout
//!
//! Raw player input (names, card counts) is normalized here so that the
//! engine only ever sees valid values.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::CardFace;

/// Name of the configuration used when none is given or the chosen one fails.
pub const DEFAULT_CONFIG_NAME: &str = "card";

/// Name recorded for players who leave the name prompt blank.
pub const DEFAULT_PLAYER_NAME: &str = "stealth player";

/// Longest player name kept on the leaderboard.
pub const MAX_PLAYER_NAME_LEN: usize = 14;

/// Default board width.
pub const DEFAULT_COLUMNS: usize = 4;

/// Number of pairs dealt. Only 8, 10 and 12 card games exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairCount {
    #[default]
    Four,
    Five,
    Six,
}

/// Result of interpreting free-form card count input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardCountChoice {
    /// The pair count that will be played.
    pub pair_count: PairCount,
    /// True when the input was blank, unparseable or out of range.
    pub adjusted: bool,
}

impl PairCount {
    /// All permitted pair counts, smallest first.
    pub const ALL: [PairCount; 3] = [PairCount::Four, PairCount::Five, PairCount::Six];

    /// Number of distinct faces (pairs) dealt.
    #[must_use]
    pub const fn pairs(self) -> usize {
        match self {
            PairCount::Four => 4,
            PairCount::Five => 5,
            PairCount::Six => 6,
        }
    }

    /// Total cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pairs() * 2
    }

    /// Exact conversion from a total card count.
    pub fn from_card_count(cards: usize) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|p| p.card_count() == cards)
            .ok_or(ConfigError::InvalidCardCount(cards))
    }

    /// Snap any card count to the nearest playable one.
    ///
    /// Odd counts round down, anything outside 8..=12 is pinned to the edge.
    #[must_use]
    pub fn clamp_card_count(cards: i64) -> Self {
        match cards {
            i64::MIN..=9 => PairCount::Four,
            10 | 11 => PairCount::Five,
            _ => PairCount::Six,
        }
    }

    /// Interpret text typed at the card count prompt.
    ///
    /// Decimal input is rounded; blank or non-numeric input falls back to 8.
    ///
    /// ```
    /// use memory_match::core::PairCount;
    ///
    /// assert_eq!(PairCount::parse_card_count("10").pair_count, PairCount::Five);
    /// assert_eq!(PairCount::parse_card_count("11.6").pair_count, PairCount::Six);
    /// assert!(PairCount::parse_card_count("lots").adjusted);
    /// ```
    #[must_use]
    pub fn parse_card_count(input: &str) -> CardCountChoice {
        let parsed = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.round() as i64);

        match parsed {
            Some(cards) => {
                let pair_count = Self::clamp_card_count(cards);
                CardCountChoice {
                    pair_count,
                    adjusted: pair_count.card_count() as i64 != cards,
                }
            }
            None => CardCountChoice {
                pair_count: PairCount::default(),
                adjusted: true,
            },
        }
    }
}

impl std::fmt::Display for PairCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cards", self.card_count())
    }
}

/// Identifies a face configuration and the leaderboard it owns.
///
/// ```
/// use memory_match::core::{ConfigKey, PairCount};
///
/// let key = ConfigKey::new("winston", PairCount::Five);
/// assert_eq!(key.config_file_name(), "winston_config_10.txt");
/// assert_eq!(key.leaderboard_file_name(), "winston_config_10_leaderboard.txt");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigKey {
    /// Configuration name (e.g. `card`, `winston`, `hp`).
    pub name: String,
    /// Pair count this configuration is played at.
    pub pair_count: PairCount,
}

impl ConfigKey {
    /// Create a configuration key.
    pub fn new(name: impl Into<String>, pair_count: PairCount) -> Self {
        Self {
            name: name.into(),
            pair_count,
        }
    }

    /// The default `card` configuration at the given size.
    #[must_use]
    pub fn default_for(pair_count: PairCount) -> Self {
        Self::new(DEFAULT_CONFIG_NAME, pair_count)
    }

    /// Build a key from prompt input. Blank input selects the default.
    #[must_use]
    pub fn from_input(input: &str, pair_count: PairCount) -> Self {
        match input.trim() {
            "" => Self::default_for(pair_count),
            name => Self::new(name, pair_count),
        }
    }

    /// Check if this is the default configuration.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_CONFIG_NAME
    }

    /// Shared stem of the config and leaderboard file names.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}_config_{}", self.name, self.pair_count.card_count())
    }

    /// File holding the face list, one face per line.
    #[must_use]
    pub fn config_file_name(&self) -> String {
        format!("{}.txt", self.file_stem())
    }

    /// File holding the ranked leaderboard for this configuration.
    #[must_use]
    pub fn leaderboard_file_name(&self) -> String {
        format!("{}_leaderboard.txt", self.file_stem())
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_stem())
    }
}

/// Normalize a player name for the leaderboard.
///
/// Control characters become spaces so the name stays on one leaderboard
/// line. Blank names become `"stealth player"`; others are trimmed, cut to
/// 14 characters and lowercased.
#[must_use]
pub fn normalize_player_name(raw: &str) -> String {
    let single_line = raw.replace(char::is_control, " ");
    let trimmed = single_line.trim();
    if trimmed.is_empty() {
        return DEFAULT_PLAYER_NAME.to_string();
    }
    trimmed
        .chars()
        .take(MAX_PLAYER_NAME_LEN)
        .collect::<String>()
        .to_lowercase()
}

/// Complete session configuration.
///
/// ```
/// use memory_match::core::{ConfigKey, GameConfig, PairCount};
///
/// let config = GameConfig::new(ConfigKey::default_for(PairCount::Four), ["a", "b", "c", "d"])
///     .with_player("Alice")
///     .with_seed(7);
///
/// assert_eq!(config.player_name, "alice");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Which configuration is being played.
    pub key: ConfigKey,

    /// Ordered face list. The first `pairs()` distinct faces are dealt.
    pub faces: Vec<CardFace>,

    /// Normalized player name.
    pub player_name: String,

    /// Board width.
    pub columns: usize,

    /// Shuffle seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with default player, layout and seed.
    pub fn new<I, F>(key: ConfigKey, faces: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<CardFace>,
    {
        Self {
            key,
            faces: faces.into_iter().map(Into::into).collect(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            columns: DEFAULT_COLUMNS,
            seed: None,
        }
    }

    /// Set the player name (normalized).
    #[must_use]
    pub fn with_player(mut self, name: &str) -> Self {
        self.player_name = normalize_player_name(name);
        self
    }

    /// Set the board width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.key.pair_count.pairs()
    }

    /// Count distinct faces, in list order.
    #[must_use]
    pub fn distinct_faces(&self) -> usize {
        let mut seen = rustc_hash::FxHashSet::default();
        self.faces.iter().filter(|f| seen.insert(f.as_str())).count()
    }

    /// Check the configuration can produce a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::InvalidColumns);
        }

        let available = self.distinct_faces();
        if available < self.pairs() {
            return Err(ConfigError::InsufficientFaces {
                required: self.pairs(),
                available,
            });
        }

        Ok(())
    }
}
