//! Core engine types: card ids, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every other module.
//! Sessions are configured via `GameConfig` rather than by changing the core.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::CardId;
pub use rng::{GameRng};
pub use config::{
    normalize_player_name, CardCountChoice, ConfigKey, GameConfig, PairCount,
    DEFAULT_COLUMNS, DEFAULT_CONFIG_NAME, DEFAULT_PLAYER_NAME, MAX_PLAYER_NAME_LEN,
};
pub use error::ConfigError;
