//! Face lists read from configuration files.
//!
//! A configuration file lists one face per line. Files are named after their
//! `ConfigKey` (`<name>_config_<cards>.txt`) and live in one directory.
//!
//! Loading falls back to the default `card` configuration of the same size
//! when the requested one is missing, unreadable, short of faces, or refers to
//! artwork that does not exist.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::validator::FaceValidator;
use crate::cards::CardFace;
use crate::core::config::{ConfigKey, PairCount};
use crate::core::error::ConfigError;

/// Parse a face list: one face per non-blank line, surrounding whitespace
/// removed.
#[must_use]
pub fn parse_faces(text: &str) -> Vec<CardFace> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(CardFace::from)
        .collect()
}

/// A face list ready to be dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The configuration actually loaded.
    pub key: ConfigKey,
    /// Its faces, in file order.
    pub faces: Vec<CardFace>,
    /// True when the requested configuration was replaced by the default.
    pub fell_back: bool,
}

/// Directory of configuration files.
#[derive(Clone, Debug)]
pub struct FaceCatalog {
    config_dir: PathBuf,
}

impl FaceCatalog {
    /// Read configurations from `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// File holding a configuration's faces.
    #[must_use]
    pub fn path_for(&self, key: &ConfigKey) -> PathBuf {
        self.config_dir.join(key.config_file_name())
    }

    /// Load exactly the requested configuration, without fallback.
    pub fn load_exact<V>(&self, key: &ConfigKey, validator: &V) -> Result<Vec<CardFace>, ConfigError>
    where
        V: FaceValidator + ?Sized,
    {
        let text = fs::read_to_string(self.path_for(key))?;
        let faces = parse_faces(&text);

        if let Some(missing) = validator.first_missing(&faces) {
            return Err(ConfigError::MissingArtwork(missing.to_string()));
        }

        let mut distinct: Vec<&str> = faces.iter().map(CardFace::as_str).collect();
        distinct.sort_unstable();
        distinct.dedup();
        let required = key.pair_count.pairs();
        if distinct.len() < required {
            return Err(ConfigError::InsufficientFaces {
                required,
                available: distinct.len(),
            });
        }

        Ok(faces)
    }

    /// Load a configuration, falling back to the default of the same size.
    pub fn load<V>(&self, key: &ConfigKey, validator: &V) -> Result<LoadedConfig, ConfigError>
    where
        V: FaceValidator + ?Sized,
    {
        match self.load_exact(key, validator) {
            Ok(faces) => {
                info!(config = %key, faces = faces.len(), "configuration loaded");
                return Ok(LoadedConfig {
                    key: key.clone(),
                    faces,
                    fell_back: false,
                });
            }
            Err(error) if key.is_default() => {
                warn!(config = %key, %error, "default configuration unusable");
                return Err(ConfigError::NoUsableConfiguration(key.to_string()));
            }
            Err(error) => {
                warn!(config = %key, %error, "configuration unusable, using default");
            }
        }

        let fallback = ConfigKey::default_for(key.pair_count);
        match self.load_exact(&fallback, validator) {
            Ok(faces) => Ok(LoadedConfig {
                key: fallback,
                faces,
                fell_back: true,
            }),
            Err(error) => {
                warn!(config = %fallback, %error, "default configuration unusable");
                Err(ConfigError::NoUsableConfiguration(key.to_string()))
            }
        }
    }

    /// Names of the configurations available at a given size, sorted.
    pub fn available(&self, pair_count: PairCount) -> Result<Vec<String>, ConfigError> {
        let suffix = format!("_config_{}.txt", pair_count.card_count());

        let mut names: Vec<String> = fs::read_dir(&self.config_dir)?
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let file_name = entry.file_name().into_string().ok()?;
                file_name.strip_suffix(&suffix).map(str::to_string)
            })
            .filter(|name| !name.is_empty())
            .collect();

        names.sort();
        Ok(names)
    }
}
