//! Engine configuration.
//!
//! - `Difficulty`: which move selector the computer opponent uses
//! - `EngineConfig`: difficulty plus an optional RNG seed
//!
//! Settings are resolved with the following priority (highest to lowest):
//! 1. Environment variables (`TTT_DIFFICULTY`, `TTT_SEED`)
//! 2. A TOML file
//! 3. Built-in defaults
//!
//! ```text
//! difficulty = "hard"
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use super::error::ConfigError;

/// Environment variable overriding the difficulty.
pub const ENV_DIFFICULTY: &str = "TTT_DIFFICULTY";

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "TTT_SEED";

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Fixed-priority heuristic: win, block, center, corner, side.
    Hard,
}

impl Difficulty {
    /// Case-insensitive parse that never fails.
    ///
    /// Unrecognized values fall back to [`Difficulty::Easy`].
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warn!(value, "unrecognized difficulty, using easy");
            Difficulty::Easy
        })
    }

    /// Resolve an optional setting, defaulting to easy when absent.
    #[must_use]
    pub fn from_option(value: Option<&str>) -> Self {
        value.map_or_else(Self::default, Self::parse_lenient)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Computer opponent strength.
    #[serde(deserialize_with = "lenient_difficulty")]
    pub difficulty: Difficulty,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Difficulty, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Difficulty::parse_lenient(&raw))
}

impl EngineConfig {
    /// Create a config with the given difficulty and no fixed seed.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty, seed: None }
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file, then apply environment overrides.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded engine config");
        Ok(config.apply_env_overrides())
    }

    /// Like [`EngineConfig::load_from_path`], falling back to defaults on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from_path(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "using default engine config");
            Self::default().apply_env_overrides()
        })
    }

    /// Apply `TTT_DIFFICULTY` and `TTT_SEED` from the process environment.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    #[must_use]
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(ENV_DIFFICULTY) {
            self.difficulty = Difficulty::parse_lenient(&v);
        }
        if let Some(v) = lookup(ENV_SEED) {
            match v.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!(value = %v, "ignoring unparseable {}", ENV_SEED),
            }
        }
        self
    }
}
