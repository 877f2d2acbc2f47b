//! Population configuration via TOML
//!
//! Checks build their populations from a [`PopulationConfig`]. The defaults
//! match the usual fixture (twenty records, random seed, shuffled). A config
//! can also be read from a `roster.toml` file, and the seed can be pinned from
//! the environment to reproduce a failing run.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Config file name looked up by [`PopulationConfig::load`] when given a directory
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Environment variable overriding the population seed
pub const SEED_ENV_VAR: &str = "ROSTER_SEED";

/// Largest population a config may request
pub const MAX_POPULATION: usize = 1_000_000;

/// Default population size
pub const DEFAULT_COUNT: usize = 20;

/// How a population of records is generated.
///
/// # Example
///
/// ```toml
/// # Number of records; identifiers run 1..=count
/// count = 20
///
/// # Fixed RNG seed (omit for a fresh seed each run)
/// seed = 42
///
/// # Shuffle the records after generation
/// shuffle = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of records to generate.
    #[serde(default = "default_count")]
    pub count: usize,
    /// RNG seed; `None` draws one from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Shuffle after generation.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_shuffle() -> bool {
    true
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            seed: None,
            shuffle: default_shuffle(),
        }
    }
}

impl PopulationConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed TOML and `InvalidConfig` for
    /// out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PopulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config from `path`, or from `path/roster.toml` when `path` is a directory.
    pub fn load(path: &Path) -> Result<Self> {
        let file = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        let content = std::fs::read_to_string(&file)?;
        Self::from_toml_str(&content)
    }

    /// Reject empty and oversized populations.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidConfig(
                "count must be at least 1".to_string(),
            ));
        }
        if self.count > MAX_POPULATION {
            return Err(Error::InvalidConfig(format!(
                "count {} exceeds maximum {}",
                self.count, MAX_POPULATION
            )));
        }
        Ok(())
    }

    /// Set the population size.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Pin the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep records in identifier order.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Apply the `ROSTER_SEED` override, if set and valid.
    pub fn seed_from_env(self) -> Self {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => self.seed_from_str(&raw),
            Err(_) => self,
        }
    }

    fn seed_from_str(mut self, raw: &str) -> Self {
        match raw.trim().parse::<u64>() {
            Ok(seed) => self.seed = Some(seed),
            Err(_) => warn!(value = raw, "Ignoring invalid {}", SEED_ENV_VAR),
        }
        self
    }
}
