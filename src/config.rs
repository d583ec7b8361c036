//! The `sort-strategy.toml` config file.
//!
//! Every field is optional. If the file does not exist, or defines no
//! profiles, a `default` profile with built-in values is used.
//!
//! # Example:
//!
//! ```toml
//! [profiles.default]
//! strategy = "merge"        # Optional. Default to "bubble"
//! sample = [5, 3, 9, 1]     # Optional. Data used by `demo` and `sort`
//! iterations = 3            # Optional. Default to 5
//! len = 1000                # Optional. Input length for `compare`. Default to 2000
//! seed = 7                  # Optional. Default to 42
//! price = 250.0             # Optional. Default to 100.0
//! discounts = [10.0, 50.0]  # Optional. Default to [20.0]
//!
//! [profiles.large]
//! len = 20000
//! iterations = 1
//! ```
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::strategy::Algorithm;

pub const DEFAULT_CONFIG_FILE: &str = "sort-strategy.toml";
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Config {
    /// Parse a config from TOML text, inserting a default profile if none is defined.
    pub fn from_toml(s: &str) -> anyhow::Result<Config> {
        let mut config = toml::from_str::<Config>(s)?;
        if config.profiles.is_empty() {
            config
                .profiles
                .insert(DEFAULT_PROFILE.to_owned(), Default::default());
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&s)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise `./sort-strategy.toml` if it exists,
    /// otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Config> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }
        Ok(Config::default())
    }

    pub fn profile(&self, name: &str) -> anyhow::Result<&Profile> {
        let Some(profile) = self.profiles.get(name) else {
            anyhow::bail!("Could not find profile `{}`", name);
        };
        Ok(profile)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles: [(DEFAULT_PROFILE.to_owned(), Default::default())]
                .into_iter()
                .collect(),
        }
    }
}

fn default_strategy() -> Algorithm {
    Algorithm::Bubble
}

fn default_sample() -> Vec<i64> {
    vec![64, 34, 25, 12, 22, 11, 90, 5]
}

fn default_iterations() -> usize {
    5
}

fn default_len() -> usize {
    2000
}

fn default_seed() -> u64 {
    42
}

fn default_price() -> f64 {
    100.0
}

fn default_discounts() -> Vec<f64> {
    vec![20.0]
}

/// A named set of defaults for the command line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    /// Strategy used by `sort` when none is given on the command line
    #[serde(default = "default_strategy")]
    pub strategy: Algorithm,
    /// Data sorted by `demo`, and by `sort` when no values are given
    #[serde(default = "default_sample")]
    pub sample: Vec<i64>,
    /// Number of iterations per strategy in `compare`. Default is 5
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Input length for `compare`
    #[serde(default = "default_len")]
    pub len: usize,
    /// Random seed for `compare`
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_price")]
    pub price: f64,
    /// Percentage discounts tried by `checkout`
    #[serde(default = "default_discounts")]
    pub discounts: Vec<f64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            sample: default_sample(),
            iterations: default_iterations(),
            len: default_len(),
            seed: default_seed(),
            price: default_price(),
            discounts: default_discounts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gets_default_profile() -> anyhow::Result<()> {
        let config = Config::from_toml("")?;
        assert_eq!(config.profile(DEFAULT_PROFILE)?, &Profile::default());
        Ok(())
    }

    #[test]
    fn partial_profile_keeps_other_defaults() -> anyhow::Result<()> {
        let config = Config::from_toml(
            r#"
            [profiles.fast]
            strategy = "quick"
            len = 10
            "#,
        )?;
        let profile = config.profile("fast")?;
        assert_eq!(profile.strategy, Algorithm::Quick);
        assert_eq!(profile.len, 10);
        assert_eq!(profile.iterations, 5);
        assert_eq!(profile.sample, default_sample());
        assert!(config.profile(DEFAULT_PROFILE).is_err());
        Ok(())
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = Config::from_toml(
            r#"
            [profiles.default]
            strategy = "heap"
            "#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn missing_profile_is_reported() {
        let err = Config::default().profile("nope").unwrap_err();
        assert_eq!(err.to_string(), "Could not find profile `nope`");
    }
}
