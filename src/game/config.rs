//! Game configuration
//!
//! Every field has a default, so an empty (or absent) config file is valid.
//!
//! ```toml
//! max_lives = 4
//! interstitial_every = 3
//! free_categories = ["food", "household"]
//! unlock_all = false
//! ```

use crate::core::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of lives a player holds
pub const DEFAULT_MAX_LIVES: u8 = 4;

/// Default reveal cadence for interstitial requests
pub const DEFAULT_INTERSTITIAL_EVERY: usize = 3;

/// Errors from loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Tunable game rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Lives restored by a refill or reward grant
    pub max_lives: u8,
    /// Request an interstitial on reveal numbers 0, n, 2n, ...; 0 disables
    pub interstitial_every: usize,
    /// Categories playable without the premium entitlement
    pub free_categories: Vec<Category>,
    /// Treat every category as unlocked
    pub unlock_all: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_lives: DEFAULT_MAX_LIVES,
            interstitial_every: DEFAULT_INTERSTITIAL_EVERY,
            free_categories: Category::FREE.to_vec(),
            unlock_all: false,
        }
    }
}

impl GameConfig {
    /// Parse a TOML config
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed TOML or unknown keys, and
    /// `ConfigError::Invalid` if `max_lives` is zero.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    ///
    /// # Errors
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// same errors as [`GameConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lives == 0 {
            return Err(ConfigError::Invalid("max_lives must be at least 1".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_free(&self, category: Category) -> bool {
        self.free_categories.contains(&category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_lives, 4);
        assert_eq!(config.interstitial_every, 3);
        assert!(config.is_free(Category::Food));
        assert!(config.is_free(Category::Household));
        assert!(!config.is_free(Category::Sports));
        assert!(!config.unlock_all);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = GameConfig::from_toml_str(
            "max_lives = 6\nfree_categories = [\"animals\"]\n",
        )
        .unwrap();
        assert_eq!(config.max_lives, 6);
        assert_eq!(config.interstitial_every, 3);
        assert!(config.is_free(Category::Animals));
        assert!(!config.is_free(Category::Food));
    }

    #[test]
    fn rejects_unknown_keys_and_zero_lives() {
        assert!(matches!(
            GameConfig::from_toml_str("lives = 3"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("max_lives = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("free_categories = [\"vehicles\"]"),
            Err(ConfigError::Toml(_))
        ));
    }
}
