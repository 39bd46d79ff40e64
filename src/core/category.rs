//! Word categories
//!
//! Every word belongs to exactly one category. Categories are persisted and
//! configured by their lowercase name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A word category shown in the category picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Sports,
    Household,
    Animals,
    Places,
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: food, sports, household, animals, places)")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Sports,
        Self::Household,
        Self::Animals,
        Self::Places,
    ];

    /// Categories playable without the premium entitlement
    pub const FREE: [Self; 2] = [Self::Food, Self::Household];

    /// Lowercase name, also used as the storage key for completed words
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Sports => "sports",
            Self::Household => "household",
            Self::Animals => "animals",
            Self::Places => "places",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Sports => "⚽",
            Self::Household => "🏠",
            Self::Animals => "🐶",
            Self::Places => "✈",
        }
    }

    /// The category after this one, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or(UnknownCategory(lower))
    }
}
