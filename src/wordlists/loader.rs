//! Word table loading
//!
//! A word table maps each category to its candidate words. It is loaded once
//! at startup, either from the embedded lists or from a JSON file shaped like
//! `{ "food": ["banana", "cherry"], "sports": ["soccer"] }`, and never
//! changes afterwards.

use crate::core::{Category, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Errors from loading a custom word table
#[derive(Debug, thiserror::Error)]
pub enum WordTableError {
    #[error("failed to read word table: {0}")]
    Io(#[from] io::Error),
    #[error("word table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable category → words mapping
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    lists: FxHashMap<Category, Vec<Word>>,
}

impl WordTable {
    /// Table built from the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_named_lists(
            super::WORD_TABLE
                .iter()
                .map(|&(name, words)| (name, words.iter().copied())),
        )
    }

    /// Build a table from `(category name, words)` pairs
    ///
    /// Unknown categories and invalid words are skipped with a warning;
    /// repeated words within a category are kept once.
    pub fn from_named_lists<'a, I, W>(lists: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, W)>,
        W: IntoIterator<Item = &'a str>,
    {
        let mut table = FxHashMap::default();

        for (name, words) in lists {
            let category = match name.parse::<Category>() {
                Ok(category) => category,
                Err(e) => {
                    tracing::warn!("Skipping word list: {e}");
                    continue;
                }
            };

            let list: &mut Vec<Word> = table.entry(category).or_default();
            for raw in words {
                match Word::new(raw) {
                    Ok(word) if !list.contains(&word) => list.push(word),
                    Ok(_) => tracing::debug!("Duplicate word '{raw}' in {category}"),
                    Err(e) => tracing::warn!("Skipping '{raw}' in {category}: {e}"),
                }
            }
        }

        Self { lists: table }
    }

    /// Parse a JSON word table
    ///
    /// # Errors
    /// Returns `WordTableError::Json` if the text is not an object of string arrays.
    ///
    /// # Examples
    /// ```
    /// use word_bomb::core::Category;
    /// use word_bomb::wordlists::WordTable;
    ///
    /// let table = WordTable::from_json_str(r#"{"food": ["banana", "kiwi"]}"#).unwrap();
    /// assert_eq!(table.total(Category::Food), 1); // "kiwi" is too short
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, WordTableError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_named_lists(raw.iter().map(|(name, words)| {
            (name.as_str(), words.iter().map(String::as_str))
        })))
    }

    /// Load a JSON word table from a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a JSON error if it
    /// is malformed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordTableError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Words for a category, empty if the table has none
    #[must_use]
    pub fn words(&self, category: Category) -> &[Word] {
        self.lists.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Number of words in a category
    #[must_use]
    pub fn total(&self, category: Category) -> usize {
        self.words(category).len()
    }

    /// Whether a word belongs to a category's list
    #[must_use]
    pub fn contains(&self, category: Category, word: &Word) -> bool {
        self.words(category).contains(word)
    }
}
