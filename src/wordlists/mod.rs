//! Word lists for Word Bomb
//!
//! Provides the embedded category word lists and loading of custom tables.

mod embedded;
pub mod loader;

pub use embedded::{ANIMALS, FOOD, HOUSEHOLD, PLACES, SPORTS, TOTAL_WORD_COUNT, WORD_TABLE};
pub use loader::{WordTable, WordTableError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use std::collections::HashSet;

    #[test]
    fn table_covers_every_category() {
        for category in Category::ALL {
            assert!(
                WORD_TABLE.iter().any(|(name, _)| *name == category.name()),
                "no embedded list for {category}"
            );
        }
    }

    #[test]
    fn total_count_matches_lists() {
        let total: usize = WORD_TABLE.iter().map(|(_, words)| words.len()).sum();
        assert_eq!(total, TOTAL_WORD_COUNT);
    }

    #[test]
    fn embedded_words_are_six_lowercase_letters() {
        for (name, words) in WORD_TABLE {
            assert!(!words.is_empty(), "{name} has no words");
            for &word in *words {
                assert_eq!(word.len(), 6, "Word '{word}' in {name} is not 6 letters");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' in {name} contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn embedded_lists_have_no_duplicates() {
        for (name, words) in WORD_TABLE {
            let unique: HashSet<_> = words.iter().collect();
            assert_eq!(unique.len(), words.len(), "duplicate words in {name}");
        }
    }

    #[test]
    fn named_lists_match_table() {
        assert_eq!(FOOD.len(), WORD_TABLE[0].1.len());
        assert!(HOUSEHOLD.contains(&"garden"));
        assert!(SPORTS.contains(&"soccer"));
        assert!(ANIMALS.contains(&"monkey"));
        assert!(PLACES.contains(&"london"));
    }
}
