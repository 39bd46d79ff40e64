//! Word selection and completion tracking
//!
//! The bank pairs the immutable word table with the player's completed
//! words. Completed lists are stored per category under the category name and
//! only ever grow.

use super::error::GameError;
use crate::core::{Category, Word};
use crate::storage::{KeyValueStore, StoreExt};
use crate::wordlists::WordTable;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Source of round words for every category
#[derive(Debug, Clone)]
pub struct WordBank {
    table: Arc<WordTable>,
    completed: FxHashMap<Category, Vec<String>>,
}

impl WordBank {
    /// Create a bank, reading every category's completed list from storage
    ///
    /// A list that cannot be read counts as empty.
    pub fn load<S: KeyValueStore + ?Sized>(table: Arc<WordTable>, store: &S) -> Self {
        let completed = Category::ALL
            .into_iter()
            .map(|category| {
                let mut words: Vec<String> =
                    store.load_or(category.name(), Vec::new(), Vec::new());
                let mut seen = FxHashSet::default();
                words.retain(|w| seen.insert(w.to_lowercase()));
                (category, words)
            })
            .collect();

        Self { table, completed }
    }

    /// Pick a random word from the category that has not been completed
    ///
    /// # Errors
    /// Returns `GameError::NoWordsRemaining` if the category has no words or
    /// every one of them is completed.
    pub fn pick_word<R: Rng + ?Sized>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> Result<Word, GameError> {
        let candidates: Vec<&Word> = self
            .table
            .words(category)
            .iter()
            .filter(|word| !self.is_completed(category, word))
            .collect();

        candidates
            .choose(rng)
            .map(|&word| word.clone())
            .ok_or(GameError::NoWordsRemaining { category })
    }

    /// Record a solved word and persist the category's list
    ///
    /// Returns `false` if the word was already recorded.
    pub fn mark_completed<S: KeyValueStore + ?Sized>(
        &mut self,
        word: &Word,
        category: Category,
        store: &mut S,
    ) -> bool {
        if self.is_completed(category, word) {
            return false;
        }

        let list = self.completed.entry(category).or_default();
        list.push(word.text().to_string());
        store.save_logged(category.name(), &*list);

        tracing::debug!("Marked '{word}' completed in {category} ({} total)", list.len());
        true
    }

    #[must_use]
    pub fn is_completed(&self, category: Category, word: &Word) -> bool {
        self.completed
            .get(&category)
            .is_some_and(|list| list.iter().any(|w| word.matches(w)))
    }

    /// Number of completed words recorded for a category
    #[must_use]
    pub fn completed_count(&self, category: Category) -> usize {
        self.completed.get(&category).map_or(0, Vec::len)
    }

    /// Number of words the category offers
    #[must_use]
    pub fn total(&self, category: Category) -> usize {
        self.table.total(category)
    }

    /// Words still available for selection
    #[must_use]
    pub fn remaining(&self, category: Category) -> usize {
        self.table
            .words(category)
            .iter()
            .filter(|word| !self.is_completed(category, word))
            .count()
    }

    #[must_use]
    pub fn table(&self) -> &WordTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::storage::testing::BrokenStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn table() -> Arc<WordTable> {
        Arc::new(WordTable::from_named_lists([
            ("food", vec!["banana", "cherry", "carrot"]),
            ("household", vec!["garden"]),
        ]))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn pick_never_returns_completed_until_exhausted() {
        let mut store = MemoryStore::new();
        let mut bank = WordBank::load(table(), &store);
        let mut rng = StdRng::seed_from_u64(3);

        let mut picked = Vec::new();
        for _ in 0..3 {
            let word = bank.pick_word(Category::Food, &mut rng).unwrap();
            assert!(!picked.contains(&word), "{word} picked twice");
            assert!(bank.mark_completed(&word, Category::Food, &mut store));
            picked.push(word);
        }

        assert_eq!(
            bank.pick_word(Category::Food, &mut rng),
            Err(GameError::NoWordsRemaining {
                category: Category::Food
            })
        );
    }

    #[test]
    fn pick_from_empty_category_fails() {
        let bank = WordBank::load(table(), &MemoryStore::new());
        assert_eq!(
            bank.pick_word(Category::Sports, &mut StdRng::seed_from_u64(0)),
            Err(GameError::NoWordsRemaining {
                category: Category::Sports
            })
        );
    }

    #[test]
    fn pick_is_spread_across_candidates() {
        let bank = WordBank::load(table(), &MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(bank.pick_word(Category::Food, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn mark_completed_deduplicates() {
        let mut store = MemoryStore::new();
        let mut bank = WordBank::load(table(), &store);

        assert!(bank.mark_completed(&word("garden"), Category::Household, &mut store));
        assert!(!bank.mark_completed(&word("GARDEN"), Category::Household, &mut store));
        assert_eq!(bank.completed_count(Category::Household), 1);
    }

    #[test]
    fn mark_completed_persists_under_category_name() {
        let mut store = MemoryStore::new();
        let mut bank = WordBank::load(table(), &store);
        bank.mark_completed(&word("banana"), Category::Food, &mut store);
        bank.mark_completed(&word("cherry"), Category::Food, &mut store);

        let stored: Vec<String> = store.load("food").unwrap().unwrap();
        assert_eq!(stored, vec!["banana", "cherry"]);

        let reloaded = WordBank::load(table(), &store);
        assert_eq!(reloaded.completed_count(Category::Food), 2);
        assert_eq!(reloaded.remaining(Category::Food), 1);
    }

    #[test]
    fn load_collapses_stored_duplicates() {
        let mut store = MemoryStore::new();
        store.save("food", &["banana", "banana", "Banana"]).unwrap();

        let bank = WordBank::load(table(), &store);
        assert_eq!(bank.completed_count(Category::Food), 1);
    }

    #[test]
    fn completed_count_defaults_to_zero() {
        let bank = WordBank::load(table(), &MemoryStore::new());
        assert_eq!(bank.completed_count(Category::Animals), 0);
        assert_eq!(bank.total(Category::Food), 3);
    }

    #[test]
    fn broken_store_starts_empty_and_keeps_playing() {
        let mut store = BrokenStore;
        let mut bank = WordBank::load(table(), &store);
        assert_eq!(bank.completed_count(Category::Food), 0);

        assert!(bank.mark_completed(&word("banana"), Category::Food, &mut store));
        assert_eq!(bank.completed_count(Category::Food), 1);
    }
}
