//! Lifetime win/loss counters and category progress.

use super::word_bank::WordBank;
use crate::core::Category;
use crate::storage::{KeyValueStore, StoreExt, keys};

/// Win rate as a whole percentage
///
/// The denominator uses `max(1, wrong)`, so a player with no losses yet
/// reads slightly below 100% (3 wins → 75%).
#[must_use]
pub fn win_rate(correct: u32, wrong: u32) -> u32 {
    let won = f64::from(correct);
    let lost = f64::from(wrong.max(1));
    (won / (won + lost) * 100.0).round() as u32
}

/// Monotonic answer counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStore {
    correct: u32,
    wrong: u32,
}

impl ProgressStore {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            correct: store.load_or(keys::CORRECT_ANSWERS, 0, 0),
            wrong: store.load_or(keys::WRONG_ANSWERS, 0, 0),
        }
    }

    pub fn record_win<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        self.correct = self.correct.saturating_add(1);
        store.save_logged(keys::CORRECT_ANSWERS, &self.correct);
    }

    pub fn record_loss<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) {
        self.wrong = self.wrong.saturating_add(1);
        store.save_logged(keys::WRONG_ANSWERS, &self.wrong);
    }

    #[inline]
    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.correct
    }

    #[inline]
    #[must_use]
    pub const fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn win_rate(&self) -> u32 {
        win_rate(self.correct, self.wrong)
    }

    /// `(completed, total)` words for a category
    #[must_use]
    pub fn category_progress(bank: &WordBank, category: Category) -> (usize, usize) {
        (bank.completed_count(category), bank.total(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordTable;
    use std::sync::Arc;

    #[test]
    fn win_rate_keeps_max_one_denominator() {
        assert_eq!(win_rate(3, 0), 75);
        assert_eq!(win_rate(0, 0), 0);
        assert_eq!(win_rate(1, 1), 50);
        assert_eq!(win_rate(2, 1), 67);
        assert_eq!(win_rate(0, 5), 0);
        assert_eq!(win_rate(99, 1), 99);
    }

    #[test]
    fn counters_persist() {
        let mut store = MemoryStore::new();
        let mut progress = ProgressStore::load(&store);
        progress.record_win(&mut store);
        progress.record_win(&mut store);
        progress.record_loss(&mut store);

        let reloaded = ProgressStore::load(&store);
        assert_eq!(reloaded.correct(), 2);
        assert_eq!(reloaded.wrong(), 1);
        assert_eq!(reloaded.win_rate(), 67);
    }

    #[test]
    fn category_progress_pairs_completed_with_total() {
        let mut store = MemoryStore::new();
        let table = Arc::new(WordTable::from_named_lists([(
            "household",
            vec!["garden", "pillow", "carpet"],
        )]));
        let mut bank = WordBank::load(table, &store);
        bank.mark_completed(&Word::new("pillow").unwrap(), Category::Household, &mut store);

        assert_eq!(
            ProgressStore::category_progress(&bank, Category::Household),
            (1, 3)
        );
        assert_eq!(ProgressStore::category_progress(&bank, Category::Food), (0, 0));
    }
}
