//! Stats command
//!
//! Collects the player's stored progress into a report.

use crate::core::Category;
use crate::game::{AdSink, GuessEngine};
use crate::storage::KeyValueStore;

/// Progress in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: Category,
    pub completed: usize,
    pub total: usize,
    pub unlocked: bool,
}

/// Everything the stats screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub correct: u32,
    pub wrong: u32,
    pub win_rate: u32,
    pub lives: u8,
    pub max_lives: u8,
    pub premium: bool,
    pub categories: Vec<CategoryStats>,
}

/// Build the report from an engine's loaded state
pub fn collect_stats<S: KeyValueStore, A: AdSink>(engine: &GuessEngine<S, A>) -> StatsReport {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let (completed, total) = engine.category_progress(category);
            CategoryStats {
                category,
                completed,
                total,
                unlocked: engine.is_unlocked(category),
            }
        })
        .collect();

    StatsReport {
        correct: engine.progress().correct(),
        wrong: engine.progress().wrong(),
        win_rate: engine.progress().win_rate(),
        lives: engine.lives().count(),
        max_lives: engine.lives().max(),
        premium: engine.is_premium(),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, NoAds};
    use crate::storage::{MemoryStore, StoreExt, keys};
    use crate::wordlists::WordTable;
    use std::sync::Arc;

    #[test]
    fn report_reflects_stored_progress() {
        let mut store = MemoryStore::new();
        store.save(keys::CORRECT_ANSWERS, &3u32).unwrap();
        store.save(keys::WRONG_ANSWERS, &1u32).unwrap();
        store.save(keys::LIVES_COUNT, &2u8).unwrap();
        store.save("food", &["banana"]).unwrap();

        let table = Arc::new(WordTable::from_named_lists([("food", vec!["banana", "cherry"])]));
        let engine = GuessEngine::new(GameConfig::default(), table, store, NoAds);
        let report = collect_stats(&engine);

        assert_eq!(report.correct, 3);
        assert_eq!(report.wrong, 1);
        assert_eq!(report.win_rate, 75);
        assert_eq!((report.lives, report.max_lives), (2, 4));
        assert!(!report.premium);
        assert_eq!(report.categories.len(), Category::ALL.len());

        let food = &report.categories[0];
        assert_eq!(food.category, Category::Food);
        assert_eq!((food.completed, food.total), (1, 2));
        assert!(food.unlocked);

        let sports = &report.categories[1];
        assert_eq!((sports.completed, sports.total), (0, 0));
        assert!(!sports.unlocked);
    }

    #[test]
    fn unlock_all_opens_every_category() {
        let config = GameConfig {
            unlock_all: true,
            ..GameConfig::default()
        };
        let engine = GuessEngine::new(
            config,
            Arc::new(WordTable::embedded()),
            MemoryStore::new(),
            NoAds,
        );
        let report = collect_stats(&engine);
        assert!(report.categories.iter().all(|c| c.unlocked));
        assert_eq!(report.win_rate, 0);
    }
}
