//! Word Bomb
//!
//! A word-guessing game: every row of a 6×6 grid hides one letter of a
//! secret word next to distractor letters and a bomb. Reveal rows, pick the
//! right letters, avoid the bombs.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use word_bomb::core::{Category, CellPos};
//! use word_bomb::game::{GameConfig, GuessEngine, NoAds};
//! use word_bomb::storage::MemoryStore;
//! use word_bomb::wordlists::WordTable;
//!
//! let table = Arc::new(WordTable::embedded());
//! let mut engine = GuessEngine::new(GameConfig::default(), table, MemoryStore::new(), NoAds)
//!     .with_seed(42);
//! engine.start(Category::Food).unwrap();
//!
//! // The first tap on a row reveals it.
//! let events = engine.select_cell(CellPos::new(0, 0).unwrap()).unwrap();
//! println!("{}", events[0]);
//! ```

// Core domain types
pub mod core;

// Game rules
pub mod game;

// Persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
