//! Core domain types for Word Bomb
//!
//! Words, categories and grids. Everything here is pure: randomness comes in
//! through the caller's RNG and nothing touches storage.

mod category;
mod grid;
mod word;

pub use category::{Category, UnknownCategory};
pub use grid::{Cell, CellPos, GRID_SIZE, Grid, GridError, GridRow};
pub use word::{WORD_LEN, Word, WordError};
