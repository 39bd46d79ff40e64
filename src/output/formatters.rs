//! Formatting utilities for terminal output

use crate::core::{Category, GRID_SIZE};
use crate::game::{CellView, GuessBuffer};

/// Placeholder for a hidden cell or an empty answer slot
pub const HIDDEN: char = '·';
/// Symbol drawn for a revealed bomb
pub const BOMB: char = '💣';

/// Character shown for a cell
#[must_use]
pub const fn cell_symbol(cell: CellView) -> char {
    match cell {
        CellView::Hidden => HIDDEN,
        CellView::Letter(letter) => letter,
        CellView::Bomb => BOMB,
    }
}

/// Answer slots as `G A _ _ _ _`
#[must_use]
pub fn answer_slots(buffer: &GuessBuffer) -> String {
    buffer
        .slots()
        .iter()
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lives as filled and empty hearts
#[must_use]
pub fn lives_hearts(count: u8, max: u8) -> String {
    let count = count.min(max);
    format!(
        "{}{}",
        "♥".repeat(usize::from(count)),
        "♡".repeat(usize::from(max - count))
    )
}

/// `🍕 Food`-style label for menus and headers
#[must_use]
pub fn category_label(category: Category) -> String {
    let name = category.name();
    let mut chars = name.chars();
    let capitalized: String = chars
        .next()
        .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default();
    format!("{} {capitalized}", category.icon())
}

/// Column header for a printed grid, 1-based
#[must_use]
pub fn column_header() -> String {
    (1..=GRID_SIZE)
        .map(|col| col.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
