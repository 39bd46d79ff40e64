//! State owned by a single round
//!
//! A round is one attempt at one word. It holds the grid, which rows have
//! been revealed, the letters assembled so far and, once decided, whether it
//! was won or lost. The engine drives every transition; callers get read-only
//! access.

use crate::core::{Category, Cell, CellPos, GRID_SIZE, Grid, Word};

/// Rows whose letters are visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    rows: [bool; GRID_SIZE],
}

impl RevealState {
    #[inline]
    #[must_use]
    pub const fn is_revealed(&self, row: usize) -> bool {
        row < GRID_SIZE && self.rows[row]
    }

    /// Number of revealed rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().filter(|&&r| r).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Revealed row indices in ascending order
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..GRID_SIZE).filter(|&row| self.rows[row])
    }

    /// Returns `false` if the row was already revealed
    fn reveal(&mut self, row: usize) -> bool {
        !std::mem::replace(&mut self.rows[row], true)
    }

    fn reveal_all(&mut self) {
        self.rows = [true; GRID_SIZE];
    }
}

/// One slot per row for the letters picked so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: [Option<char>; GRID_SIZE],
}

impl GuessBuffer {
    #[inline]
    #[must_use]
    pub const fn slot(&self, row: usize) -> Option<char> {
        self.slots[row]
    }

    #[must_use]
    pub const fn slots(&self) -> &[Option<char>; GRID_SIZE] {
        &self.slots
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Filled letters joined in row order
    #[must_use]
    pub fn assembled(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    fn fill(&mut self, row: usize, letter: char) {
        self.slots[row] = Some(letter);
    }
}

/// Result of a round so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

/// What the player may see of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Letter(char),
    Bomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Won,
    Lost,
}

/// A single attempt at one word
#[derive(Debug, Clone)]
pub struct Round {
    category: Category,
    word: Word,
    grid: Grid,
    revealed: RevealState,
    buffer: GuessBuffer,
    resolution: Option<Resolution>,
    incorrect_flash: Option<CellPos>,
}

impl Round {
    pub(crate) fn new(category: Category, word: Word, grid: Grid) -> Self {
        Self {
            category,
            word,
            grid,
            revealed: RevealState::default(),
            buffer: GuessBuffer::default(),
            resolution: None,
            incorrect_flash: None,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The secret word. Front ends should only show it once the round is over.
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn revealed(&self) -> &RevealState {
        &self.revealed
    }

    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    /// Cell currently flagged as a wrong pick, until the caller clears it
    #[must_use]
    pub const fn incorrect_flash(&self) -> Option<CellPos> {
        self.incorrect_flash
    }

    #[must_use]
    pub const fn outcome(&self) -> RoundOutcome {
        match self.resolution {
            None => RoundOutcome::InProgress,
            Some(Resolution::Won) => RoundOutcome::Won,
            Some(Resolution::Lost) => RoundOutcome::Lost,
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.resolution.is_some()
    }

    /// Visible contents of a cell: hidden until its row is revealed
    #[must_use]
    pub fn cell_view(&self, pos: CellPos) -> CellView {
        if !self.revealed.is_revealed(pos.row()) {
            return CellView::Hidden;
        }
        match self.grid.cell(pos) {
            Cell::Letter(letter) => CellView::Letter(letter),
            Cell::Bomb => CellView::Bomb,
        }
    }

    /// Visible contents of the whole grid, row by row
    #[must_use]
    pub fn view(&self) -> [[CellView; GRID_SIZE]; GRID_SIZE] {
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                CellPos::new(row, col).map_or(CellView::Hidden, |pos| self.cell_view(pos))
            })
        })
    }

    pub(crate) fn reveal(&mut self, row: usize) -> bool {
        self.revealed.reveal(row)
    }

    pub(crate) fn fill(&mut self, row: usize, letter: char) {
        self.buffer.fill(row, letter);
    }

    pub(crate) fn flag_incorrect(&mut self, pos: CellPos) {
        self.incorrect_flash = Some(pos);
    }

    pub(crate) fn clear_incorrect_flash(&mut self) -> bool {
        self.incorrect_flash.take().is_some()
    }

    pub(crate) fn win(&mut self) {
        self.resolution = Some(Resolution::Won);
    }

    /// Lose the round and uncover every row for the answer screen
    pub(crate) fn lose(&mut self) {
        self.resolution = Some(Resolution::Lost);
        self.revealed.reveal_all();
        self.incorrect_flash = None;
    }
}
