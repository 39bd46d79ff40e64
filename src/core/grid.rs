//! Letter grid generation
//!
//! A grid has one row per letter of the secret word. Every row holds:
//! - exactly one designated letter cell (the word's letter for that row)
//! - exactly one bomb
//! - four distractor letters, which may repeat the target letter by chance
//!
//! Which cell counts is decided by position, never by letter value: a
//! distractor that happens to show the right letter is still a wrong pick.

use super::word::{WORD_LEN, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Rows and columns in a grid
pub const GRID_SIZE: usize = WORD_LEN;

/// Marker for the bomb in compact row notation
const BOMB_MARKER: char = '*';

/// Position of a cell in the grid; the default is the top-left cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    /// Create a position, or `None` if it falls outside the grid
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// An uppercase letter, either the row's target or a distractor
    Letter(char),
    Bomb,
}

impl Cell {
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }
}

/// Errors from building a grid out of explicit rows
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row must have exactly one bomb, found {0}")]
    BombCount(usize),
    #[error("target column {0} is outside the row")]
    TargetOutOfRange(usize),
    #[error("target column {0} holds the bomb")]
    TargetOnBomb(usize),
    #[error("cell '{0}' is not an uppercase letter")]
    InvalidLetter(char),
    #[error("row must have {GRID_SIZE} cells, got {0}")]
    RowLength(usize),
    #[error("row {row} targets '{found}' but the word needs '{expected}'")]
    LetterMismatch {
        row: usize,
        expected: char,
        found: char,
    },
}

/// One row of the grid with its designated letter and bomb columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    cells: [Cell; GRID_SIZE],
    target_col: usize,
    bomb_col: usize,
}

impl GridRow {
    /// Build a row from explicit cells
    ///
    /// # Errors
    /// Returns `GridError` unless the row has exactly one bomb, the target
    /// column is in range and not the bomb, and every other cell is an
    /// uppercase ASCII letter.
    pub fn new(cells: [Cell; GRID_SIZE], target_col: usize) -> Result<Self, GridError> {
        if target_col >= GRID_SIZE {
            return Err(GridError::TargetOutOfRange(target_col));
        }

        let bombs: Vec<usize> = (0..GRID_SIZE).filter(|&c| cells[c].is_bomb()).collect();
        let &[bomb_col] = bombs.as_slice() else {
            return Err(GridError::BombCount(bombs.len()));
        };

        if bomb_col == target_col {
            return Err(GridError::TargetOnBomb(target_col));
        }

        for cell in cells {
            if let Cell::Letter(letter) = cell
                && !letter.is_ascii_uppercase()
            {
                return Err(GridError::InvalidLetter(letter));
            }
        }

        Ok(Self {
            cells,
            target_col,
            bomb_col,
        })
    }

    /// Build a row from compact notation: six characters, `*` for the bomb
    ///
    /// # Errors
    /// Same rules as [`GridRow::new`], plus the pattern must be six characters.
    ///
    /// # Examples
    /// ```
    /// use word_bomb::core::{Cell, GridRow};
    ///
    /// let row = GridRow::from_pattern("QXG*ZG", 2).unwrap();
    /// assert_eq!(row.bomb_col(), 3);
    /// assert_eq!(row.target_letter(), 'G');
    /// assert_eq!(row.cell(5), Cell::Letter('G')); // a decoy, not the target
    /// ```
    pub fn from_pattern(pattern: &str, target_col: usize) -> Result<Self, GridError> {
        let chars: Vec<char> = pattern.chars().collect();
        if chars.len() != GRID_SIZE {
            return Err(GridError::RowLength(chars.len()));
        }

        let mut cells = [Cell::Bomb; GRID_SIZE];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = if ch == BOMB_MARKER {
                Cell::Bomb
            } else {
                Cell::Letter(ch)
            };
        }

        Self::new(cells, target_col)
    }

    /// Lay out a random row around a target letter
    fn generate<R: Rng + ?Sized>(target: char, rng: &mut R) -> Self {
        let mut columns: [usize; GRID_SIZE] = std::array::from_fn(|i| i);
        columns.shuffle(&mut *rng);
        let bomb_col = columns[0];
        let target_col = columns[1];

        let cells = std::array::from_fn(|col| {
            if col == bomb_col {
                Cell::Bomb
            } else if col == target_col {
                Cell::Letter(target)
            } else {
                Cell::Letter(char::from(b'A' + rng.random_range(0..26u8)))
            }
        });

        Self {
            cells,
            target_col,
            bomb_col,
        }
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; GRID_SIZE] {
        &self.cells
    }

    /// # Panics
    /// Panics if col >= 6
    #[inline]
    #[must_use]
    pub const fn cell(&self, col: usize) -> Cell {
        self.cells[col]
    }

    #[inline]
    #[must_use]
    pub const fn target_col(&self) -> usize {
        self.target_col
    }

    #[inline]
    #[must_use]
    pub const fn bomb_col(&self) -> usize {
        self.bomb_col
    }

    /// The letter held by the designated cell
    #[must_use]
    pub const fn target_letter(&self) -> char {
        match self.cells[self.target_col] {
            Cell::Letter(letter) => letter,
            // Unreachable: construction rejects a target on the bomb.
            Cell::Bomb => BOMB_MARKER,
        }
    }
}

/// A full 6×6 grid for one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; GRID_SIZE],
}

impl Grid {
    /// Generate a random grid for a word
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_bomb::core::{Grid, Word};
    ///
    /// let word = Word::new("garden").unwrap();
    /// let grid = Grid::generate(&word, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(grid.row(0).target_letter(), 'G');
    /// ```
    pub fn generate<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> Self {
        let rows = std::array::from_fn(|row| GridRow::generate(word.letter_at(row), &mut *rng));
        Self { rows }
    }

    /// Assemble a grid from explicit rows, checking them against the word
    ///
    /// Used for scripted rounds (fixtures, tutorials).
    ///
    /// # Errors
    /// Returns `GridError::LetterMismatch` if a row's designated letter is not
    /// the word's letter for that row.
    pub fn from_rows(word: &Word, rows: [GridRow; GRID_SIZE]) -> Result<Self, GridError> {
        for (index, row) in rows.iter().enumerate() {
            let expected = word.letter_at(index);
            let found = row.target_letter();
            if expected != found {
                return Err(GridError::LetterMismatch {
                    row: index,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { rows })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[GridRow; GRID_SIZE] {
        &self.rows
    }

    /// # Panics
    /// Panics if row >= 6
    #[inline]
    #[must_use]
    pub const fn row(&self, row: usize) -> &GridRow {
        &self.rows[row]
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, pos: CellPos) -> Cell {
        self.rows[pos.row].cells[pos.col]
    }

    /// Whether a position is the designated letter cell of its row
    #[inline]
    #[must_use]
    pub const fn is_target(&self, pos: CellPos) -> bool {
        self.rows[pos.row].target_col == pos.col
    }
}
