//! Events emitted by the engine after each operation.
//!
//! Every operation returns the events it produced, in order. The caller
//! renders them or ignores them; the engine never waits on a reaction.

use crate::core::{Category, CellPos};
use std::fmt;

/// Why a round was lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LossCause {
    /// A bomb was selected in a revealed row
    Bomb(CellPos),
    /// The assembled guess did not spell the word
    WrongWord(String),
}

/// Something observable that happened during an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { category: Category },
    RowRevealed { row: usize },
    LetterPlaced { row: usize, letter: char },
    /// A wrong letter was picked. The cell stays flagged until the caller
    /// clears it with `clear_incorrect_flash`.
    IncorrectGuess { pos: CellPos },
    Won { word: String },
    /// Carries the correct word for the "show the answer" screen
    Lost { word: String, cause: LossCause },
    /// Switching now would discard a round in progress
    ConfirmationRequired { pending: Category },
    CategoryChanged { category: Category },
    LivesRefilled { lives: u8 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted { category } => {
                write!(f, "New {} {category} word!", category.icon())
            }
            Self::RowRevealed { row } => write!(f, "Row {} revealed", row + 1),
            Self::LetterPlaced { row, letter } => {
                write!(f, "'{letter}' placed in slot {}", row + 1)
            }
            Self::IncorrectGuess { pos } => {
                write!(f, "Wrong letter at row {}, column {}", pos.row() + 1, pos.col() + 1)
            }
            Self::Won { word } => write!(f, "Correct! The word was {}", word.to_uppercase()),
            Self::Lost { word, cause } => match cause {
                LossCause::Bomb(_) => {
                    write!(f, "Boom! The word was {}", word.to_uppercase())
                }
                LossCause::WrongWord(guess) => write!(
                    f,
                    "{} is wrong. The word was {}",
                    guess.to_uppercase(),
                    word.to_uppercase()
                ),
            },
            Self::ConfirmationRequired { pending } => write!(
                f,
                "Switch to {pending}? You will lose your current progress"
            ),
            Self::CategoryChanged { category } => write!(f, "Category: {category}"),
            Self::LivesRefilled { lives } => write!(f, "Lives refilled to {lives}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_message_shows_answer() {
        let event = GameEvent::Lost {
            word: "garden".into(),
            cause: LossCause::Bomb(CellPos::new(0, 5).unwrap()),
        };
        assert_eq!(event.to_string(), "Boom! The word was GARDEN");

        let event = GameEvent::Lost {
            word: "garden".into(),
            cause: LossCause::WrongWord("gardan".into()),
        };
        assert_eq!(event.to_string(), "GARDAN is wrong. The word was GARDEN");
    }

    #[test]
    fn positions_are_one_based_for_display() {
        let event = GameEvent::IncorrectGuess {
            pos: CellPos::new(2, 4).unwrap(),
        };
        assert_eq!(event.to_string(), "Wrong letter at row 3, column 5");
    }
}
