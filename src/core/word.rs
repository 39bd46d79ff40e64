//! Secret word representation
//!
//! A Word stores a 6-letter target word, one letter per grid row.

use std::fmt;

/// Number of letters in every secret word (and rows in every grid)
pub const WORD_LEN: usize = 6;

/// A 6-letter secret word
///
/// Stored lowercase; letters are handed out uppercase because that is how the
/// grid shows them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 6
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_bomb::core::Word;
    ///
    /// let word = Word::new("Garden").unwrap();
    /// assert_eq!(word.text(), "garden");
    /// assert_eq!(word.letter_at(0), 'G');
    ///
    /// assert!(Word::new("bomb").is_err());
    /// assert!(Word::new("gard3n").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the uppercase letter for a row (0-5)
    ///
    /// # Panics
    /// Panics if row >= 6
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, row: usize) -> char {
        self.chars[row].to_ascii_uppercase() as char
    }

    /// Case-insensitive comparison against an assembled guess
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text.eq_ignore_ascii_case(guess)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("garden").unwrap();
        assert_eq!(word.text(), "garden");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("GARDEN").unwrap().text(), "garden");
        assert_eq!(Word::new("GaRdEn").unwrap().text(), "garden");
        assert_eq!(Word::new("  garden\n").unwrap().text(), "garden");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("gardens"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("crane"), Err(WordError::InvalidLength(5)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("gard3n"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gar en"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gården"), Err(WordError::NonAscii));
    }

    #[test]
    fn letters_are_uppercase_by_row() {
        let word = Word::new("garden").unwrap();
        let letters: String = (0..WORD_LEN).map(|row| word.letter_at(row)).collect();
        assert_eq!(letters, "GARDEN");
    }

    #[test]
    fn matches_ignores_case() {
        let word = Word::new("garden").unwrap();
        assert!(word.matches("GARDEN"));
        assert!(word.matches("Garden"));
        assert!(!word.matches("GARDEM"));
        assert!(!word.matches("GARDE"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("KETTLE").unwrap();
        assert_eq!(format!("{word}"), "kettle");
    }
}
