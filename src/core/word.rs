//! Hidden word representation
//!
//! A `TargetWord` stores an uppercase ASCII word along with the set of letters
//! it contains, so hit checks during a round are constant time.

use rustc_hash::FxHashSet;
use std::fmt;

use super::Letter;

/// A word that can be hidden during a round
///
/// Always non-empty and made of ASCII letters, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new `TargetWord` from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_garden::core::TargetWord;
    ///
    /// let word = TargetWord::new("ham").unwrap();
    /// assert_eq!(word.text(), "HAM");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("h4m").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (and so of reveal positions)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter.as_byte())
    }

    /// Iterate the word's letters in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = TargetWord::new("GREENE").unwrap();
        assert_eq!(word.text(), "GREENE");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = TargetWord::new("ham").unwrap();
        assert_eq!(word.text(), "HAM");

        let word2 = TargetWord::new("HaM").unwrap();
        assert_eq!(word2.text(), "HAM");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(TargetWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(TargetWord::new("HA3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(TargetWord::new("HA M"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(TargetWord::new("WARD!"), Err(WordError::InvalidCharacter('!')));
        assert_eq!(TargetWord::new("CAFÉ"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_contains() {
        let word = TargetWord::new("HAM").unwrap();
        assert!(word.contains(letter('H')));
        assert!(word.contains(letter('A')));
        assert!(word.contains(letter('M')));
        assert!(!word.contains(letter('Z')));
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("lloyd").unwrap();
        assert_eq!(format!("{word}"), "LLOYD");
    }
}
