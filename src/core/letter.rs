//! Single-letter guesses
//!
//! The engine is the authority on what counts as a guess, so raw input is
//! re-validated here even when the caller already filtered it.

use std::fmt;

/// A validated guess: one ASCII letter, stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for malformed guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    TooLong(usize),
    NotAlphabetic(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Guess must not be empty"),
            Self::TooLong(len) => write!(f, "Guess must be a single letter, got {len} characters"),
            Self::NotAlphabetic(c) => write!(f, "Guess must be a letter, got '{c}'"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Letter {
    /// Parse a guess from raw text
    ///
    /// # Errors
    /// Returns `GuessError` if the input is empty, longer than one character,
    /// or not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use word_garden::core::{GuessError, Letter};
    ///
    /// assert_eq!(Letter::parse("h").unwrap().as_char(), 'H');
    /// assert_eq!(Letter::parse(""), Err(GuessError::Empty));
    /// assert_eq!(Letter::parse("AB"), Err(GuessError::TooLong(2)));
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let mut chars = input.chars();
        let first = chars.next().ok_or(GuessError::Empty)?;

        if chars.next().is_some() {
            return Err(GuessError::TooLong(input.chars().count()));
        }

        Self::try_from(first)
    }

    /// The letter as an uppercase `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// The letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(GuessError::NotAlphabetic(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
