//! Reveal mask calculation
//!
//! The mask has one slot per letter of the hidden word: the letter itself once
//! it has been guessed, a placeholder otherwise. It is always derived, never
//! stored, so it cannot drift from the guessed-letter set.

use rustc_hash::FxHashSet;
use std::fmt;

use super::{Letter, TargetWord};

/// Symbol shown for an unrevealed position
pub const PLACEHOLDER: char = '_';

/// Partially revealed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal(Vec<Option<char>>);

impl Reveal {
    /// Calculate the mask of `word` given the letters guessed so far
    ///
    /// # Examples
    /// ```
    /// use word_garden::core::{Letter, Reveal, TargetWord};
    ///
    /// let word = TargetWord::new("HAM").unwrap();
    /// let guessed = [Letter::parse("H").unwrap()].into_iter().collect();
    ///
    /// let reveal = Reveal::calculate(&word, &guessed);
    /// assert_eq!(reveal.to_string(), "H _ _");
    /// ```
    #[must_use]
    pub fn calculate(word: &TargetWord, guessed: &FxHashSet<Letter>) -> Self {
        let slots = word
            .chars()
            .map(|c| {
                Letter::try_from(c)
                    .ok()
                    .filter(|letter| guessed.contains(letter))
                    .map(Letter::as_char)
            })
            .collect();

        Self(slots)
    }

    /// Mask with every position hidden
    #[must_use]
    pub fn hidden(word: &TargetWord) -> Self {
        Self(vec![None; word.len()])
    }

    /// Number of positions, equal to the hidden word's length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for a zero-length mask, which a valid word never produces
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once no placeholders remain
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Count of positions still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    /// Per-position view: `Some(letter)` when revealed
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.0
    }
}

impl fmt::Display for Reveal {
    /// Letters and placeholders separated by single spaces, e.g. `H _ _`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> FxHashSet<Letter> {
        letters.chars().map(|c| Letter::try_from(c).unwrap()).collect()
    }

    #[test]
    fn hidden_mask_has_one_placeholder_per_letter() {
        let word = TargetWord::new("ROETHLISBERGER").unwrap();
        let reveal = Reveal::hidden(&word);

        assert_eq!(reveal.len(), word.len());
        assert_eq!(reveal.hidden_count(), 14);
        assert!(!reveal.is_complete());
    }

    #[test]
    fn hidden_matches_calculate_with_nothing_guessed() {
        let word = TargetWord::new("SWANN").unwrap();
        assert_eq!(Reveal::hidden(&word), Reveal::calculate(&word, &guessed("")));
        assert_eq!(Reveal::hidden(&word).to_string(), "_ _ _ _ _");
    }

    #[test]
    fn duplicate_letters_all_revealed() {
        let word = TargetWord::new("GREENE").unwrap();
        let reveal = Reveal::calculate(&word, &guessed("E"));
        assert_eq!(reveal.to_string(), "_ _ E E _ E");
    }

    #[test]
    fn misses_do_not_affect_mask() {
        let word = TargetWord::new("HAM").unwrap();
        let reveal = Reveal::calculate(&word, &guessed("ZQXH"));
        assert_eq!(reveal.to_string(), "H _ _");
        assert_eq!(reveal.slots(), &[Some('H'), None, None]);
    }

    #[test]
    fn complete_when_every_letter_guessed() {
        let word = TargetWord::new("WARD").unwrap();
        let reveal = Reveal::calculate(&word, &guessed("DRAW"));
        assert!(reveal.is_complete());
        assert_eq!(reveal.hidden_count(), 0);
        assert_eq!(reveal.to_string(), "W A R D");
    }

    #[test]
    fn single_letter_word_has_no_separator() {
        let word = TargetWord::new("A").unwrap();
        assert_eq!(Reveal::hidden(&word).to_string(), "_");
    }
}
