//! Ordered list of words to play

use std::fmt;

use super::{TargetWord, WordError};

/// Words in play order
///
/// Never empty, fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList(Vec<TargetWord>);

/// Error type for word lists that cannot be played
#[derive(Debug)]
pub enum WordListError {
    Empty,
    InvalidWord {
        index: usize,
        word: String,
        source: WordError,
    },
    Io(std::io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list must contain at least one word"),
            Self::InvalidWord { index, word, .. } => {
                write!(f, "Invalid word '{word}' at entry {}", index + 1)
            }
            Self::Io(_) => write!(f, "Failed to read word list"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::InvalidWord { source, .. } => Some(source),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for WordListError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl WordList {
    /// Build a word list, keeping the given order
    ///
    /// # Errors
    /// Returns `WordListError::Empty` for an empty input and
    /// `WordListError::InvalidWord` for the first entry that is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use word_garden::core::WordList;
    ///
    /// let words = WordList::new(["ham", "ward"]).unwrap();
    /// assert_eq!(words.len(), 2);
    /// assert_eq!(words.get(0).unwrap().text(), "HAM");
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let raw: String = raw.into();
                TargetWord::new(raw.clone()).map_err(|source| WordListError::InvalidWord {
                    index,
                    word: raw,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self(words))
    }

    /// Number of words, at least one
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word played first
    #[inline]
    #[must_use]
    pub fn first(&self) -> &TargetWord {
        // Non-empty by construction
        &self.0[0]
    }

    /// Word at a play position
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TargetWord> {
        self.0.get(index)
    }

    /// Iterate words in play order
    pub fn iter(&self) -> std::slice::Iter<'_, TargetWord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a TargetWord;
    type IntoIter = std::slice::Iter<'a, TargetWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let words = WordList::new(["GREENE", "HAM", "WARD"]).unwrap();
        let texts: Vec<&str> = words.iter().map(TargetWord::text).collect();
        assert_eq!(texts, ["GREENE", "HAM", "WARD"]);
    }

    #[test]
    fn rejects_empty_list() {
        let empty: [&str; 0] = [];
        assert!(matches!(WordList::new(empty), Err(WordListError::Empty)));
    }

    #[test]
    fn rejects_invalid_entry_with_position() {
        let err = WordList::new(["HAM", "", "WARD"]).unwrap_err();
        match err {
            WordListError::InvalidWord { index, source, .. } => {
                assert_eq!(index, 1);
                assert_eq!(source, WordError::Empty);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_message_uses_one_based_entry() {
        let err = WordList::new(["HAM", "W4RD"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid word 'W4RD' at entry 2");
    }

    #[test]
    fn get_out_of_range_is_none() {
        let words = WordList::new(["HAM"]).unwrap();
        assert!(words.get(0).is_some());
        assert!(words.get(1).is_none());
    }
}
