//! Word list loading utilities
//!
//! Builds a playable `WordList` from a file or from the embedded constant.

use crate::core::{WordList, WordListError};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::GARDEN;

/// Load words from a file, one per line
///
/// Blank lines are skipped; surrounding whitespace is trimmed. Unlike the
/// embedded list, a bad entry is reported rather than dropped, since play
/// order would silently change otherwise.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, and the usual
/// validation errors if it holds no words or an entry is not a word.
///
/// # Examples
/// ```no_run
/// use word_garden::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content)?;

    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Parse a word list from newline-separated text
///
/// # Errors
///
/// Returns `WordListError` if no words remain after skipping blank lines or
/// an entry is not a word.
pub fn words_from_text(content: &str) -> Result<WordList, WordListError> {
    WordList::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

/// The embedded default list
///
/// # Errors
///
/// Only fails if the list compiled into the binary is invalid.
///
/// # Examples
/// ```
/// use word_garden::wordlists::{GARDEN, loader::garden};
///
/// let words = garden().unwrap();
/// assert_eq!(words.len(), GARDEN.len());
/// ```
pub fn garden() -> Result<WordList, WordListError> {
    WordList::new(GARDEN.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("HAM\n\n  ward \nlloyd\n").unwrap();
        let texts: Vec<&str> = words.iter().map(TargetWord::text).collect();
        assert_eq!(texts, ["HAM", "WARD", "LLOYD"]);
    }

    #[test]
    fn words_from_text_rejects_invalid_entry() {
        let err = words_from_text("HAM\nWARD 86\n").unwrap_err();
        assert!(matches!(err, WordListError::InvalidWord { index: 1, .. }));
    }

    #[test]
    fn words_from_text_empty() {
        assert!(matches!(
            words_from_text("\n  \n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn garden_keeps_embedded_order() {
        let words = garden().unwrap();
        assert_eq!(words.len(), GARDEN.len());
        assert_eq!(words.first().text(), GARDEN[0]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io(_)));
    }
}
