//! Word list summary command

use crate::core::WordList;

/// Summary of a word list
pub struct WordListSummary {
    pub count: usize,
    pub shortest: usize,
    pub longest: usize,
    pub total_letters: usize,
}

/// Summarize the words that a session would play
#[must_use]
pub fn summarize(words: &WordList) -> WordListSummary {
    let lengths = words.iter().map(crate::core::TargetWord::len);

    WordListSummary {
        count: words.len(),
        shortest: lengths.clone().min().unwrap_or(0),
        longest: lengths.clone().max().unwrap_or(0),
        total_letters: lengths.sum(),
    }
}
