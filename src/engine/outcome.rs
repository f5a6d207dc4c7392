//! Results of a single guess

use crate::core::{Letter, Reveal};

/// How a guess left the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Continue,
    Win,
    Loss,
}

impl Outcome {
    /// True for `Win` and `Loss`
    #[inline]
    #[must_use]
    pub const fn resolves_round(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

/// Result of `GameEngine::submit_guess`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub letter: Letter,
    pub outcome: Outcome,
    pub revealed: Reveal,
    pub remaining_guesses: u32,
    /// The letter occurs in the hidden word
    pub hit: bool,
    /// The letter had not been guessed earlier this round
    pub novel: bool,
    /// Distinct letters guessed this round, this one included
    pub guesses_made: usize,
    /// The round just resolved was the last word in the list
    pub session_complete: bool,
}
