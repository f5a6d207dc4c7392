//! Phases, policies and read-only snapshots of the engine

use std::fmt;

use crate::core::{Letter, Reveal};

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A round is in play and accepts guesses
    AwaitingGuess,
    /// The last round ended; the next word can be started
    RoundResolved,
    /// Every word has been played; only a restart is accepted
    GameComplete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AwaitingGuess => "awaiting a guess",
            Self::RoundResolved => "the round is resolved",
            Self::GameComplete => "the game is complete",
        };
        write!(f, "{text}")
    }
}

/// How a letter guessed twice in the same round is charged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatGuessPolicy {
    /// Repeats cost nothing, hit or miss
    #[default]
    NoPenalty,
    /// Every submission of a missing letter costs a guess, repeats included
    PenalizeRepeatedMiss,
}

/// Everything a presentation layer needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub revealed: Reveal,
    pub remaining_guesses: u32,
    pub max_guesses: u32,
    pub guessed_letters: Vec<Letter>,
    pub words_guessed: usize,
    pub words_missed: usize,
    pub current_word_index: usize,
    pub word_count: usize,
    pub phase: Phase,
}

impl Snapshot {
    /// Words not yet resolved in this session
    #[must_use]
    pub fn words_remaining(&self) -> usize {
        self.word_count
            .saturating_sub(self.words_guessed + self.words_missed)
    }

    /// Misses charged so far this round
    #[must_use]
    pub fn misses(&self) -> u32 {
        self.max_guesses - self.remaining_guesses
    }
}
