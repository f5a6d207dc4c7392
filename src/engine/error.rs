//! Engine error types

use std::fmt;

use super::Phase;
use crate::core::GuessError;

/// Engine operations, named in `InvalidState` errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    StartRound,
    SubmitGuess,
    RestartSession,
    AdvanceToNextRound,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartRound => "start round",
            Self::SubmitGuess => "submit guess",
            Self::RestartSession => "restart session",
            Self::AdvanceToNextRound => "advance to next round",
        };
        write!(f, "{name}")
    }
}

/// Error returned by engine operations
///
/// A failed call never changes engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed guess input
    InvalidGuess(GuessError),
    /// Operation not allowed in the current phase
    InvalidState { operation: Operation, phase: Phase },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::InvalidState { operation, phase } => {
                write!(f, "Cannot {operation} while {phase}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::InvalidState { .. } => None,
        }
    }
}

impl From<GuessError> for GameError {
    fn from(err: GuessError) -> Self {
        Self::InvalidGuess(err)
    }
}
