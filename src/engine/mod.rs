//! Word guessing game engine
//!
//! A pure state machine: word progression, guess validation, reveal
//! computation, win/loss detection and session restarts.

mod error;
mod game;
mod outcome;
mod state;

pub use error::{GameError, Operation};
pub use game::{GameEngine, MAX_GUESSES};
pub use outcome::{GuessResult, Outcome};
pub use state::{Phase, RepeatGuessPolicy, Snapshot};
