//! The game state machine
//!
//! `GameEngine` enforces the rules of one round and the sequencing across
//! rounds. It performs no I/O: callers feed it guesses and read snapshots.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::{GameError, GuessResult, Operation, Outcome, Phase, RepeatGuessPolicy, Snapshot};
use crate::core::{Letter, Reveal, TargetWord, WordList};

/// Misses allowed per word
pub const MAX_GUESSES: u32 = 8;

/// State of the word currently in play
#[derive(Debug, Clone)]
struct RoundState {
    target: TargetWord,
    guessed: FxHashSet<Letter>,
    remaining: u32,
}

impl RoundState {
    fn new(target: TargetWord) -> Self {
        Self {
            target,
            guessed: FxHashSet::default(),
            remaining: MAX_GUESSES,
        }
    }

    fn reveal(&self) -> Reveal {
        Reveal::calculate(&self.target, &self.guessed)
    }
}

/// Word guessing game engine
///
/// Constructed once per session; the first round starts immediately.
///
/// # Examples
/// ```
/// use word_garden::core::WordList;
/// use word_garden::engine::{GameEngine, Outcome, Phase};
///
/// let words = WordList::new(["HAM"]).unwrap();
/// let mut engine = GameEngine::new(words);
///
/// engine.submit_guess("H").unwrap();
/// engine.submit_guess("A").unwrap();
/// let result = engine.submit_guess("M").unwrap();
///
/// assert_eq!(result.outcome, Outcome::Win);
/// assert_eq!(result.revealed.to_string(), "H A M");
/// assert_eq!(engine.phase(), Phase::GameComplete);
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine {
    words: WordList,
    policy: RepeatGuessPolicy,
    round: RoundState,
    current_word_index: usize,
    words_guessed: usize,
    words_missed: usize,
    phase: Phase,
}

impl GameEngine {
    /// Create an engine that never charges for repeated letters
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self::with_policy(words, RepeatGuessPolicy::default())
    }

    /// Create an engine with an explicit repeat-guess policy
    #[must_use]
    pub fn with_policy(words: WordList, policy: RepeatGuessPolicy) -> Self {
        let round = RoundState::new(words.first().clone());
        info!(
            word_count = words.len(),
            ?policy,
            "Starting session"
        );

        Self {
            words,
            policy,
            round,
            current_word_index: 0,
            words_guessed: 0,
            words_missed: 0,
            phase: Phase::AwaitingGuess,
        }
    }

    /// Start (or restart) the round for the word at the current index
    ///
    /// Returns the initial, fully hidden mask.
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` when every word has been played;
    /// call `restart_session` first.
    pub fn start_round(&mut self) -> Result<Reveal, GameError> {
        let Some(target) = self.words.get(self.current_word_index) else {
            return Err(self.reject(Operation::StartRound));
        };

        self.round = RoundState::new(target.clone());
        self.phase = Phase::AwaitingGuess;

        info!(
            index = self.current_word_index,
            length = self.round.target.len(),
            "Round started"
        );

        Ok(Reveal::hidden(&self.round.target))
    }

    /// Submit raw guess text
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` if the input is not exactly one
    /// letter, and `GameError::InvalidState` unless a guess is awaited.
    /// Neither changes any state.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        let letter = Letter::parse(input).inspect_err(|err| {
            debug!(input, %err, "Rejected guess");
        })?;
        self.submit_letter(letter)
    }

    /// Submit an already validated letter
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` unless a guess is awaited.
    pub fn submit_letter(&mut self, letter: Letter) -> Result<GuessResult, GameError> {
        self.require(Operation::SubmitGuess, Phase::AwaitingGuess)?;

        let round = &mut self.round;
        let novel = round.guessed.insert(letter);
        let hit = round.target.contains(letter);

        let charged = match self.policy {
            RepeatGuessPolicy::NoPenalty => !hit && novel,
            RepeatGuessPolicy::PenalizeRepeatedMiss => !hit,
        };
        if charged {
            round.remaining = round.remaining.saturating_sub(1);
        }

        let revealed = round.reveal();
        let remaining_guesses = round.remaining;
        let guesses_made = round.guessed.len();

        debug!(
            %letter,
            hit,
            novel,
            remaining = remaining_guesses,
            mask = %revealed,
            "Guess applied"
        );

        // Win is checked first: the final letter can also be the last guess
        let outcome = if revealed.is_complete() {
            self.words_guessed += 1;
            Outcome::Win
        } else if remaining_guesses == 0 {
            self.words_missed += 1;
            Outcome::Loss
        } else {
            Outcome::Continue
        };

        if outcome.resolves_round() {
            self.resolve_round(outcome, guesses_made);
        }

        Ok(GuessResult {
            letter,
            outcome,
            revealed,
            remaining_guesses,
            hit,
            novel,
            guesses_made,
            session_complete: self.phase == Phase::GameComplete,
        })
    }

    /// Reset the session after every word has been played
    ///
    /// Afterwards the engine is ready to start the first word again, through
    /// either `advance_to_next_round` or `start_round`.
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` unless the game is complete.
    pub fn restart_session(&mut self) -> Result<(), GameError> {
        self.require(Operation::RestartSession, Phase::GameComplete)?;

        self.current_word_index = 0;
        self.words_guessed = 0;
        self.words_missed = 0;
        self.phase = Phase::RoundResolved;

        info!("Session restarted");
        Ok(())
    }

    /// Start the next word after a resolved round
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` unless the last round is resolved and
    /// words remain.
    pub fn advance_to_next_round(&mut self) -> Result<Reveal, GameError> {
        self.require(Operation::AdvanceToNextRound, Phase::RoundResolved)?;
        if self.current_word_index >= self.words.len() {
            return Err(self.reject(Operation::AdvanceToNextRound));
        }
        self.start_round()
    }

    /// Current mask of the word in play
    #[must_use]
    pub fn revealed(&self) -> Reveal {
        self.round.reveal()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.round.remaining
    }

    #[must_use]
    pub fn words_guessed(&self) -> usize {
        self.words_guessed
    }

    #[must_use]
    pub fn words_missed(&self) -> usize {
        self.words_missed
    }

    #[must_use]
    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn policy(&self) -> RepeatGuessPolicy {
        self.policy
    }

    /// The word of the current (or just resolved) round
    #[must_use]
    pub fn target_word(&self) -> &TargetWord {
        &self.round.target
    }

    /// Letters guessed this round, alphabetically
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.round.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Read-only copy of everything presentation needs
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revealed: self.revealed(),
            remaining_guesses: self.round.remaining,
            max_guesses: MAX_GUESSES,
            guessed_letters: self.guessed_letters(),
            words_guessed: self.words_guessed,
            words_missed: self.words_missed,
            current_word_index: self.current_word_index,
            word_count: self.words.len(),
            phase: self.phase,
        }
    }

    fn resolve_round(&mut self, outcome: Outcome, guesses_made: usize) {
        self.current_word_index += 1;
        self.phase = if self.current_word_index == self.words.len() {
            Phase::GameComplete
        } else {
            Phase::RoundResolved
        };

        info!(
            word = %self.round.target,
            ?outcome,
            guesses_made,
            words_guessed = self.words_guessed,
            words_missed = self.words_missed,
            phase = ?self.phase,
            "Round resolved"
        );
    }

    fn require(&self, operation: Operation, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.reject(operation))
        }
    }

    fn reject(&self, operation: Operation) -> GameError {
        debug!(%operation, phase = ?self.phase, "Rejected out-of-sequence call");
        GameError::InvalidState {
            operation,
            phase: self.phase,
        }
    }
}
