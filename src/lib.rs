//! Word Garden
//!
//! A letter-by-letter word guessing game: each miss costs the flower a petal,
//! eight misses and the word is lost.
//!
//! # Quick Start
//!
//! ```rust
//! use word_garden::core::WordList;
//! use word_garden::engine::{GameEngine, Outcome};
//!
//! let words = WordList::new(["HAM", "WARD"]).unwrap();
//! let mut engine = GameEngine::new(words);
//!
//! let result = engine.submit_guess("Z").unwrap();
//! assert_eq!(result.outcome, Outcome::Continue);
//! assert_eq!(result.remaining_guesses, 7);
//! println!("{}", engine.revealed());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
