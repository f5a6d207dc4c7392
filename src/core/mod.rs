//! Core domain types for Word Garden
//!
//! This module contains the validated values the game engine is built from.
//! All types here are pure and perform no I/O.

mod letter;
mod reveal;
mod word;
mod word_list;

pub use letter::{GuessError, Letter};
pub use reveal::{PLACEHOLDER, Reveal};
pub use word::{TargetWord, WordError};
pub use word_list::{WordList, WordListError};
