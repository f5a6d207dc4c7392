//! Presentation helpers
//!
//! Pure mappings from engine snapshots plus terminal printing for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_guess_result, print_round_start, print_word_list};
pub use formatters::SoundCue;
