//! Word lists for Word Garden
//!
//! Provides the embedded default list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{GARDEN, GARDEN_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garden_count_matches_const() {
        assert_eq!(GARDEN.len(), GARDEN_COUNT);
    }

    #[test]
    fn garden_words_are_uppercase_letters() {
        for &word in GARDEN {
            assert!(!word.is_empty(), "Empty entry in word list");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn garden_play_order() {
        assert_eq!(GARDEN.first(), Some(&"GREENE"));
        assert_eq!(GARDEN.last(), Some(&"HAMPTON"));
    }

    #[test]
    fn expected_count() {
        assert_eq!(GARDEN_COUNT, 23, "Expected 23 words");
    }
}
