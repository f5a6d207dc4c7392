//! Pure mappings from engine state to presentation
//!
//! Nothing here touches the terminal; the line mode and the TUI both render
//! from these.

use crate::engine::{GuessResult, Outcome, Phase, Snapshot};

/// Prompt shown at the start of every round
pub const OPENING_PROMPT: &str = "How Many Guesses to Uncover the Hidden Word?";

/// How long the wilt image stays up after a miss before the flower returns
pub const WILT_DURATION_MS: u64 = 750;

/// Audio cue a presentation layer may play after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Correct,
    Incorrect,
    WordGuessed,
    WordNotGuessed,
}

impl SoundCue {
    /// Asset name of the cue
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::WordGuessed => "word-guessed",
            Self::WordNotGuessed => "word-not-guessed",
        }
    }
}

/// Status line describing the latest guess
///
/// # Examples
/// ```
/// use word_garden::core::WordList;
/// use word_garden::engine::GameEngine;
/// use word_garden::output::formatters::status_message;
///
/// let mut engine = GameEngine::new(WordList::new(["HAM", "WARD"]).unwrap());
/// let result = engine.submit_guess("H").unwrap();
/// assert_eq!(status_message(&result), "You've Made 1 Guess.");
/// ```
#[must_use]
pub fn status_message(result: &GuessResult) -> String {
    let count = result.guesses_made;
    let mut message = match result.outcome {
        Outcome::Win => {
            format!("You've Guessed It! It Took You {count} Guesses to Guess the Word!")
        }
        Outcome::Loss => "Sooo Sorry! You are All Out of Guesses.".to_string(),
        Outcome::Continue => {
            format!("You've Made {count} Guess{}.", if count == 1 { "" } else { "es" })
        }
    };

    if result.session_complete {
        message.push_str("\nYou've Tried All of the Words. Restart from the Beginning?");
    }

    message
}

/// Image shown while the round rests at `remaining` guesses
#[must_use]
pub fn imagery_key(remaining: u32) -> String {
    format!("flower{remaining}")
}

/// Image shown right after a miss, before `imagery_key` takes over
#[must_use]
pub fn wilt_key(remaining: u32) -> String {
    format!("wilt{remaining}")
}

/// Cues to play after a guess, in order
///
/// Every guess plays a hit or miss cue; a resolving guess adds the round cue.
#[must_use]
pub fn sound_cues(result: &GuessResult) -> Vec<SoundCue> {
    let mut cues = vec![if result.hit {
        SoundCue::Correct
    } else {
        SoundCue::Incorrect
    }];

    match result.outcome {
        Outcome::Win => cues.push(SoundCue::WordGuessed),
        Outcome::Loss => cues.push(SoundCue::WordNotGuessed),
        Outcome::Continue => {}
    }

    cues
}

/// Label of the button (or key hint) that moves past a resolved round
#[must_use]
pub fn play_again_label(snapshot: &Snapshot) -> &'static str {
    if snapshot.phase == Phase::GameComplete {
        "Restart Game?"
    } else {
        "Another Word?"
    }
}

/// Reduce raw keyboard text to a single guess
///
/// Drops everything that is not a letter and keeps the last letter typed,
/// uppercased.
///
/// # Examples
/// ```
/// use word_garden::output::formatters::sanitize_input;
///
/// assert_eq!(sanitize_input("a1b"), Some('B'));
/// assert_eq!(sanitize_input("  "), None);
/// ```
#[must_use]
pub fn sanitize_input(raw: &str) -> Option<char> {
    raw.chars()
        .rev()
        .find(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

/// Scoreboard lines: solved and missed on the left, progress on the right
#[must_use]
pub fn scoreboard(snapshot: &Snapshot) -> [String; 4] {
    [
        format!("Words Guessed: {}", snapshot.words_guessed),
        format!("Words Missed: {}", snapshot.words_missed),
        format!("Words to Guess: {}", snapshot.words_remaining()),
        format!("Words in Game: {}", snapshot.word_count),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::engine::GameEngine;

    fn engine(words: &[&str]) -> GameEngine {
        GameEngine::new(WordList::new(words.iter().copied()).unwrap())
    }

    fn play(engine: &mut GameEngine, letters: &str) -> GuessResult {
        let mut last = None;
        for c in letters.chars() {
            last = Some(engine.submit_guess(&c.to_string()).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn continue_message_pluralizes() {
        let mut engine = engine(&["HAM", "WARD"]);
        assert_eq!(status_message(&play(&mut engine, "Z")), "You've Made 1 Guess.");
        assert_eq!(status_message(&play(&mut engine, "H")), "You've Made 2 Guesses.");
    }

    #[test]
    fn win_message_counts_guesses() {
        let mut engine = engine(&["HAM", "WARD"]);
        let result = play(&mut engine, "ZHAM");
        assert_eq!(
            status_message(&result),
            "You've Guessed It! It Took You 4 Guesses to Guess the Word!"
        );
    }

    #[test]
    fn loss_on_last_word_appends_restart_prompt() {
        let mut engine = engine(&["HAM"]);
        let result = play(&mut engine, "BCDEFGIJ");
        assert_eq!(
            status_message(&result),
            "Sooo Sorry! You are All Out of Guesses.\n\
             You've Tried All of the Words. Restart from the Beginning?"
        );
    }

    #[test]
    fn imagery_keys_follow_remaining_guesses() {
        assert_eq!(imagery_key(8), "flower8");
        assert_eq!(wilt_key(7), "wilt7");
        assert_eq!(imagery_key(0), "flower0");
    }

    #[test]
    fn sound_cues_for_each_outcome() {
        let mut engine = engine(&["HAM", "WARD"]);
        assert_eq!(sound_cues(&play(&mut engine, "Z")), [SoundCue::Incorrect]);
        assert_eq!(sound_cues(&play(&mut engine, "H")), [SoundCue::Correct]);
        assert_eq!(
            sound_cues(&play(&mut engine, "AM")),
            [SoundCue::Correct, SoundCue::WordGuessed]
        );

        engine.advance_to_next_round().unwrap();
        assert_eq!(
            sound_cues(&play(&mut engine, "BCEFGHIJ")),
            [SoundCue::Incorrect, SoundCue::WordNotGuessed]
        );
    }

    #[test]
    fn sound_cue_asset_names() {
        assert_eq!(SoundCue::WordNotGuessed.asset_name(), "word-not-guessed");
        assert_eq!(SoundCue::Correct.asset_name(), "correct");
    }

    #[test]
    fn play_again_label_switches_on_completion() {
        let mut engine = engine(&["HAM", "WARD"]);
        play(&mut engine, "HAM");
        assert_eq!(play_again_label(&engine.snapshot()), "Another Word?");

        engine.advance_to_next_round().unwrap();
        play(&mut engine, "WARD");
        assert_eq!(play_again_label(&engine.snapshot()), "Restart Game?");
    }

    #[test]
    fn sanitize_keeps_last_letter_only() {
        assert_eq!(sanitize_input("h"), Some('H'));
        assert_eq!(sanitize_input("HAM"), Some('M'));
        assert_eq!(sanitize_input("q!?"), Some('Q'));
        assert_eq!(sanitize_input("42"), None);
        assert_eq!(sanitize_input(""), None);
    }

    #[test]
    fn scoreboard_reflects_progress() {
        let mut engine = engine(&["HAM", "WARD", "LLOYD"]);
        play(&mut engine, "HAM");
        let lines = scoreboard(&engine.snapshot());
        assert_eq!(lines[0], "Words Guessed: 1");
        assert_eq!(lines[1], "Words Missed: 0");
        assert_eq!(lines[2], "Words to Guess: 2");
        assert_eq!(lines[3], "Words in Game: 3");
    }
}
