//! Display functions for line mode

use super::formatters::{
    OPENING_PROMPT, imagery_key, play_again_label, scoreboard, sound_cues, status_message,
};
use crate::commands::WordListSummary;
use crate::core::WordList;
use crate::engine::{GuessResult, Outcome, Snapshot};
use colored::Colorize;

/// Print the header and the scoreboard of a new round
pub fn print_round_start(snapshot: &Snapshot) {
    let [guessed, missed, to_guess, in_game] = scoreboard(snapshot);

    println!("\n{}", "─".repeat(60).green());
    println!(
        "Word {} of {}",
        (snapshot.current_word_index + 1).to_string().bright_yellow().bold(),
        snapshot.word_count
    );
    println!("{}", "─".repeat(60).green());
    println!("{guessed:<30}{to_guess:>30}");
    println!("{missed:<30}{in_game:>30}");

    println!("\n{}", OPENING_PROMPT.bright_cyan());
    print_board(snapshot);
}

/// Print the mask, remaining guesses and the letters tried so far
pub fn print_board(snapshot: &Snapshot) {
    println!("\n    {}\n", snapshot.revealed.to_string().bold());

    let tried: String = snapshot
        .guessed_letters
        .iter()
        .map(|letter| letter.as_char())
        .collect();
    println!(
        "  Guesses left: {}  [{}]",
        flower_bar(snapshot),
        imagery_key(snapshot.remaining_guesses).bright_black()
    );
    if !tried.is_empty() {
        println!("  Tried:        {}", tried.bright_white());
    }
}

/// Print the outcome of a guess
pub fn print_guess_result(result: &GuessResult, snapshot: &Snapshot, answer: &str) {
    let cues: Vec<&str> = sound_cues(result)
        .into_iter()
        .map(super::SoundCue::asset_name)
        .collect();
    let mark = if result.hit { "✓".green() } else { "✗".red() };
    println!(
        "\n  {mark} {}  {}",
        result.letter.to_string().bold(),
        format!("♪ {}", cues.join(", ")).bright_black()
    );

    print_board(snapshot);

    let message = status_message(result);
    match result.outcome {
        Outcome::Win => println!("\n{}", message.green().bold()),
        Outcome::Loss => {
            println!("\n{}", message.red().bold());
            println!("The word was {}", answer.bright_yellow().bold());
        }
        Outcome::Continue => println!("\n{message}"),
    }

    if result.outcome.resolves_round() {
        println!("\n{}", play_again_label(snapshot).bright_cyan());
    }
}

/// Print the active word list and its summary
pub fn print_word_list(words: &WordList, summary: &WordListSummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for (i, word) in words.iter().enumerate() {
        println!(
            "  {:>3}. {} {}",
            i + 1,
            word.text().bright_white(),
            format!("({} letters)", word.len()).bright_black()
        );
    }

    println!("\n  Words in game: {}", summary.count.to_string().bold());
    println!(
        "  Lengths:       {}-{} letters, {} in total",
        summary.shortest, summary.longest, summary.total_letters
    );
}

/// One flower per remaining guess, a dot per miss
fn flower_bar(snapshot: &Snapshot) -> String {
    format!(
        "{}{}",
        "✿".repeat(snapshot.remaining_guesses as usize).green(),
        "·".repeat(snapshot.misses() as usize).bright_black()
    )
}
