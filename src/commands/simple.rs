//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::engine::{GameEngine, GameError, Phase};
use crate::output::formatters::{play_again_label, sanitize_input};
use crate::output::{print_guess_result, print_round_start};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the
/// prompt.
pub fn run_simple(engine: &mut GameEngine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    play(engine, &mut input)
}

/// Drive the game from any line source
///
/// Input ends the session cleanly on EOF or `quit`.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
#[instrument(skip_all, fields(words = engine.word_count()))]
pub fn play<R: BufRead>(engine: &mut GameEngine, input: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                   Word Garden                            ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden word one letter at a time.");
    println!("Commands: 'quit' to exit\n");

    print_round_start(&engine.snapshot());

    loop {
        let Some(line) = read_line(input, prompt(engine))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match engine.phase() {
            Phase::AwaitingGuess => guess(engine, &line),
            Phase::RoundResolved | Phase::GameComplete => {
                if let Err(err) = next_round(engine) {
                    println!("{}", err.to_string().red());
                }
            }
        }
    }
}

fn prompt(engine: &GameEngine) -> &'static str {
    match engine.phase() {
        Phase::AwaitingGuess => "Guess a letter",
        Phase::RoundResolved | Phase::GameComplete => {
            play_again_label(&engine.snapshot())
        }
    }
}

fn guess(engine: &mut GameEngine, line: &str) {
    let Some(letter) = sanitize_input(line) else {
        println!("{}", "❌ Type a letter to guess.".red());
        return;
    };

    match engine.submit_guess(&letter.to_string()) {
        Ok(result) => {
            let answer = engine.target_word().text().to_string();
            print_guess_result(&result, &engine.snapshot(), &answer);
        }
        Err(err) => println!("{}", format!("❌ {err}").red()),
    }
}

/// Any input after a resolved round moves on, restarting first if needed
fn next_round(engine: &mut GameEngine) -> Result<(), GameError> {
    if engine.phase() == Phase::GameComplete {
        engine.restart_session()?;
        println!("\n🔄 Starting over from the first word!");
    }
    engine.advance_to_next_round()?;
    debug!(index = engine.current_word_index(), "Advanced to next word");

    print_round_start(&engine.snapshot());
    Ok(())
}

/// Read one trimmed line, `None` on EOF
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use std::io::Cursor;

    fn engine(words: &[&str]) -> GameEngine {
        GameEngine::new(WordList::new(words.iter().copied()).unwrap())
    }

    #[test]
    fn plays_through_scripted_input() {
        let mut engine = engine(&["HAM", "WARD"]);
        let mut input = Cursor::new("z\nh\na\nm\n\nw\n");

        play(&mut engine, &mut input).unwrap();

        assert_eq!(engine.words_guessed(), 1);
        assert_eq!(engine.current_word_index(), 1);
        assert_eq!(engine.phase(), Phase::AwaitingGuess);
        assert_eq!(engine.revealed().to_string(), "W _ _ _");
    }

    #[test]
    fn garbage_input_is_not_a_guess() {
        let mut engine = engine(&["HAM"]);
        let mut input = Cursor::new("123\n!!\n");

        play(&mut engine, &mut input).unwrap();

        assert_eq!(engine.remaining_guesses(), 8);
        assert!(engine.guessed_letters().is_empty());
    }

    #[test]
    fn restarts_after_last_word() {
        let mut engine = engine(&["HAM"]);
        let mut input = Cursor::new("h\na\nm\nyes\nh\n");

        play(&mut engine, &mut input).unwrap();

        assert_eq!(engine.words_guessed(), 0);
        assert_eq!(engine.current_word_index(), 0);
        assert_eq!(engine.revealed().to_string(), "H _ _");
    }

    #[test]
    fn quit_stops_reading() {
        let mut engine = engine(&["HAM"]);
        let mut input = Cursor::new("quit\nh\n");

        play(&mut engine, &mut input).unwrap();

        assert!(engine.guessed_letters().is_empty());
    }
}
