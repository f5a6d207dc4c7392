//! Word Garden - CLI
//!
//! Word guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use word_garden::{
    commands::{run_simple, summarize},
    core::WordList,
    engine::{GameEngine, RepeatGuessPolicy},
    output::print_word_list,
    wordlists::loader::{garden, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_garden",
    about = "Uncover the hidden word one letter at a time before the flower wilts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'garden' (default, built-in) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "garden")]
    wordlist: String,

    /// Charge a guess every time a missing letter is submitted, repeats included
    #[arg(long, global = true)]
    repeat_penalty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Print the words a session would play, in order
    Words,
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "garden" => garden().context("Built-in word list is invalid"),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

/// Route logs to stderr or a file; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8, log_file: Option<&PathBuf>, quiet_default: bool) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("word_garden={default_level},warn"))
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The TUI owns the screen; only let it log to stderr when asked to
        None if quiet_default && verbose == 0 => {
            builder.with_writer(std::io::sink).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(
        cli.verbose,
        cli.log_file.as_ref(),
        matches!(command, Commands::Play),
    )?;

    let words = load_words(&cli.wordlist)?;
    let policy = if cli.repeat_penalty {
        RepeatGuessPolicy::PenalizeRepeatedMiss
    } else {
        RepeatGuessPolicy::NoPenalty
    };

    match command {
        Commands::Play => run_play_command(words, policy),
        Commands::Simple => run_simple_command(words, policy),
        Commands::Words => {
            run_words_command(&words);
            Ok(())
        }
    }
}

#[instrument(skip_all, fields(words = words.len(), policy = ?policy))]
fn run_play_command(words: WordList, policy: RepeatGuessPolicy) -> Result<()> {
    use word_garden::interactive::{App, run_tui};

    info!("Starting TUI");
    let app = App::new(GameEngine::with_policy(words, policy));
    run_tui(app)
}

#[instrument(skip_all, fields(words = words.len(), policy = ?policy))]
fn run_simple_command(words: WordList, policy: RepeatGuessPolicy) -> Result<()> {
    let mut engine = GameEngine::with_policy(words, policy);
    run_simple(&mut engine).context("Line mode I/O failed")
}

fn run_words_command(words: &WordList) {
    let summary = summarize(words);
    print_word_list(words, &summary);
}
