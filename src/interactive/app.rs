//! TUI application state and logic

use crate::engine::{GameEngine, GameError, GuessResult, Outcome, Phase};
use crate::output::SoundCue;
use crate::output::formatters::{
    OPENING_PROMPT, WILT_DURATION_MS, imagery_key, sanitize_input, sound_cues, status_message,
    wilt_key,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long the event loop sleeps when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub pending_guess: Option<char>,
    pub status: String,
    pub messages: Vec<Message>,
    pub image: FlowerImage,
    pub last_cues: Vec<SoundCue>,
    pub should_quit: bool,
}

/// Garden image, with the wilt shown briefly after a miss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowerImage {
    pub key: String,
    pub settle_at: Option<Instant>,
    settled_key: String,
}

impl FlowerImage {
    fn resting(remaining: u32) -> Self {
        Self {
            key: imagery_key(remaining),
            settle_at: None,
            settled_key: imagery_key(remaining),
        }
    }

    fn wilting(remaining: u32, now: Instant) -> Self {
        Self {
            key: wilt_key(remaining),
            settle_at: Some(now + Duration::from_millis(WILT_DURATION_MS)),
            settled_key: imagery_key(remaining),
        }
    }

    /// Swap the wilt for the flower once its time is up
    fn tick(&mut self, now: Instant) {
        if self.settle_at.is_some_and(|at| now >= at) {
            self.key.clone_from(&self.settled_key);
            self.settle_at = None;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        let image = FlowerImage::resting(engine.remaining_guesses());

        Self {
            engine,
            pending_guess: None,
            status: OPENING_PROMPT.to_string(),
            messages: vec![Message {
                text: "Type a letter and press Enter to guess.".to_string(),
                style: MessageStyle::Info,
            }],
            image,
            last_cues: Vec::new(),
            should_quit: false,
        }
    }

    /// True while the text field (rather than the play-again button) is shown
    #[must_use]
    pub fn accepting_guesses(&self) -> bool {
        self.engine.phase() == Phase::AwaitingGuess
    }

    /// Route a key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if self.accepting_guesses() => {
                self.type_char(c);
            }
            KeyCode::Backspace => {
                self.pending_guess = None;
            }
            KeyCode::Enter if self.accepting_guesses() => {
                self.submit_guess(now);
            }
            KeyCode::Enter | KeyCode::Char('n' | ' ') => {
                self.play_again();
            }
            _ => {}
        }
    }

    /// Filter a typed character the way the guess field does
    pub fn type_char(&mut self, c: char) {
        let mut field: String = self.pending_guess.into_iter().collect();
        field.push(c);
        self.pending_guess = sanitize_input(&field);
    }

    /// Submit the pending letter, if any
    pub fn submit_guess(&mut self, now: Instant) {
        let Some(letter) = self.pending_guess.take() else {
            return;
        };

        match self.engine.submit_guess(&letter.to_string()) {
            Ok(result) => self.apply_result(&result, now),
            Err(err) => self.report(&err),
        }
    }

    /// Move past a resolved round, restarting the session after the last word
    pub fn play_again(&mut self) {
        let advanced = match self.engine.phase() {
            Phase::AwaitingGuess => return,
            Phase::GameComplete => self
                .engine
                .restart_session()
                .and_then(|()| self.engine.advance_to_next_round()),
            Phase::RoundResolved => self.engine.advance_to_next_round(),
        };

        match advanced {
            Ok(_) => {
                self.status = OPENING_PROMPT.to_string();
                self.image = FlowerImage::resting(self.engine.remaining_guesses());
                self.last_cues.clear();
                self.add_message(
                    &format!(
                        "Word {} of {}",
                        self.engine.current_word_index() + 1,
                        self.engine.word_count()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => self.report(&err),
        }
    }

    /// Advance timed presentation effects
    pub fn tick(&mut self, now: Instant) {
        self.image.tick(now);
    }

    /// Time left until the next scheduled effect
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.image
            .settle_at
            .map(|at| at.saturating_duration_since(now))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn apply_result(&mut self, result: &GuessResult, now: Instant) {
        self.status = status_message(result);
        self.last_cues = sound_cues(result);

        self.image = if result.hit {
            FlowerImage::resting(result.remaining_guesses)
        } else {
            FlowerImage::wilting(result.remaining_guesses, now)
        };

        match result.outcome {
            Outcome::Win => self.add_message(
                &format!("🌸 {} bloomed!", self.engine.target_word()),
                MessageStyle::Success,
            ),
            Outcome::Loss => self.add_message(
                &format!("🥀 The word was {}", self.engine.target_word()),
                MessageStyle::Error,
            ),
            Outcome::Continue if !result.novel => self.add_message(
                &format!("Already tried {}", result.letter),
                MessageStyle::Info,
            ),
            Outcome::Continue => {}
        }
    }

    fn report(&mut self, err: &GameError) {
        warn!(%err, "Engine rejected call");
        self.add_message(&err.to_string(), MessageStyle::Error);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Wake up for the wilt-to-flower swap even without input
        let timeout = app.next_deadline(Instant::now()).unwrap_or(IDLE_POLL);
        // Only process key press events (fixes Windows double-input bug)
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            debug!(
                words_guessed = app.engine.words_guessed(),
                words_missed = app.engine.words_missed(),
                "Quitting TUI"
            );
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;

    fn app(words: &[&str]) -> App {
        App::new(GameEngine::new(
            WordList::new(words.iter().copied()).unwrap(),
        ))
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn guess(app: &mut App, c: char, now: Instant) {
        press(app, KeyCode::Char(c), now);
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn typing_keeps_last_letter_uppercased() {
        let mut app = app(&["HAM"]);
        let now = Instant::now();

        press(&mut app, KeyCode::Char('h'), now);
        assert_eq!(app.pending_guess, Some('H'));

        press(&mut app, KeyCode::Char('3'), now);
        assert_eq!(app.pending_guess, Some('H'));

        press(&mut app, KeyCode::Char('a'), now);
        assert_eq!(app.pending_guess, Some('A'));

        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.pending_guess, None);
    }

    #[test]
    fn enter_without_letter_does_nothing() {
        let mut app = app(&["HAM"]);
        press(&mut app, KeyCode::Enter, Instant::now());

        assert_eq!(app.engine.remaining_guesses(), 8);
        assert_eq!(app.status, OPENING_PROMPT);
    }

    #[test]
    fn miss_wilts_then_settles_to_flower() {
        let mut app = app(&["HAM"]);
        let now = Instant::now();

        guess(&mut app, 'z', now);
        assert_eq!(app.image.key, "wilt7");
        assert_eq!(app.last_cues, [SoundCue::Incorrect]);

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.image.key, "wilt7");

        app.tick(now + Duration::from_millis(WILT_DURATION_MS));
        assert_eq!(app.image.key, "flower7");
        assert_eq!(app.next_deadline(now), None);
    }

    #[test]
    fn hit_keeps_flower() {
        let mut app = app(&["HAM"]);
        guess(&mut app, 'h', Instant::now());

        assert_eq!(app.image.key, "flower8");
        assert_eq!(app.status, "You've Made 1 Guess.");
        assert_eq!(app.next_deadline(Instant::now()), None);
    }

    #[test]
    fn win_switches_to_play_again() {
        let mut app = app(&["HAM", "WARD"]);
        let now = Instant::now();
        for c in "ham".chars() {
            guess(&mut app, c, now);
        }

        assert!(!app.accepting_guesses());
        assert_eq!(app.last_cues, [SoundCue::Correct, SoundCue::WordGuessed]);

        // Letters no longer reach the engine
        press(&mut app, KeyCode::Char('w'), now);
        assert_eq!(app.pending_guess, None);

        press(&mut app, KeyCode::Enter, now);
        assert!(app.accepting_guesses());
        assert_eq!(app.engine.revealed().to_string(), "_ _ _ _");
        assert_eq!(app.image.key, "flower8");
    }

    #[test]
    fn play_again_after_last_word_restarts_session() {
        let mut app = app(&["HAM"]);
        let now = Instant::now();
        for c in "bcdefgij".chars() {
            guess(&mut app, c, now);
        }
        assert_eq!(app.engine.phase(), Phase::GameComplete);
        assert!(app.status.ends_with("Restart from the Beginning?"));

        press(&mut app, KeyCode::Char('n'), now);
        assert_eq!(app.engine.phase(), Phase::AwaitingGuess);
        assert_eq!(app.engine.words_missed(), 0);
        assert_eq!(app.engine.current_word_index(), 0);
    }

    #[test]
    fn escape_quits() {
        let mut app = app(&["HAM"]);
        press(&mut app, KeyCode::Esc, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(&["HAM"]);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
