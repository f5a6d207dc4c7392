//! TUI rendering with ratatui
//!
//! Garden view: scoreboard, status, the hidden word, the guess field and the
//! flower that loses a petal per miss.

use super::app::{App, MessageStyle};
use crate::output::formatters::{play_again_label, scoreboard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Scoreboard
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_scoreboard(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and status
            Constraint::Percentage(40), // Flower and messages
        ])
        .split(chunks[2]);

    render_word_panel(f, app, main_chunks[0]);
    render_garden_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌷 WORD GARDEN")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_scoreboard(f: &mut Frame, app: &App, area: Rect) {
    let [guessed, missed, to_guess, in_game] = scoreboard(&app.engine.snapshot());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Paragraph::new(vec![Line::from(guessed), Line::from(missed)])
        .block(Block::default().borders(Borders::LEFT | Borders::BOTTOM));
    let right = Paragraph::new(vec![Line::from(to_guess), Line::from(in_game)])
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::RIGHT | Borders::BOTTOM));

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.engine.snapshot();

    let tried: Vec<Span> = snapshot
        .guessed_letters
        .iter()
        .map(|letter| {
            let style = if app.engine.target_word().contains(*letter) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{letter} "), style)
        })
        .collect();

    let mut content: Vec<Line> = app.status.lines().map(Line::from).collect();
    content.extend([
        Line::from(""),
        Line::from(Span::styled(
            snapshot.revealed.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(format!("{} letters hidden", snapshot.revealed.hidden_count()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
        Line::from("Tried:"),
        Line::from(tried),
    ]);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(
                    " Word {} of {} ",
                    (snapshot.current_word_index + 1).min(snapshot.word_count),
                    snapshot.word_count
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_garden_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Flower gauge
            Constraint::Length(3), // Sound cues
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_flower(f, app, chunks[0]);
    render_cues(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_flower(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.engine.remaining_guesses();
    let snapshot = app.engine.snapshot();
    let wilting = app.image.settle_at.is_some();

    let color = if wilting { Color::Red } else { Color::Green };
    let ratio = f64::from(remaining) / f64::from(snapshot.max_guesses);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", app.image.key))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{} guesses left", snapshot.max_guesses));

    f.render_widget(gauge, area);
}

fn render_cues(f: &mut Frame, app: &App, area: Rect) {
    let cues: Vec<&str> = app.last_cues.iter().map(|cue| cue.asset_name()).collect();
    let text = if cues.is_empty() {
        String::from("-")
    } else {
        format!("♪ {}", cues.join(", "))
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().title(" Sound ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let pending = app.pending_guess.map(String::from).unwrap_or_default();

    let (title, content, color) = if app.accepting_guesses() {
        (
            " Guess a Letter | Enter to submit ".to_string(),
            pending,
            Color::Yellow,
        )
    } else {
        (
            " Enter or 'n' to continue ".to_string(),
            play_again_label(&app.engine.snapshot()).to_string(),
            Color::Green,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Esc: Quit | Letters: Guess | Backspace: Clear | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
