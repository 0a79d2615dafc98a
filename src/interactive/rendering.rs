//! TUI rendering with ratatui
//!
//! Visualizations for the game board: status banner, language chips, word
//! reveal, and keyboard.

use super::app::App;
use crate::game::{Narrative, classify};
use crate::output::formatters::{KeyState, RevealState, key_state, reveal_states};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Status banner
            Constraint::Length(4), // Language chips
            Constraint::Length(3), // Word reveal
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status(f, app, chunks[1]);
    render_chips(f, app, chunks[2]);
    render_word(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_help(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚔ ASSEMBLY: ENDGAME ⚔")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let outcome = app.session.round().outcome();

    let (text, style) = match (classify(&outcome), &app.banner) {
        (Narrative::Won, Some(banner)) => (
            banner.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (Narrative::Lost, Some(banner)) => (
            banner.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        (Narrative::Warning { .. }, Some(banner)) => (
            banner.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ),
        _ => (
            format!(
                "Guess the word within {} attempts to keep the programming world safe from Assembly!",
                app.session.round().max_wrong()
            ),
            Style::default().fg(Color::Gray),
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_chips(f: &mut Frame, app: &App, area: Rect) {
    let wrong = app.session.round().outcome().wrong_guesses;

    let mut spans: Vec<Span> = Vec::new();
    for (index, lang) in app.pool.entries().iter().enumerate() {
        let chip = format!(" {} ", lang.name);

        let style = if app.pool.is_lost(index, wrong) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            let (br, bg, bb) = lang.background;
            let (fr, fg, fb) = lang.foreground;
            Style::default()
                .fg(Color::Rgb(fr, fg, fb))
                .bg(Color::Rgb(br, bg, bb))
        };

        spans.push(Span::styled(chip, style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Languages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let outcome = round.outcome();

    let mut spans: Vec<Span> = Vec::new();
    for (letter, state) in reveal_states(round.word(), round.guesses(), outcome.is_lost) {
        let (text, style) = match state {
            RevealState::Hidden => (
                " _ ".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            RevealState::Revealed => (
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            RevealState::Missed => (
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        spans.push(Span::styled(text, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::new();
            for letter in row.chars() {
                let text = format!(" {} ", letter.to_ascii_uppercase());
                let style = match key_state(letter, round.word(), round.guesses()) {
                    KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                    KeyState::Wrong => Style::default().fg(Color::Black).bg(Color::Red),
                    KeyState::Unused => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(text, style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let is_over = app.session.round().outcome().is_over;

    let help = if is_over {
        "n: new round │ q/Esc: quit"
    } else {
        "a-z: guess a letter │ Esc: quit"
    };

    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}
