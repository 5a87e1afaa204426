//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{letter_list, spaced_reveal};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W>(f: &mut Frame, app: &App<'_, W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Snowman and word
            Constraint::Percentage(45), // Round info
        ])
        .split(chunks[1]);

    render_snowman(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn rounded_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("☃ SNOWMAN MELTDOWN")
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

fn render_snowman<W>(f: &mut Frame, app: &App<'_, W>, area: Rect) {
    let view = app.round.render();

    let mut lines: Vec<Line> = view
        .stage
        .lines()
        .map(|line| Line::styled(line.to_string(), Style::default().fg(Color::White)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Word: "),
        Span::styled(
            spaced_reveal(&view.reveal),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines).block(rounded_block(" Snowman "));
    f.render_widget(paragraph, area);
}

fn render_info_panel<W>(f: &mut Frame, app: &App<'_, W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Meltdown gauge
            Constraint::Min(4),    // Guesses
            Constraint::Length(5), // Session stats
        ])
        .split(area);

    let round = &app.round;
    let max = round.max_mistakes();
    let ratio = round.mistakes() as f64 / max as f64;
    let color = match round.remaining_mistakes() {
        0 | 1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(rounded_block(" Meltdown "))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}/{} mistakes", round.mistakes(), max));
    f.render_widget(gauge, chunks[0]);

    let guesses = Paragraph::new(vec![
        Line::from(format!("Found:     {}", letter_list(&round.guessed_letters()))),
        Line::from(format!("Remaining: {} mistakes", round.remaining_mistakes())),
    ])
    .block(rounded_block(" Guesses "));
    f.render_widget(guesses, chunks[1]);

    let stats = Paragraph::new(vec![
        Line::from(format!("Rounds: {}", app.stats.rounds)),
        Line::from(vec![
            Span::raw("Saved:  "),
            Span::styled(
                app.stats.wins.to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Melted: "),
            Span::styled(
                app.stats.losses.to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
    ])
    .block(rounded_block(" Session "));
    f.render_widget(stats, chunks[2]);
}

fn render_messages<W>(f: &mut Frame, app: &App<'_, W>, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let color = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(msg.text.clone()).style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(items).block(rounded_block(" Messages "));
    f.render_widget(list, area);
}

fn render_status<W>(f: &mut Frame, app: &App<'_, W>, area: Rect) {
    let help = match app.input_mode {
        InputMode::Guessing => "a-z: guess a letter | Esc: quit",
        InputMode::Replay => "y: play again | n: quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
