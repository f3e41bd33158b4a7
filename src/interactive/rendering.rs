//! TUI rendering with ratatui
//!
//! Layout is a pure function of the frame size so mouse clicks can be mapped
//! back to the keyboard with the same geometry that drew it.

use super::app::App;
use crate::core::{ALPHABET, Letter};
use crate::languages::ALLOWED_MISTAKES;
use crate::view::{self, Key, KeyStatus, Slot, StatusTags};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEY_WIDTH: u16 = 5;
const KEY_HEIGHT: u16 = 3;
const KEY_GAP: u16 = 1;
const KEYS_PER_ROW: usize = 9;
const CONTENT_WIDTH: u16 = 60;
const BUTTON_WIDTH: u16 = 20;

const UNUSED_KEY: Color = Color::Rgb(0xFF, 0xC1, 0x07);
const CORRECT_KEY: Color = Color::Rgb(0x10, 0xA9, 0x5B);
const WRONG_KEY: Color = Color::Rgb(0xEC, 0x5D, 0x49);

/// Screen regions of one frame
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    pub header: Rect,
    pub status: Rect,
    pub chips: Rect,
    pub word: Rect,
    pub keyboard: Rect,
    pub new_game: Rect,
    pub footer: Rect,
}

/// Split the frame into regions
#[must_use]
pub fn regions(area: Rect) -> Regions {
    let rows = (ALPHABET.len().div_ceil(KEYS_PER_ROW)) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                    // Top padding
            Constraint::Length(3),                 // Header
            Constraint::Length(4),                 // Status banner
            Constraint::Length(3),                 // Language chips
            Constraint::Length(3),                 // Word slots
            Constraint::Length(rows * KEY_HEIGHT), // Keyboard
            Constraint::Length(3),                 // New game button
            Constraint::Min(0),                    // Bottom padding
            Constraint::Length(1),                 // Footer
        ])
        .split(area);

    Regions {
        header: centered(chunks[1], CONTENT_WIDTH),
        status: centered(chunks[2], CONTENT_WIDTH),
        chips: centered(chunks[3], CONTENT_WIDTH),
        word: centered(chunks[4], CONTENT_WIDTH),
        keyboard: centered(chunks[5], CONTENT_WIDTH),
        new_game: chunks[6],
        footer: chunks[8],
    }
}

/// A `width`-wide rect horizontally centered in `area`
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Where each keyboard key is drawn, in alphabet order
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(Letter, Rect)> {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(i, &letter)| {
            let row = i / KEYS_PER_ROW;
            let col = (i % KEYS_PER_ROW) as u16;
            let in_row = (ALPHABET.len() - row * KEYS_PER_ROW).min(KEYS_PER_ROW) as u16;

            let row_width = in_row * KEY_WIDTH + (in_row - 1) * KEY_GAP;
            let x = area.x + area.width.saturating_sub(row_width) / 2 + col * (KEY_WIDTH + KEY_GAP);
            let y = area.y + row as u16 * KEY_HEIGHT;

            let rect = Rect::new(x, y, KEY_WIDTH, KEY_HEIGHT).intersection(area);
            (letter, rect)
        })
        .collect()
}

/// The key under a terminal cell, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Letter> {
    let position = Position::new(column, row);
    key_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(letter, _)| letter)
}

/// Where the "New Game" button is drawn
#[must_use]
pub fn new_game_button(area: Rect) -> Rect {
    centered(area, BUTTON_WIDTH)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let regions = regions(f.area());

    render_header(f, regions.header);
    render_status(f, app, regions.status);
    render_chips(f, app, regions.chips);
    render_word(f, app, regions.word);
    render_keyboard(f, app, regions.keyboard);

    if app.game.is_over() {
        render_new_game(f, regions.new_game);
    }

    render_footer(f, app, regions.footer);

    // Cosmetic overlay goes last so it falls over everything
    if let Some(confetti) = &app.confetti {
        f.render_widget(confetti, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Assembly: Endgame",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Guess the word in under {ALLOWED_MISTAKES} attempts to keep the programming world safe from Assembly!"
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(header, area);
}

fn status_style(tags: StatusTags) -> Style {
    if tags.won {
        Style::default().bg(Color::Green).fg(Color::White)
    } else if tags.lost {
        Style::default().bg(Color::Red).fg(Color::White)
    } else if tags.farewell {
        Style::default()
            .bg(Color::Magenta)
            .fg(Color::White)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let tags = StatusTags::from_game(&app.game);
    let style = status_style(tags);

    let mut lines = Vec::new();
    if let Some((headline, body)) = view::status_text(view::status(&app.game), app.farewell_variant)
    {
        if !headline.is_empty() {
            lines.push(Line::from(Span::styled(
                headline,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(body));
    }

    let border_type = if tags.farewell {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let mut block = Block::default().border_type(border_type);
    if !tags.is_empty() {
        block = block.borders(Borders::ALL);
    }

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .block(block);
    f.render_widget(banner, area);
}

fn render_chips(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for chip in view::language_chips(&app.game) {
        let (r, g, b) = chip.language.background;
        let (fr, fg, fb) = chip.language.foreground;

        let style = if chip.lost {
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Black)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .bg(Color::Rgb(r, g, b))
                .fg(Color::Rgb(fr, fg, fb))
        };

        let label = if chip.lost {
            format!(" 💀{} ", chip.language.name)
        } else {
            format!(" {} ", chip.language.name)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(chips, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let base = Style::default()
        .bg(Color::Rgb(0x44, 0x40, 0x3C))
        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD);

    let mut spans = Vec::new();
    for slot in view::slots(&app.game) {
        let (text, style) = match slot {
            Slot::Hidden => ("   ".to_string(), base),
            Slot::Revealed(letter) => (format!(" {letter} "), base.fg(Color::White)),
            Slot::Missed(letter) => (format!(" {letter} "), base.fg(Color::Red)),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    spans.pop();

    let word = Paragraph::new(vec![Line::default(), Line::from(spans)]).alignment(Alignment::Center);
    f.render_widget(word, area);
}

fn key_style(key: Key) -> Style {
    let bg = match key.status {
        KeyStatus::Unused => UNUSED_KEY,
        KeyStatus::Correct => CORRECT_KEY,
        KeyStatus::Wrong => WRONG_KEY,
    };

    let style = Style::default().bg(bg).fg(Color::Black);
    if key.disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = view::keyboard(&app.game);

    for ((letter, rect), key) in key_rects(area).into_iter().zip(keys) {
        if rect.is_empty() {
            continue;
        }
        let button = Paragraph::new(letter.to_string())
            .alignment(Alignment::Center)
            .style(key_style(key))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(button, rect);
    }
}

fn render_new_game(f: &mut Frame, area: Rect) {
    let button = Paragraph::new("New Game")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(Color::LightBlue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(button, new_game_button(area));
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak,
        app.stats.best_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.game.is_over() {
        "Enter/n/click: New Game | Esc: Quit"
    } else {
        "A-Z or click: Guess | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
