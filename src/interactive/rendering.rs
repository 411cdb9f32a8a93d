//! TUI rendering with ratatui
//!
//! Screen layouts and the guess grid. Letter cells are recomputed from the
//! row text on every draw via `evaluate_row`, so submitted, in-progress and
//! empty rows all render through one path.

use super::app::{App, Dialog, MENU_ITEMS, Screen, SelectStage};
use crate::core::{Feedback, LetterResult, WORD_LENGTH, evaluate_row};
use crate::game::{Difficulty, GameMode, GuessSlot, RoundState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Color palette derived from the dark-theme setting
struct Theme {
    fg: Color,
    accent: Color,
    dim: Color,
    correct: Color,
    present: Color,
    absent: Color,
    cell_text: Color,
}

const fn theme(dark: bool) -> Theme {
    if dark {
        Theme {
            fg: Color::White,
            accent: Color::Cyan,
            dim: Color::DarkGray,
            correct: Color::Green,
            present: Color::Yellow,
            absent: Color::DarkGray,
            cell_text: Color::Black,
        }
    } else {
        Theme {
            fg: Color::Black,
            accent: Color::Blue,
            dim: Color::Gray,
            correct: Color::LightGreen,
            present: Color::LightYellow,
            absent: Color::Gray,
            cell_text: Color::Black,
        }
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let theme = theme(app.settings.dark_theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, &theme, chunks[0]);

    match app.screen {
        Screen::MainMenu => render_main_menu(f, app, &theme, chunks[1]),
        Screen::ModeSelect => render_mode_select(f, app, &theme, chunks[1]),
        Screen::HowToPlay => render_how_to_play(f, &theme, chunks[1]),
        Screen::Settings => render_settings(f, app, &theme, chunks[1]),
        Screen::Game => render_game(f, app, &theme, chunks[1]),
    }

    render_status(f, app, &theme, chunks[2]);

    if let Some(dialog) = app.dialog {
        render_dialog(f, app, &theme, dialog);
    }
}

fn render_header(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let title = match app.screen {
        Screen::MainMenu => "WORDLE",
        Screen::ModeSelect => "WORDLE - New Game",
        Screen::HowToPlay => "WORDLE - How to Play",
        Screen::Settings => "WORDLE - Settings",
        Screen::Game => "WORDLE",
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.accent)),
        );
    f.render_widget(header, area);
}

fn render_main_menu(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut lines = vec![Line::from("")];

    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let style = if i == app.menu_cursor {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        let marker = if i == app.menu_cursor { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{marker}{item}"), style)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("High score: {}", app.high_score),
        Style::default().fg(theme.dim),
    )));

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_mode_select(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let (title, labels, cursor): (&str, Vec<&str>, usize) = match app.select_stage {
        SelectStage::Mode => (
            " Game mode ",
            GameMode::ALL.iter().map(|m| m.label()).collect(),
            app.mode_cursor,
        ),
        SelectStage::Difficulty => (
            " Difficulty ",
            Difficulty::ALL.iter().map(|d| d.label()).collect(),
            app.difficulty_cursor,
        ),
    };

    let mut lines = vec![Line::from("")];
    for (i, label) in labels.iter().enumerate() {
        let style = if i == cursor {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };
        let marker = if i == cursor { "▸ " } else { "  " };
        let detail = match app.select_stage {
            SelectStage::Mode => String::new(),
            SelectStage::Difficulty => {
                let d = Difficulty::ALL[i];
                format!("  ({} guesses, x{})", d.max_guesses(), d.score_multiplier())
            }
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{label}{detail}"),
            style,
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Enter: confirm | Esc: back",
        Style::default().fg(theme.dim),
    )));

    let list = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_how_to_play(f: &mut Frame, theme: &Theme, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from("Guess the hidden 5-letter word before the board fills up."),
        Line::from(""),
        Line::from("Classic   - colored feedback per letter, one round at a time."),
        Line::from("Infinite  - classic feedback, score carries from round to round."),
        Line::from("Number    - only two numbers per guess: exact matches on the"),
        Line::from("            left, misplaced letters on the right."),
        Line::from(""),
        Line::from("Green: right letter, right spot. Yellow: in the word, wrong"),
        Line::from("spot. Gray: not in the word."),
        Line::from(""),
        Line::from("Difficulty sets the number of guesses (6/5/4) and multiplies"),
        Line::from("the points for every unused row when you win."),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: back to menu",
            Style::default().fg(theme.dim),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.fg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_settings(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let rows = [
        format!(
            "Dark theme         {}",
            if app.settings.dark_theme { "on" } else { "off" }
        ),
        format!("Language           {}", app.settings.language),
        format!(
            "Daily reminder     {}",
            if app.settings.notifications_enabled {
                "on"
            } else {
                "off"
            }
        ),
        "Reset progress".to_string(),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i == app.settings_cursor {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            let marker = if i == app.settings_cursor { "▸ " } else { "  " };
            ListItem::new(format!("{marker}{row}")).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Settings | Enter: change | Esc: back ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_game(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let Some(round) = app.round.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode / difficulty / score line
            Constraint::Min(6),    // Board
            Constraint::Length(2), // Key help
        ])
        .split(area);

    render_game_header(f, app, round, theme, chunks[0]);
    render_board(f, round, theme, chunks[1]);

    let help = Paragraph::new("a-z: type | Backspace: delete | Enter: submit | Esc: menu")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim));
    f.render_widget(help, chunks[2]);
}

fn render_game_header(f: &mut Frame, app: &App, round: &RoundState, theme: &Theme, area: Rect) {
    let mut spans = vec![
        Span::styled(
            round.mode().label(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(round.difficulty().label(), Style::default().fg(theme.fg)),
    ];

    if round.mode().carries_score() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("Score: {}", round.score()),
            Style::default().fg(theme.present),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("High score: {}", app.high_score),
            Style::default().fg(theme.dim),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

/// The guess grid
///
/// Submitted rows in letter modes are colored straight from the row text;
/// the in-progress row and empty rows render as neutral cells. Number mode
/// shows the two counts beside neutral cells instead.
fn render_board(f: &mut Frame, round: &RoundState, theme: &Theme, area: Rect) {
    let current_row = round.current_row();
    let mut lines = vec![Line::from("")];

    for (i, slot) in round.slots().iter().enumerate() {
        let is_current = current_row == Some(i);

        let line = match slot {
            GuessSlot::Submitted { guess, feedback } => match feedback {
                Feedback::Letters(_) => letter_cells(round, guess.text(), false, theme),
                Feedback::Counts(counts) => {
                    let mut spans = vec![Span::styled(
                        format!("{} ", counts.exact),
                        Style::default()
                            .fg(theme.correct)
                            .add_modifier(Modifier::BOLD),
                    )];
                    spans.extend(neutral_cells(guess.text(), theme));
                    spans.push(Span::styled(
                        format!(" {}", counts.misplaced),
                        Style::default()
                            .fg(theme.present)
                            .add_modifier(Modifier::BOLD),
                    ));
                    Line::from(spans)
                }
            },
            GuessSlot::Empty if is_current => {
                if round.mode().uses_counts() {
                    Line::from(neutral_cells(round.current_guess(), theme))
                } else {
                    letter_cells(round, round.current_guess(), true, theme)
                }
            }
            GuessSlot::Empty => Line::from(neutral_cells("", theme)),
        };

        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

/// Cells colored by evaluating the row text against the secret
fn letter_cells(round: &RoundState, text: &str, is_current: bool, theme: &Theme) -> Line<'static> {
    let results = evaluate_row(round.secret(), text);
    let padded = pad_row(text);

    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (i, ch) in padded.chars().enumerate() {
        // The in-progress row stays neutral until it is submitted
        let bg = if is_current {
            theme.dim
        } else {
            match results[i] {
                LetterResult::Correct => theme.correct,
                LetterResult::Present => theme.present,
                LetterResult::Absent => theme.absent,
            }
        };

        spans.push(Span::styled(
            format!(" {} ", ch.to_ascii_uppercase()),
            Style::default().fg(theme.cell_text).bg(bg),
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Uncolored cells (Number mode rows, empty rows)
fn neutral_cells(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let padded = pad_row(text);
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

    for ch in padded.chars() {
        spans.push(Span::styled(
            format!(" {} ", ch.to_ascii_uppercase()),
            Style::default().fg(theme.cell_text).bg(theme.dim),
        ));
        spans.push(Span::raw(" "));
    }

    spans
}

fn pad_row(text: &str) -> String {
    let mut padded = text.to_string();
    while padded.len() < WORD_LENGTH {
        padded.push(' ');
    }
    padded
}

fn render_status(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let text = app.status.as_deref().unwrap_or(match app.screen {
        Screen::MainMenu => "Up/Down: move | Enter: select | q: quit",
        Screen::Game => "Guess the word!",
        _ => "",
    });

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_dialog(f: &mut Frame, app: &App, theme: &Theme, dialog: Dialog) {
    let area = centered_rect(50, 30, f.area());

    let (title, body, color) = match dialog {
        Dialog::Won => (
            " Congratulations! ",
            dialog_won_body(app),
            theme.correct,
        ),
        Dialog::Lost => (
            " Out of guesses ",
            dialog_lost_body(app),
            Color::Red,
        ),
        Dialog::ResetConfirm => (
            " Reset progress ",
            vec![
                Line::from(""),
                Line::from("Clear the saved high score?"),
                Line::from(""),
                Line::from("y: yes | n: cancel"),
            ],
            theme.present,
        ),
    };

    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.fg))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn dialog_won_body(app: &App) -> Vec<Line<'static>> {
    let mut body = vec![Line::from(""), Line::from("You found the word!")];

    if let Some(round) = app.round.as_ref()
        && round.mode().carries_score()
    {
        body.push(Line::from(format!(
            "Score: {}   High score: {}",
            round.score(),
            app.high_score
        )));
    }

    body.push(Line::from(""));
    body.push(Line::from("n: next word | m: main menu"));
    body
}

fn dialog_lost_body(app: &App) -> Vec<Line<'static>> {
    let secret = app
        .round
        .as_ref()
        .map(|r| r.secret().text().to_uppercase())
        .unwrap_or_default();

    vec![
        Line::from(""),
        Line::from(format!("The word was {secret}")),
        Line::from(""),
        Line::from("r: retry | m: main menu"),
    ]
}

/// Centered rectangle helper for dialogs
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
