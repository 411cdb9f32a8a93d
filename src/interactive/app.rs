//! TUI application state and logic

use crate::core::Word;
use crate::game::{
    Difficulty, GameMode, KeyEvent, Outcome, RoundConfig, RoundEvent, RoundState,
};
use crate::store::{SaveStore, Settings, record_score};
use crate::wordlists::random_word;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    ModeSelect,
    HowToPlay,
    Settings,
    Game,
}

/// Modal dialog over the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Round won: offer the next word or the main menu
    Won,
    /// Round lost: offer a retry or the main menu
    Lost,
    /// Confirm clearing the saved high score
    ResetConfirm,
}

/// Mode selection happens in two steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectStage {
    Mode,
    Difficulty,
}

/// Main menu entries, in display order
pub const MENU_ITEMS: [&str; 4] = ["Play", "How to play", "Settings", "Quit"];

/// Number of rows on the settings screen
pub const SETTINGS_ROWS: usize = 4;

/// Application state
pub struct App {
    pub words: Vec<Word>,
    pub store: Box<dyn SaveStore>,
    pub settings: Settings,
    pub high_score: u32,
    pub screen: Screen,
    pub dialog: Option<Dialog>,
    pub menu_cursor: usize,
    pub settings_cursor: usize,
    pub select_stage: SelectStage,
    pub mode_cursor: usize,
    pub difficulty_cursor: usize,
    pub round: Option<RoundState>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create the app, loading the saved settings and high score
    #[must_use]
    pub fn new(words: Vec<Word>, store: Box<dyn SaveStore>) -> Self {
        let mut status = None;

        let settings = match store.settings() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                status = Some(format!("Could not read settings: {e}"));
                Settings::default()
            }
        };
        let high_score = match store.high_score() {
            Ok(saved) => saved.unwrap_or(0),
            Err(e) => {
                status = Some(format!("Could not read high score: {e}"));
                0
            }
        };

        Self {
            words,
            store,
            settings,
            high_score,
            screen: Screen::MainMenu,
            dialog: None,
            menu_cursor: 0,
            settings_cursor: 0,
            select_stage: SelectStage::Mode,
            mode_cursor: 0,
            difficulty_cursor: 0,
            round: None,
            status,
            should_quit: false,
        }
    }

    /// The game mode currently highlighted in mode selection
    #[must_use]
    pub fn selected_mode(&self) -> GameMode {
        GameMode::ALL[self.mode_cursor % GameMode::ALL.len()]
    }

    /// The difficulty currently highlighted in mode selection
    #[must_use]
    pub fn selected_difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.difficulty_cursor % Difficulty::ALL.len()]
    }

    /// Start a fresh round with the selected mode/difficulty
    ///
    /// `carried_score` is the Infinite-mode hand-off; everyone else passes 0.
    pub fn start_round(&mut self, carried_score: u32) {
        match random_word(&self.words) {
            Some(secret) => {
                let config =
                    RoundConfig::new(self.selected_mode(), self.selected_difficulty(), secret)
                        .with_initial_score(carried_score);
                self.round = Some(RoundState::new(config));
                self.dialog = None;
                self.screen = Screen::Game;
            }
            None => {
                self.status = Some("Word list is empty".to_string());
                self.screen = Screen::MainMenu;
            }
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if let Some(dialog) = self.dialog {
            self.handle_dialog_key(dialog, code);
            return;
        }

        match self.screen {
            Screen::MainMenu => self.handle_menu_key(code),
            Screen::ModeSelect => self.handle_select_key(code),
            Screen::HowToPlay => self.handle_how_to_play_key(code),
            Screen::Settings => self.handle_settings_key(code),
            Screen::Game => self.handle_game_key(code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1);
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1) % MENU_ITEMS.len();
            }
            KeyCode::Enter => match self.menu_cursor {
                0 => {
                    self.select_stage = SelectStage::Mode;
                    self.screen = Screen::ModeSelect;
                }
                1 => self.screen = Screen::HowToPlay,
                2 => {
                    self.settings_cursor = 0;
                    self.screen = Screen::Settings;
                }
                _ => self.should_quit = true,
            },
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_select_key(&mut self, code: KeyCode) {
        let (cursor, len) = match self.select_stage {
            SelectStage::Mode => (&mut self.mode_cursor, GameMode::ALL.len()),
            SelectStage::Difficulty => (&mut self.difficulty_cursor, Difficulty::ALL.len()),
        };

        match code {
            KeyCode::Up => *cursor = cursor.checked_sub(1).unwrap_or(len - 1),
            KeyCode::Down => *cursor = (*cursor + 1) % len,
            KeyCode::Enter => match self.select_stage {
                SelectStage::Mode => self.select_stage = SelectStage::Difficulty,
                SelectStage::Difficulty => self.start_round(0),
            },
            KeyCode::Esc => match self.select_stage {
                SelectStage::Mode => self.screen = Screen::MainMenu,
                SelectStage::Difficulty => self.select_stage = SelectStage::Mode,
            },
            _ => {}
        }
    }

    fn handle_how_to_play_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.screen = Screen::MainMenu;
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.settings_cursor = self
                    .settings_cursor
                    .checked_sub(1)
                    .unwrap_or(SETTINGS_ROWS - 1);
            }
            KeyCode::Down => self.settings_cursor = (self.settings_cursor + 1) % SETTINGS_ROWS,
            KeyCode::Enter | KeyCode::Char(' ') => match self.settings_cursor {
                0 => {
                    self.settings.dark_theme = !self.settings.dark_theme;
                    self.persist_settings();
                }
                1 => {
                    self.settings.language = self.settings.next_language().to_string();
                    self.persist_settings();
                }
                2 => {
                    self.settings.notifications_enabled = !self.settings.notifications_enabled;
                    self.persist_settings();
                }
                _ => self.dialog = Some(Dialog::ResetConfirm),
            },
            KeyCode::Esc => self.screen = Screen::MainMenu,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        let event = match code {
            KeyCode::Esc => {
                // Abandon the round
                self.round = None;
                self.screen = Screen::MainMenu;
                return;
            }
            KeyCode::Char(ch) if ch.is_ascii_alphabetic() => Some(KeyEvent::Letter(ch)),
            KeyCode::Backspace => Some(KeyEvent::Delete),
            KeyCode::Enter => Some(KeyEvent::Submit),
            _ => None,
        };

        let (Some(event), Some(round)) = (event, self.round.as_ref()) else {
            return;
        };

        let (next, emitted) = round.apply(event);
        let outcome = next.outcome();
        self.round = Some(next);

        if let Some(RoundEvent::ScoreUpdate { score }) = emitted {
            self.record_round_score(score);
        }

        match outcome {
            Outcome::Won => self.dialog = Some(Dialog::Won),
            Outcome::Lost => self.dialog = Some(Dialog::Lost),
            Outcome::InProgress => {}
        }
    }

    fn handle_dialog_key(&mut self, dialog: Dialog, code: KeyCode) {
        match dialog {
            Dialog::Won => match code {
                KeyCode::Char('n') | KeyCode::Enter => {
                    let carried = self.carried_score();
                    self.start_round(carried);
                }
                KeyCode::Char('m') | KeyCode::Esc => self.back_to_menu(),
                _ => {}
            },
            Dialog::Lost => match code {
                KeyCode::Char('r') | KeyCode::Enter => self.start_round(0),
                KeyCode::Char('m') | KeyCode::Esc => self.back_to_menu(),
                _ => {}
            },
            Dialog::ResetConfirm => match code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.high_score = 0;
                    if let Err(e) = self.store.insert_high_score(0) {
                        self.status = Some(format!("Could not reset progress: {e}"));
                    }
                    self.dialog = None;
                }
                KeyCode::Char('n') | KeyCode::Esc => self.dialog = None,
                _ => {}
            },
        }
    }

    /// Score handed to the next round when continuing after a win
    fn carried_score(&self) -> u32 {
        self.round
            .as_ref()
            .filter(|r| r.mode().carries_score())
            .map_or(0, RoundState::score)
    }

    fn back_to_menu(&mut self) {
        self.round = None;
        self.dialog = None;
        self.screen = Screen::MainMenu;
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.store.insert_settings(&self.settings) {
            self.status = Some(format!("Could not save settings: {e}"));
        }
    }

    fn record_round_score(&mut self, score: u32) {
        match record_score(self.store.as_mut(), self.high_score, score) {
            Ok(high) => self.high_score = high,
            Err(e) => self.status = Some(format!("Could not save high score: {e}")),
        }
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

    match res {
        Ok(notifications_enabled) => {
            if notifications_enabled {
                println!("Daily reminder is on - come back tomorrow for a new word!");
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<bool> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (avoids double input on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.settings.notifications_enabled)
}
