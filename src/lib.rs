//! Wordle Game
//!
//! A terminal Wordle game with three modes (Classic, Infinite, Number), three
//! difficulties, and persistent settings and high score.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Difficulty, GameMode, KeyEvent, Outcome, RoundConfig, RoundState};
//!
//! // Start a round
//! let secret = Word::new("crane").unwrap();
//! let config = RoundConfig::new(GameMode::Classic, Difficulty::Normal, secret);
//! let mut state = RoundState::new(config);
//!
//! // Type and submit a guess
//! for ch in "crane".chars() {
//!     state = state.apply(KeyEvent::Letter(ch)).0;
//! }
//! let (state, _event) = state.apply(KeyEvent::Submit);
//! assert_eq!(state.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Settings and high-score persistence
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
