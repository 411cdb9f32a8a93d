//! Wordle Game - CLI
//!
//! Terminal Wordle with a full-screen TUI and a plain CLI mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::{Difficulty, GameMode},
    interactive::{App, run_tui},
    store::JsonStore,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle game with classic, infinite and number modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: classic (default), infinite, number
    #[arg(short, long, global = true, default_value = "classic")]
    mode: String,

    /// Difficulty: normal (default, 6 guesses), hard (5), extreme (4)
    #[arg(short, long, global = true, default_value = "normal")]
    difficulty: String,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Save file for settings and the high score
    #[arg(long, global = true, default_value = "wordle_save.json")]
    data: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain terminal, no TUI)
    Simple,
}

/// Load the word list based on the -w flag
///
/// "embedded" uses the compiled-in list; anything else is a file path.
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "No valid words in {path}");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let store = JsonStore::new(&cli.data);

    let mode = GameMode::from_name(&cli.mode);
    let difficulty = Difficulty::from_name(&cli.difficulty);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut app = App::new(words, Box::new(store));
            // Preselect the menu cursors from the CLI flags
            app.mode_cursor = GameMode::ALL.iter().position(|&m| m == mode).unwrap_or(0);
            app.difficulty_cursor = Difficulty::ALL
                .iter()
                .position(|&d| d == difficulty)
                .unwrap_or(0);
            run_tui(app)
        }
        Commands::Simple => {
            let mut store = store;
            run_simple(&words, &mut store, mode, difficulty).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
