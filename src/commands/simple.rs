//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI: type a full guess per line, get a
//! colored feedback row back.

use crate::core::{WORD_LENGTH, Word};
use crate::game::{
    Difficulty, GameMode, GuessSlot, KeyEvent, Outcome, RoundConfig, RoundEvent, RoundState,
};
use crate::output::feedback_row;
use crate::store::{SaveStore, record_score};
use crate::wordlists::random_word;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list is empty, user input cannot be read, or
/// the save store fails.
pub fn run_simple(
    words: &[Word],
    store: &mut dyn SaveStore,
    mode: GameMode,
    difficulty: Difficulty,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word. Feedback per guess:\n");
    if mode.uses_counts() {
        println!("  - Left number: letters in the correct position");
        println!("  - Right number: correct letters in the wrong position\n");
    } else {
        println!("  - Green: correct position");
        println!("  - Yellow: in the word, wrong position");
        println!("  - Gray: not in the word\n");
    }
    println!("Commands: 'quit' to exit, 'new' to restart with a fresh word\n");

    let mut high_score = store
        .high_score()
        .map_err(|e| e.to_string())?
        .unwrap_or(0);
    let mut carried_score = 0;

    'rounds: loop {
        let secret = random_word(words).ok_or("Word list is empty")?;
        let mut state = RoundState::new(
            RoundConfig::new(mode, difficulty, secret).with_initial_score(carried_score),
        );

        println!("────────────────────────────────────────────────────────────");
        println!(
            "New round: {} / {} ({} guesses)",
            mode,
            difficulty,
            difficulty.max_guesses()
        );
        if mode.carries_score() {
            println!("Score: {}   High score: {high_score}", state.score());
        }
        println!("────────────────────────────────────────────────────────────\n");

        while !state.outcome().is_terminal() {
            let used = state.current_row().unwrap_or(0);
            let prompt = format!("Guess {}/{}", used + 1, difficulty.max_guesses());
            let input = get_user_input(&prompt)?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    carried_score = 0;
                    println!("\n🔄 New round!\n");
                    continue 'rounds;
                }
                _ => {}
            }

            // Validate up front so typos get a message instead of a silent no-op
            let guess = match Word::new(&input) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            };

            for ch in guess.text().chars() {
                state = state.apply(KeyEvent::Letter(ch)).0;
            }
            let (next, event) = state.apply(KeyEvent::Submit);
            state = next;

            // Reprint the board so far
            println!();
            for slot in state.slots() {
                if let GuessSlot::Submitted { guess, feedback } = slot {
                    println!("  {}", feedback_row(guess, feedback));
                }
            }
            println!();

            if let Some(RoundEvent::ScoreUpdate { score }) = event {
                high_score = record_score(store, high_score, score).map_err(|e| e.to_string())?;
            }
        }

        match state.outcome() {
            Outcome::Won => {
                println!(
                    "{}",
                    "🎉 Correct! You found the word!".bright_green().bold()
                );
                if mode.carries_score() {
                    println!(
                        "Score: {}   High score: {high_score}",
                        state.score().to_string().bright_cyan().bold()
                    );
                }
            }
            Outcome::Lost => {
                println!(
                    "{} The word was {}",
                    "❌ Out of guesses.".bright_red().bold(),
                    state.secret().text().to_uppercase().bright_white().bold()
                );
            }
            Outcome::InProgress => unreachable!("loop exits only on terminal outcome"),
        }

        match get_user_input("\nPlay again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                carried_score = if mode.carries_score() && state.outcome() == Outcome::Won {
                    state.score()
                } else {
                    0
                };
                println!();
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
