//! Formatting utilities for terminal output

use crate::core::{CountFeedback, Feedback, LetterResult, Word};
use colored::Colorize;

/// Format per-letter results as an emoji string
#[must_use]
pub fn letters_to_emoji(results: &[LetterResult]) -> String {
    results
        .iter()
        .map(|r| match r {
            LetterResult::Correct => '🟩',
            LetterResult::Present => '🟨',
            LetterResult::Absent => '⬜',
        })
        .collect()
}

/// Format a guess with per-letter coloring
///
/// Green for correct positions, yellow for present letters, dim for absent.
#[must_use]
pub fn letter_row(guess: &Word, results: &[LetterResult]) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(results)
        .map(|(ch, result)| {
            let cell = format!(" {ch} ");
            let colored = match result {
                LetterResult::Correct => cell.black().on_green(),
                LetterResult::Present => cell.black().on_yellow(),
                LetterResult::Absent => cell.white().on_bright_black(),
            };
            colored.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a guess with its exact/misplaced counts (Number mode)
///
/// Exact count on the left in green, misplaced count on the right in yellow,
/// matching the in-game row layout.
#[must_use]
pub fn count_row(guess: &Word, counts: CountFeedback) -> String {
    format!(
        "{}  {}  {}",
        counts.exact.to_string().green().bold(),
        guess.text().to_uppercase(),
        counts.misplaced.to_string().yellow().bold()
    )
}

/// Format any feedback variant as one terminal row
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    match feedback {
        Feedback::Letters(results) => letter_row(guess, results),
        Feedback::Counts(counts) => count_row(guess, *counts),
    }
}
