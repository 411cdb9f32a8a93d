//! Core domain types for the game
//!
//! Validated words and pure guess evaluation. Everything here is
//! side-effect-free and fully determined by its inputs.

mod evaluate;
mod word;

pub use evaluate::{
    CountFeedback, Feedback, LetterResult, count_exact_matches, count_misplaced, evaluate_letters,
    evaluate_row,
};
pub use word::{WORD_LENGTH, Word, WordError};
