//! Terminal output formatting

pub mod formatters;

pub use formatters::{count_row, feedback_row, letter_row, letters_to_emoji};
