//! Word lists
//!
//! Provides the embedded word list compiled into the binary, file loading for
//! custom lists, and the random draw used to pick a round's secret word.

mod embedded;
pub mod loader;

use crate::core::Word;
use rand::prelude::IndexedRandom;

pub use embedded::{WORDS, WORDS_COUNT};

/// Draw a uniformly random secret word from a list
///
/// Returns `None` only for an empty list.
#[must_use]
pub fn random_word(words: &[Word]) -> Option<Word> {
    words.choose(&mut rand::rng()).cloned()
}
