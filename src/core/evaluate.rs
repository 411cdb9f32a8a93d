//! Guess evaluation
//!
//! Pure comparison of a guess against the secret word. Classic and Infinite
//! mode get per-letter results; Number mode gets two aggregate counts.
//!
//! The per-letter `Present` classification deliberately does not budget
//! duplicate letters: a guess with a repeated letter can show more `Present`
//! marks than the secret contains that letter. The misplaced count DOES keep a
//! per-letter budget seeded from the secret's letter frequency.

use super::{WORD_LENGTH, Word};

/// Padding byte for rendering rows shorter than `WORD_LENGTH`
///
/// Never matches a secret letter, so padded cells always come out `Absent`.
const BLANK: u8 = b' ';

/// Per-position result of evaluating one guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterResult {
    /// Letter matches the secret at this position
    Correct,
    /// Letter occurs in the secret, but not at this position
    Present,
    /// Letter does not occur in the secret
    Absent,
}

/// Aggregate feedback for Number mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountFeedback {
    /// Positions where guess and secret agree exactly
    pub exact: usize,
    /// Additional letters present in the secret but misplaced,
    /// each secret occurrence credited at most once
    pub misplaced: usize,
}

/// Feedback attached to a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Per-letter results (Classic and Infinite modes)
    Letters([LetterResult; WORD_LENGTH]),
    /// Exact/misplaced counts (Number mode)
    Counts(CountFeedback),
}

impl Feedback {
    /// Compute per-letter feedback for a submitted guess
    #[must_use]
    pub fn letters(secret: &Word, guess: &Word) -> Self {
        Self::Letters(evaluate_letters(secret, guess))
    }

    /// Compute count feedback for a submitted guess
    #[must_use]
    pub fn counts(secret: &Word, guess: &Word) -> Self {
        Self::Counts(CountFeedback {
            exact: count_exact_matches(secret, guess),
            misplaced: count_misplaced(secret, guess),
        })
    }
}

/// Evaluate each guess position against the secret
///
/// For each index: equal letters are `Correct`; otherwise a letter occurring
/// anywhere in the secret is `Present`; otherwise `Absent`. No duplicate
/// accounting - see the module docs.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterResult, Word, evaluate_letters};
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("crate").unwrap();
/// let results = evaluate_letters(&secret, &guess);
///
/// assert_eq!(results[0], LetterResult::Correct); // c
/// assert_eq!(results[3], LetterResult::Absent); // t
/// assert_eq!(results[4], LetterResult::Correct); // e
/// ```
#[must_use]
pub fn evaluate_letters(secret: &Word, guess: &Word) -> [LetterResult; WORD_LENGTH] {
    let mut results = [LetterResult::Absent; WORD_LENGTH];

    for (i, result) in results.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        *result = if letter == secret.letter_at(i) {
            LetterResult::Correct
        } else if secret.contains(letter) {
            LetterResult::Present
        } else {
            LetterResult::Absent
        };
    }

    results
}

/// Evaluate an arbitrary (possibly partial or empty) row for rendering
///
/// Pads the input to `WORD_LENGTH` with a blank sentinel that never matches,
/// so an empty string yields an all-`Absent` placeholder row. Rendering only:
/// a partial row is not a submitted guess and never feeds the counting
/// functions.
#[must_use]
pub fn evaluate_row(secret: &Word, text: &str) -> [LetterResult; WORD_LENGTH] {
    let lower = text.to_lowercase();
    let bytes = lower.as_bytes();
    let mut results = [LetterResult::Absent; WORD_LENGTH];

    for (i, result) in results.iter_mut().enumerate() {
        let letter = bytes.get(i).copied().unwrap_or(BLANK);
        *result = if letter == secret.letter_at(i) {
            LetterResult::Correct
        } else if secret.contains(letter) {
            LetterResult::Present
        } else {
            LetterResult::Absent
        };
    }

    results
}

/// Count positions where the guess matches the secret exactly
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, count_exact_matches};
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("paper").unwrap();
/// assert_eq!(count_exact_matches(&secret, &guess), 1); // the middle 'p'
/// ```
#[must_use]
pub fn count_exact_matches(secret: &Word, guess: &Word) -> usize {
    secret
        .letters()
        .iter()
        .zip(guess.letters())
        .filter(|(s, g)| s == g)
        .count()
}

/// Count misplaced letters: present in the secret but at a different position
///
/// A per-letter budget seeded from the secret's letter frequency caps the
/// credit at one per physical occurrence. Exact-match positions are skipped
/// but do not reduce the budget. Independent per call - no state is carried
/// between evaluations.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, count_misplaced};
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("paper").unwrap();
/// assert_eq!(count_misplaced(&secret, &guess), 3); // p, a, e
/// ```
#[must_use]
pub fn count_misplaced(secret: &Word, guess: &Word) -> usize {
    let mut budget = secret.letter_counts();
    let mut misplaced = 0;

    for (i, &letter) in guess.letters().iter().enumerate() {
        if secret.contains(letter)
            && letter != secret.letter_at(i)
            && let Some(remaining) = budget.get_mut(&letter)
            && *remaining > 0
        {
            misplaced += 1;
            *remaining -= 1;
        }
    }

    misplaced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluate_letters_scenario_crane_crate() {
        // CRANE vs CRATE: C(correct) R(correct) A(correct) T(absent) E(correct)
        let results = evaluate_letters(&word("crane"), &word("crate"));
        assert_eq!(
            results,
            [
                LetterResult::Correct,
                LetterResult::Correct,
                LetterResult::Correct,
                LetterResult::Absent,
                LetterResult::Correct,
            ]
        );
    }

    #[test]
    fn evaluate_letters_all_absent() {
        let results = evaluate_letters(&word("fluid"), &word("wrong"));
        assert!(results.iter().all(|&r| r == LetterResult::Absent));
    }

    #[test]
    fn evaluate_letters_perfect_match() {
        let results = evaluate_letters(&word("crane"), &word("crane"));
        assert!(results.iter().all(|&r| r == LetterResult::Correct));
    }

    #[test]
    fn evaluate_letters_present_positions() {
        // LEAST vs STELA: every letter occurs, none in place
        let results = evaluate_letters(&word("least"), &word("stela"));
        assert!(results.iter().all(|&r| r == LetterResult::Present));
    }

    #[test]
    fn evaluate_letters_does_not_budget_duplicates() {
        // CRANE has one 'e'; EAGLE guesses two. The first 'e' still shows
        // Present even though the only 'e' in the secret also matches exactly
        // at position 4. Observed behavior, kept until product intent changes.
        let results = evaluate_letters(&word("crane"), &word("eagle"));
        assert_eq!(results[0], LetterResult::Present); // e
        assert_eq!(results[1], LetterResult::Present); // a
        assert_eq!(results[4], LetterResult::Correct); // e
    }

    #[test]
    fn evaluate_letters_idempotent() {
        let secret = word("speed");
        let guess = word("erase");
        assert_eq!(
            evaluate_letters(&secret, &guess),
            evaluate_letters(&secret, &guess)
        );
    }

    #[test]
    fn evaluate_row_empty_is_all_absent() {
        let results = evaluate_row(&word("crane"), "");
        assert!(results.iter().all(|&r| r == LetterResult::Absent));
    }

    #[test]
    fn evaluate_row_partial_pads_with_blanks() {
        let results = evaluate_row(&word("crane"), "cr");
        assert_eq!(results[0], LetterResult::Correct);
        assert_eq!(results[1], LetterResult::Correct);
        assert_eq!(results[2], LetterResult::Absent);
        assert_eq!(results[3], LetterResult::Absent);
        assert_eq!(results[4], LetterResult::Absent);
    }

    #[test]
    fn evaluate_row_matches_full_guess_evaluation() {
        let secret = word("crane");
        let guess = word("crate");
        assert_eq!(
            evaluate_row(&secret, guess.text()),
            evaluate_letters(&secret, &guess)
        );
    }

    #[test]
    fn exact_matches_scenario_crane_crate() {
        assert_eq!(count_exact_matches(&word("crane"), &word("crate")), 4);
    }

    #[test]
    fn exact_matches_scenario_apple_paper() {
        // APPLE vs PAPER: only position 2 ('p') matches
        assert_eq!(count_exact_matches(&word("apple"), &word("paper")), 1);
    }

    #[test]
    fn exact_matches_agrees_with_letter_results() {
        let pairs = [
            ("crane", "crate"),
            ("apple", "paper"),
            ("speed", "erase"),
            ("crane", "crane"),
            ("fluid", "wrong"),
        ];

        for (s, g) in pairs {
            let secret = word(s);
            let guess = word(g);
            let correct = evaluate_letters(&secret, &guess)
                .iter()
                .filter(|&&r| r == LetterResult::Correct)
                .count();
            assert_eq!(
                count_exact_matches(&secret, &guess),
                correct,
                "mismatch for {s}/{g}"
            );
        }
    }

    #[test]
    fn misplaced_scenario_apple_paper() {
        // P(misplaced) A(misplaced) P(exact, skipped) E(misplaced) R(absent)
        assert_eq!(count_misplaced(&word("apple"), &word("paper")), 3);
    }

    #[test]
    fn misplaced_budget_caps_repeated_guess_letters() {
        // Secret has one 'a'; two misplaced 'a's in the guess credit once.
        assert_eq!(count_misplaced(&word("crane"), &word("salsa")), 1);
    }

    #[test]
    fn misplaced_skips_exact_matches_without_spending_budget() {
        // CRANE vs ABACK: the 'a' at position 2 matches exactly and is
        // skipped; the 'a' at position 0 and the 'c' at position 3 credit.
        assert_eq!(count_misplaced(&word("crane"), &word("aback")), 2);
    }

    #[test]
    fn misplaced_bounded_by_secret_letter_frequency() {
        let pairs = [
            ("apple", "paper"),
            ("speed", "esses"),
            ("crane", "aback"),
            ("eagle", "geese"),
        ];

        for (s, g) in pairs {
            let secret = word(s);
            let guess = word(g);
            let misplaced = count_misplaced(&secret, &guess);
            let secret_total: usize = secret.letter_counts().values().map(|&c| usize::from(c)).sum();
            assert!(
                misplaced <= secret_total,
                "misplaced {misplaced} exceeds letters in {s}"
            );
        }
    }

    #[test]
    fn misplaced_zero_on_perfect_match() {
        assert_eq!(count_misplaced(&word("crane"), &word("crane")), 0);
    }

    #[test]
    fn misplaced_zero_on_disjoint_words() {
        assert_eq!(count_misplaced(&word("fluid"), &word("wrong")), 0);
    }

    #[test]
    fn counts_are_idempotent() {
        let secret = word("apple");
        let guess = word("paper");
        assert_eq!(
            count_exact_matches(&secret, &guess),
            count_exact_matches(&secret, &guess)
        );
        assert_eq!(
            count_misplaced(&secret, &guess),
            count_misplaced(&secret, &guess)
        );
    }

    #[test]
    fn feedback_constructors_match_free_functions() {
        let secret = word("apple");
        let guess = word("paper");

        assert_eq!(
            Feedback::letters(&secret, &guess),
            Feedback::Letters(evaluate_letters(&secret, &guess))
        );
        assert_eq!(
            Feedback::counts(&secret, &guess),
            Feedback::Counts(CountFeedback {
                exact: 1,
                misplaced: 3
            })
        );
    }
}
