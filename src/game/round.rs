//! Round state machine
//!
//! One round of the game: a fixed secret word, a fixed number of guess slots,
//! the in-progress guess and the outcome. Key events drive the machine; each
//! transition is a pure function from the current state to the next one, so a
//! `RoundState` value is never mutated in place.
//!
//! Events that cannot apply in the current state (letters past the word
//! length, submit on a short guess, anything after the round ended) are
//! silently ignored - the on-screen keyboard is the only event producer and
//! there is no error channel.

use crate::core::{Feedback, WORD_LENGTH, Word};

use super::{Difficulty, GameMode, RoundConfig};

/// One discrete keyboard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A letter key
    Letter(char),
    /// Remove the last letter of the in-progress guess
    Delete,
    /// Submit the in-progress guess
    Submit,
}

/// One of the round's fixed guess positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessSlot {
    /// Not yet used
    Empty,
    /// A submitted guess and its computed feedback
    Submitted { guess: Word, feedback: Feedback },
}

impl GuessSlot {
    /// Whether this slot is still unused
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Terminal status of the round
///
/// Monotonic: `InProgress` moves to `Won` or `Lost` exactly once and never
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still accepting guesses
    InProgress,
    /// The secret word was guessed
    Won,
    /// All guess slots were used without a match
    Lost,
}

impl Outcome {
    /// Whether the round has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Notification emitted on a terminal transition
///
/// Carries the cumulative score for the host to persist (the host owns the
/// write-if-greater high-score policy, not the machine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    ScoreUpdate { score: u32 },
}

/// The full state of one round
///
/// Created fresh per round and replaced on every transition. The score field
/// starts from `RoundConfig::initial_score` so Infinite mode can carry it
/// across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    config: RoundConfig,
    slots: Vec<GuessSlot>,
    current: String,
    score: u32,
    outcome: Outcome,
}

impl RoundState {
    /// Start a round: all slots empty, no in-progress guess
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        let slots = vec![GuessSlot::Empty; config.difficulty.max_guesses()];
        let score = config.initial_score;

        Self {
            config,
            slots,
            current: String::new(),
            score,
            outcome: Outcome::InProgress,
        }
    }

    /// Apply one key event, returning the next state
    ///
    /// Pure transition: `self` is unchanged. The second element is the
    /// terminal notification, present only when this event ended the round.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Difficulty, GameMode, KeyEvent, Outcome, RoundConfig, RoundState};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let mut state = RoundState::new(RoundConfig::new(
    ///     GameMode::Classic,
    ///     Difficulty::Normal,
    ///     secret,
    /// ));
    ///
    /// for ch in "crane".chars() {
    ///     state = state.apply(KeyEvent::Letter(ch)).0;
    /// }
    /// let (state, event) = state.apply(KeyEvent::Submit);
    ///
    /// assert_eq!(state.outcome(), Outcome::Won);
    /// assert!(event.is_some());
    /// ```
    #[must_use]
    pub fn apply(&self, event: KeyEvent) -> (Self, Option<RoundEvent>) {
        if self.outcome.is_terminal() {
            return (self.clone(), None);
        }

        match event {
            KeyEvent::Letter(ch) => (self.push_letter(ch), None),
            KeyEvent::Delete => (self.pop_letter(), None),
            KeyEvent::Submit => self.submit(),
        }
    }

    fn push_letter(&self, ch: char) -> Self {
        let mut next = self.clone();
        if ch.is_ascii_alphabetic() && next.current.len() < WORD_LENGTH {
            next.current.push(ch.to_ascii_lowercase());
        }
        next
    }

    fn pop_letter(&self) -> Self {
        let mut next = self.clone();
        next.current.pop();
        next
    }

    fn submit(&self) -> (Self, Option<RoundEvent>) {
        if self.current.len() != WORD_LENGTH {
            return (self.clone(), None);
        }

        // Letters are gated to ASCII alphabetic on entry, so this only fails
        // on a caller contract violation
        let Ok(guess) = Word::new(&self.current) else {
            return (self.clone(), None);
        };

        let Some(index) = self.slots.iter().position(GuessSlot::is_empty) else {
            return (self.clone(), None);
        };

        let mut next = self.clone();
        let secret = &next.config.secret;

        let feedback = if next.config.mode.uses_counts() {
            Feedback::counts(secret, &guess)
        } else {
            Feedback::letters(secret, &guess)
        };

        let won = guess == *secret;
        next.slots[index] = GuessSlot::Submitted { guess, feedback };
        next.current.clear();

        let empty_after = next.slots.iter().filter(|s| s.is_empty()).count();

        let event = if won {
            let unused = u32::try_from(empty_after).unwrap_or(0);
            next.score += 1 + unused * next.config.difficulty.score_multiplier();
            next.outcome = Outcome::Won;
            Some(RoundEvent::ScoreUpdate { score: next.score })
        } else if empty_after == 0 {
            next.outcome = Outcome::Lost;
            Some(RoundEvent::ScoreUpdate { score: next.score })
        } else {
            None
        };

        (next, event)
    }

    /// The round configuration
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The secret word
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.config.secret
    }

    /// The active game mode
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// The round difficulty
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// All guess slots, in order
    #[must_use]
    pub fn slots(&self) -> &[GuessSlot] {
        &self.slots
    }

    /// The in-progress guess text
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    /// Index of the slot the in-progress guess will fill, if the round is
    /// still open
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        if self.outcome.is_terminal() {
            None
        } else {
            self.slots.iter().position(GuessSlot::is_empty)
        }
    }

    /// Cumulative score (meaningful for high scores in Infinite mode)
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Terminal status
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CountFeedback, LetterResult};

    fn round(mode: GameMode, difficulty: Difficulty, secret: &str) -> RoundState {
        let secret = Word::new(secret).unwrap();
        RoundState::new(RoundConfig::new(mode, difficulty, secret))
    }

    fn type_word(state: RoundState, text: &str) -> RoundState {
        text.chars()
            .fold(state, |s, ch| s.apply(KeyEvent::Letter(ch)).0)
    }

    fn submit_word(state: RoundState, text: &str) -> (RoundState, Option<RoundEvent>) {
        type_word(state, text).apply(KeyEvent::Submit)
    }

    #[test]
    fn new_round_is_empty_and_open() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        assert_eq!(state.slots().len(), 6);
        assert!(state.slots().iter().all(GuessSlot::is_empty));
        assert_eq!(state.current_guess(), "");
        assert_eq!(state.current_row(), Some(0));
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn letters_accumulate_up_to_word_length() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let state = type_word(state, "slates");
        // Sixth letter ignored
        assert_eq!(state.current_guess(), "slate");
    }

    #[test]
    fn letters_are_lowercased() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let state = type_word(state, "SLate");
        assert_eq!(state.current_guess(), "slate");
    }

    #[test]
    fn non_alphabetic_letters_are_ignored() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let state = type_word(state, "s1a!e");
        assert_eq!(state.current_guess(), "sae");
    }

    #[test]
    fn delete_removes_last_letter() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let state = type_word(state, "sla");
        let (state, event) = state.apply(KeyEvent::Delete);
        assert_eq!(state.current_guess(), "sl");
        assert!(event.is_none());
    }

    #[test]
    fn delete_on_empty_guess_is_noop() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let (next, event) = state.apply(KeyEvent::Delete);
        assert_eq!(next, state);
        assert!(event.is_none());
    }

    #[test]
    fn submit_with_short_guess_is_noop() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let state = type_word(state, "sla");
        let (next, event) = state.apply(KeyEvent::Submit);
        assert_eq!(next, state);
        assert!(event.is_none());
        assert!(next.slots().iter().all(GuessSlot::is_empty));
    }

    #[test]
    fn submit_records_guess_with_letter_feedback() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let (state, event) = submit_word(state, "crate");

        assert!(event.is_none());
        assert_eq!(state.current_guess(), "");
        assert_eq!(state.current_row(), Some(1));

        let GuessSlot::Submitted { guess, feedback } = &state.slots()[0] else {
            panic!("first slot should be submitted");
        };
        assert_eq!(guess.text(), "crate");
        let Feedback::Letters(results) = feedback else {
            panic!("classic mode uses letter feedback");
        };
        assert_eq!(results[0], LetterResult::Correct);
        assert_eq!(results[3], LetterResult::Absent);
    }

    #[test]
    fn submit_records_count_feedback_in_number_mode() {
        let state = round(GameMode::Number, Difficulty::Normal, "apple");
        let (state, _) = submit_word(state, "paper");

        let GuessSlot::Submitted { feedback, .. } = &state.slots()[0] else {
            panic!("first slot should be submitted");
        };
        assert_eq!(
            *feedback,
            Feedback::Counts(CountFeedback {
                exact: 1,
                misplaced: 3
            })
        );
    }

    #[test]
    fn winning_guess_ends_round_and_scores() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let (state, event) = submit_word(state, "crane");

        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.current_row(), None);
        // 1 + 5 unused slots x1
        assert_eq!(state.score(), 6);
        assert_eq!(event, Some(RoundEvent::ScoreUpdate { score: 6 }));
    }

    #[test]
    fn win_score_delta_scales_with_difficulty() {
        // Hard: 5 slots. Two wrong guesses leave 2 empty after the winning
        // third submission: delta = 1 + 2x2 = 5.
        let state = round(GameMode::Infinite, Difficulty::Hard, "crane");
        let (state, _) = submit_word(state, "slate");
        let (state, _) = submit_word(state, "bread");
        let (state, event) = submit_word(state, "crane");

        assert_eq!(state.outcome(), Outcome::Won);
        assert_eq!(state.score(), 5);
        assert_eq!(event, Some(RoundEvent::ScoreUpdate { score: 5 }));
    }

    #[test]
    fn win_score_adds_to_carried_initial_score() {
        let secret = Word::new("crane").unwrap();
        let config = RoundConfig::new(GameMode::Infinite, Difficulty::Normal, secret)
            .with_initial_score(10);
        let state = RoundState::new(config);
        let (state, event) = submit_word(state, "crane");

        // 10 carried + 1 + 5 unused x1
        assert_eq!(state.score(), 16);
        assert_eq!(event, Some(RoundEvent::ScoreUpdate { score: 16 }));
    }

    #[test]
    fn six_wrong_guesses_lose_at_normal_difficulty() {
        let wrong = ["slate", "bread", "fluid", "ghost", "pound", "wrist"];
        let mut state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let mut last_event = None;

        for (i, guess) in wrong.iter().enumerate() {
            let (next, event) = submit_word(state, guess);
            state = next;
            last_event = event;
            if i < wrong.len() - 1 {
                assert_eq!(state.outcome(), Outcome::InProgress, "guess {i}");
            }
        }

        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.score(), 0);
        assert_eq!(last_event, Some(RoundEvent::ScoreUpdate { score: 0 }));
    }

    #[test]
    fn loss_keeps_carried_score() {
        let secret = Word::new("crane").unwrap();
        let config =
            RoundConfig::new(GameMode::Infinite, Difficulty::Extreme, secret).with_initial_score(7);
        let mut state = RoundState::new(config);

        for guess in ["slate", "bread", "fluid", "ghost"] {
            state = submit_word(state, guess).0;
        }

        assert_eq!(state.outcome(), Outcome::Lost);
        // No increment on loss
        assert_eq!(state.score(), 7);
    }

    #[test]
    fn exhausting_all_slots_always_terminates() {
        for difficulty in Difficulty::ALL {
            let mut state = round(GameMode::Classic, difficulty, "crane");
            let wrong = ["slate", "bread", "fluid", "ghost", "pound", "wrist"];

            for guess in wrong.iter().take(difficulty.max_guesses()) {
                state = submit_word(state, guess).0;
            }

            assert_eq!(state.outcome(), Outcome::Lost, "{difficulty:?}");
            assert!(state.slots().iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn events_after_win_are_noops() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let (state, _) = submit_word(state, "crane");
        assert_eq!(state.outcome(), Outcome::Won);

        for event in [KeyEvent::Letter('a'), KeyEvent::Delete, KeyEvent::Submit] {
            let (next, emitted) = state.apply(event);
            assert_eq!(next, state);
            assert!(emitted.is_none());
        }
    }

    #[test]
    fn events_after_loss_are_noops() {
        let mut state = round(GameMode::Classic, Difficulty::Extreme, "crane");
        for guess in ["slate", "bread", "fluid", "ghost"] {
            state = submit_word(state, guess).0;
        }
        assert_eq!(state.outcome(), Outcome::Lost);

        let (next, emitted) = state.apply(KeyEvent::Letter('a'));
        assert_eq!(next, state);
        assert!(emitted.is_none());
    }

    #[test]
    fn win_is_case_insensitive() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let (state, _) = submit_word(state, "CRANE");
        assert_eq!(state.outcome(), Outcome::Won);
    }

    #[test]
    fn apply_does_not_mutate_the_previous_state() {
        let state = round(GameMode::Classic, Difficulty::Normal, "crane");
        let before = state.clone();
        let _ = submit_word(state.clone(), "crane");
        assert_eq!(state, before);
    }

    #[test]
    fn score_never_decreases_across_a_round() {
        let mut state = round(GameMode::Infinite, Difficulty::Normal, "crane");
        let mut last_score = state.score();

        for guess in ["slate", "bread", "crane"] {
            state = submit_word(state, guess).0;
            assert!(state.score() >= last_score);
            last_score = state.score();
        }
    }
}
