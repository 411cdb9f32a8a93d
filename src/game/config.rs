//! Round configuration: game modes and difficulties

use crate::core::Word;
use std::fmt;

/// How feedback is presented and whether score carries between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Per-letter feedback, one round at a time
    #[default]
    Classic,
    /// Per-letter feedback, score carries across rounds
    Infinite,
    /// Aggregate exact/misplaced counts instead of per-letter feedback
    Number,
}

impl GameMode {
    /// All modes, in menu order
    pub const ALL: [Self; 3] = [Self::Classic, Self::Infinite, Self::Number];

    /// Create a mode from a name string
    ///
    /// Supported names: "classic", "infinite", "number".
    /// Defaults to classic if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "infinite" => Self::Infinite,
            "number" => Self::Number,
            _ => Self::Classic,
        }
    }

    /// Whether the cumulative score carries into the next round
    #[must_use]
    pub const fn carries_score(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Whether feedback is aggregate counts rather than per-letter
    #[must_use]
    pub const fn uses_counts(self) -> bool {
        matches!(self, Self::Number)
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Infinite => "Infinite",
            Self::Number => "Number",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Difficulty fixes the guess budget and the scoring weight for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All difficulties, in menu order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Hard, Self::Extreme];

    /// Create a difficulty from a name string
    ///
    /// Supported names: "normal", "hard", "extreme".
    /// Defaults to normal if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "hard" => Self::Hard,
            "extreme" => Self::Extreme,
            _ => Self::Normal,
        }
    }

    /// Number of guess slots in a round
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        match self {
            Self::Normal => 6,
            Self::Hard => 5,
            Self::Extreme => 4,
        }
    }

    /// Scoring weight applied to unused guess slots on a win
    #[must_use]
    pub const fn score_multiplier(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Hard => 2,
            Self::Extreme => 3,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything a round needs at start
///
/// Fully determines the guess budget, the scoring multiplier and the feedback
/// shape for the round's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub initial_score: u32,
    pub secret: Word,
}

impl RoundConfig {
    /// Create a configuration with a zero starting score
    #[must_use]
    pub const fn new(mode: GameMode, difficulty: Difficulty, secret: Word) -> Self {
        Self {
            mode,
            difficulty,
            initial_score: 0,
            secret,
        }
    }

    /// Carry a score from a previous round (Infinite mode hand-off)
    #[must_use]
    pub const fn with_initial_score(mut self, score: u32) -> Self {
        self.initial_score = score;
        self
    }
}
