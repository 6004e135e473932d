//! Puzzle definitions and the solve state machine.
//!
//! Every puzzle carries a question, an acceptance rule, and a one-way
//! `solved` flag. Acceptance is resolved once at load time into either an
//! exact-answer or a pattern variant, so the solve path never branches on
//! raw definition keys.

use anyhow::{Context, Result};
use rand::prelude::IndexedRandom;
use regex::Regex;

/// How a candidate answer is judged.
#[derive(Debug, Clone)]
pub enum Acceptance {
    /// Trimmed, lowercased comparison against a stored answer. An empty
    /// stored answer can never be satisfied.
    Exact(String),
    /// Full-string, case-insensitive regex match against the trimmed
    /// candidate.
    Pattern(Regex),
}

/// A preliminary step some puzzles require before the real question is shown
/// (e.g. producing light in a dark room).
///
/// While `passed` is false only the exact `trigger` input advances the stage,
/// and then only when `required_item` (if any) is carried.
#[derive(Debug, Clone)]
pub struct PuzzleStage {
    pub prompt: String,
    pub trigger: String,
    pub required_item: Option<String>,
    pub success: String,
    pub failure: String,
    pub passed: bool,
}

/// A question gating part of the world, owned by exactly one room.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub question: String,
    pub acceptance: Acceptance,
    pub solved: bool,
    pub wrong_responses: Vec<String>,
    pub stage: Option<PuzzleStage>,
    pub on_solved: Option<String>,
    pub wins_game: bool,
}

/// Result of one solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    AlreadySolved,
    WrongAnswer,
    FormatMismatch,
}

impl SolveOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, SolveOutcome::Solved | SolveOutcome::AlreadySolved)
    }

    /// Player-facing text for the outcome.
    pub fn message(self) -> &'static str {
        match self {
            SolveOutcome::Solved => "You solved the puzzle!",
            SolveOutcome::AlreadySolved => "The puzzle is already solved.",
            SolveOutcome::WrongAnswer => "That's not the correct answer.",
            SolveOutcome::FormatMismatch => "That doesn't match the required format.",
        }
    }
}

impl Puzzle {
    /// Create an exact-answer puzzle.
    pub fn exact(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            acceptance: Acceptance::Exact(answer.into()),
            solved: false,
            wrong_responses: Vec::new(),
            stage: None,
            on_solved: None,
            wins_game: false,
        }
    }

    /// Create a pattern puzzle. The pattern is compiled case-insensitively
    /// and anchored so only full-string matches are accepted.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn pattern(question: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"(?i)\A(?:{pattern})\z"))
            .with_context(|| format!("invalid puzzle pattern '{pattern}'"))?;
        Ok(Self {
            question: question.into(),
            acceptance: Acceptance::Pattern(regex),
            solved: false,
            wrong_responses: Vec::new(),
            stage: None,
            on_solved: None,
            wins_game: false,
        })
    }

    /// Attempt to solve the puzzle with the given candidate answer.
    ///
    /// Once solved, every subsequent call short-circuits to
    /// [`SolveOutcome::AlreadySolved`] without evaluating the candidate.
    pub fn try_solve(&mut self, candidate: &str) -> SolveOutcome {
        if self.solved {
            return SolveOutcome::AlreadySolved;
        }
        let trimmed = candidate.trim();
        match &self.acceptance {
            Acceptance::Pattern(regex) => {
                if regex.is_match(trimmed) {
                    self.solved = true;
                    SolveOutcome::Solved
                } else {
                    SolveOutcome::FormatMismatch
                }
            },
            Acceptance::Exact(answer) => {
                let expected = answer.trim().to_lowercase();
                if !expected.is_empty() && trimmed.to_lowercase() == expected {
                    self.solved = true;
                    SolveOutcome::Solved
                } else {
                    SolveOutcome::WrongAnswer
                }
            },
        }
    }

    /// True while a pre-stage exists and hasn't been passed yet.
    pub fn stage_pending(&self) -> bool {
        self.stage.as_ref().is_some_and(|stage| !stage.passed)
    }

    /// Pick a random wrong-answer flavor line, if any are configured.
    pub fn wrong_flavor(&self) -> Option<&str> {
        self.wrong_responses.choose(&mut rand::rng()).map(String::as_str)
    }
}
