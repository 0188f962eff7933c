use core::fmt;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    NotStarted,
    Idle,
    Active,
    Completed,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizPhase::NotStarted => write!(f, "not_started"),
            QuizPhase::Idle => write!(f, "idle"),
            QuizPhase::Active => write!(f, "active"),
            QuizPhase::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizSession {
    pub phase: QuizPhase,
    pub current_index: usize,
    pub selection: BTreeSet<String>,
    pub submitted: bool,
    pub score: u32,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::NotStarted,
            current_index: 0,
            selection: BTreeSet::new(),
            submitted: false,
            score: 0,
        }
    }

    pub(crate) fn clear_answer_state(&mut self) {
        self.selection.clear();
        self.submitted = false;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuizResult {
    pub timestamp: DateTime<Utc>,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
}

impl QuizResult {
    pub fn from_run(score: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            ((score as f64 / total as f64) * 100.0).round() as u32
        };

        Self {
            timestamp: Utc::now(),
            score,
            total,
            percentage,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    NoQuestions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Graded { correct: bool },
    Rejected,
}

#[derive(Debug, PartialEq)]
pub enum AdvanceOutcome {
    Advanced,
    Completed(QuizResult),
    Ignored,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { continuity_warning: bool },
    Cancelled,
}
