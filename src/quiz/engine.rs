use tracing::{debug, info};

use crate::{
    question::models::Question,
    quiz::{
        models::{AdvanceOutcome, QuizPhase, QuizResult, QuizSession, StartOutcome, SubmitOutcome},
        reconcile::reconcile,
    },
};

/// The quiz lifecycle state machine. Owns the question collection order, the
/// session pointers and the result history; every guard failure is a silent
/// no-op surfaced as a typed outcome.
pub struct QuizEngine {
    pub(crate) questions: Vec<Question>,
    pub(crate) session: QuizSession,
    pub(crate) history: Vec<QuizResult>,
    pub(crate) history_limit: usize,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, history: Vec<QuizResult>, history_limit: usize) -> Self {
        let mut engine = Self {
            questions,
            session: QuizSession::new(),
            history,
            history_limit,
        };
        engine.reconcile_session();

        engine
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn history(&self) -> &[QuizResult] {
        &self.history
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.session.current_index)
    }

    /// From `NotStarted`/`Completed` the run restarts at the first question;
    /// from `Idle` it starts at the question currently in view.
    pub fn start(&mut self) -> StartOutcome {
        if self.questions.is_empty() {
            info!("Start requested with no questions loaded");
            return StartOutcome::NoQuestions;
        }

        if matches!(
            self.session.phase,
            QuizPhase::NotStarted | QuizPhase::Completed
        ) {
            self.session.current_index = 0;
        }
        self.session.score = 0;
        self.session.clear_answer_state();
        self.session.phase = QuizPhase::Active;

        debug!("Quiz started at index {}", self.session.current_index);
        StartOutcome::Started
    }

    /// Toggles the key for multi-answer questions, replaces the selection for
    /// single-answer ones. Only legal while active and not yet submitted.
    pub fn select_option(&mut self, key: &str) -> bool {
        if self.session.phase != QuizPhase::Active || self.session.submitted {
            return false;
        }
        let Some(question) = self.questions.get(self.session.current_index) else {
            return false;
        };
        if !question.options.contains_key(key) {
            return false;
        }

        if question.is_multi_answer() {
            if !self.session.selection.remove(key) {
                self.session.selection.insert(key.to_string());
            }
        } else {
            self.session.selection.clear();
            self.session.selection.insert(key.to_string());
        }

        true
    }

    /// Grades by set-equality. An empty or incomplete selection is rejected
    /// rather than graded, and a second submit never changes the score.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.session.phase != QuizPhase::Active || self.session.submitted {
            return SubmitOutcome::Rejected;
        }
        let Some(question) = self.questions.get(self.session.current_index) else {
            return SubmitOutcome::Rejected;
        };
        if self.session.selection.is_empty()
            || self.session.selection.len() != question.correct.len()
        {
            return SubmitOutcome::Rejected;
        }

        self.session.submitted = true;
        let correct = self.session.selection == question.correct;
        if correct {
            self.session.score += 1;
        }

        debug!(
            "Submitted answer at index {}: {}",
            self.session.current_index,
            if correct { "correct" } else { "incorrect" }
        );
        SubmitOutcome::Graded { correct }
    }

    /// While active, advances past a submitted question or completes the run
    /// on the last one; while idle, browses forward.
    pub fn next(&mut self) -> AdvanceOutcome {
        match self.session.phase {
            QuizPhase::Active => {
                if !self.session.submitted {
                    return AdvanceOutcome::Ignored;
                }

                if self.session.current_index + 1 >= self.questions.len() {
                    let result =
                        QuizResult::from_run(self.session.score, self.questions.len() as u32);
                    self.history.insert(0, result.clone());
                    self.history.truncate(self.history_limit);
                    self.session.phase = QuizPhase::Completed;
                    self.session.clear_answer_state();

                    info!("Quiz completed with score {}/{}", result.score, result.total);
                    AdvanceOutcome::Completed(result)
                } else {
                    self.session.current_index += 1;
                    self.session.clear_answer_state();
                    AdvanceOutcome::Advanced
                }
            }
            QuizPhase::Idle => {
                if self.session.current_index + 1 >= self.questions.len() {
                    return AdvanceOutcome::Ignored;
                }

                self.session.current_index += 1;
                self.session.clear_answer_state();
                AdvanceOutcome::Advanced
            }
            _ => AdvanceOutcome::Ignored,
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.session.phase != QuizPhase::Idle || self.session.current_index == 0 {
            return false;
        }

        self.session.current_index -= 1;
        self.session.clear_answer_state();
        true
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.questions.len() {
            return false;
        }

        self.session.current_index = index;
        self.session.clear_answer_state();
        self.session.phase = QuizPhase::Idle;
        true
    }

    pub(crate) fn reconcile_session(&mut self) {
        let (index, phase) = reconcile(
            self.questions.len(),
            self.session.current_index,
            self.session.phase,
        );

        if index != self.session.current_index || phase != self.session.phase {
            debug!(
                "Reconciled session: index {} -> {}, phase {} -> {}",
                self.session.current_index, index, self.session.phase, phase
            );
        }
        self.session.current_index = index;
        self.session.phase = phase;
    }
}
