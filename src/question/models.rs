use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::question::schema::ValidationError;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 6;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub id: Uuid,
    pub prompt: String,
    pub options: BTreeMap<String, String>,
    pub correct: BTreeSet<String>,
    pub explanation: String,
}

impl Question {
    pub fn from_draft(draft: QuestionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: draft.prompt,
            options: draft.options,
            correct: draft.correct,
            explanation: draft.explanation,
        }
    }

    pub fn is_multi_answer(&self) -> bool {
        self.correct.len() > 1
    }

    /// Replaces every field but the id.
    pub fn apply_draft(&mut self, draft: QuestionDraft) {
        self.prompt = draft.prompt;
        self.options = draft.options;
        self.correct = draft.correct;
        self.explanation = draft.explanation;
    }
}

/// Authoring/import payload: a question without an id. Must pass `validate`
/// before it is admitted into the collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: BTreeMap<String, String>,
    pub correct: BTreeSet<String>,
    pub explanation: String,
}

impl QuestionDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(ValidationError::OptionCount(count));
        }

        if self.correct.is_empty() {
            return Err(ValidationError::EmptyAnswer);
        }

        for key in &self.correct {
            if !self.options.contains_key(key) {
                return Err(ValidationError::UnknownAnswerKey(key.clone()));
            }
        }

        Ok(())
    }
}
