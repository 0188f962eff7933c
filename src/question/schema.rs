use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::question::models::QuestionDraft;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Question prompt is empty")]
    EmptyPrompt,

    #[error("Expected between 2 and 6 options, got {0}")]
    OptionCount(usize),

    #[error("No correct answer given")]
    EmptyAnswer,

    #[error("Correct answer '{0}' is not an option key")]
    UnknownAnswerKey(String),

    #[error("Record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("Failed to parse question batch: {0}")]
    Malformed(String),
}

/// Wire shape shared by bundled datasets and generator responses.
#[derive(Debug, Deserialize)]
pub struct RawQuestionRecord {
    pub question: String,
    pub options: BTreeMap<String, String>,
    #[serde(rename = "correctAnswer", alias = "correctAnswerKey")]
    pub correct_answer: RawAnswer,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Single(String),
    Multi(Vec<String>),
}

impl RawAnswer {
    /// Accepts `"A"`, `["A", "B"]` and the legacy literal `"[A,B]"` form.
    pub fn into_keys(self) -> BTreeSet<String> {
        match self {
            RawAnswer::Single(raw) => {
                let trimmed = raw.trim();
                if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
                    trimmed[1..trimmed.len() - 1]
                        .split(',')
                        .map(|key| key.trim().to_string())
                        .filter(|key| !key.is_empty())
                        .collect()
                } else {
                    BTreeSet::from([trimmed.to_string()])
                }
            }
            RawAnswer::Multi(keys) => keys.into_iter().map(|key| key.trim().to_string()).collect(),
        }
    }
}

pub fn parse_batch(raw: &str) -> Result<Vec<QuestionDraft>, ValidationError> {
    let records: Vec<RawQuestionRecord> =
        serde_json::from_str(raw).map_err(|e| ValidationError::Malformed(e.to_string()))?;

    validate_batch(records)
}

/// All-or-nothing: one bad record rejects the whole batch.
pub fn validate_batch(
    records: Vec<RawQuestionRecord>,
) -> Result<Vec<QuestionDraft>, ValidationError> {
    let mut drafts = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let draft = QuestionDraft {
            prompt: record.question,
            options: record.options,
            correct: record.correct_answer.into_keys(),
            explanation: record.explanation,
        };

        draft.validate().map_err(|source| ValidationError::Record {
            index,
            source: Box::new(source),
        })?;
        drafts.push(draft);
    }

    Ok(drafts)
}
