use std::collections::BTreeMap;

use tracing::level_filters::LevelFilter;

use crate::{
    question::models::{Question, QuestionDraft},
    quiz::engine::QuizEngine,
};

pub fn setup_logging() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn draft(prompt: &str, correct: &[&str]) -> QuestionDraft {
    let options = BTreeMap::from([
        ("A".to_string(), format!("{} option A", prompt)),
        ("B".to_string(), format!("{} option B", prompt)),
        ("C".to_string(), format!("{} option C", prompt)),
        ("D".to_string(), format!("{} option D", prompt)),
    ]);

    QuestionDraft {
        prompt: prompt.to_string(),
        options,
        correct: correct.iter().map(|key| key.to_string()).collect(),
        explanation: format!("{} explained", prompt),
    }
}

pub fn engine_with(count: usize) -> QuizEngine {
    let questions: Vec<Question> = (0..count)
        .map(|i| Question::from_draft(draft(&format!("Question {}", i), &["A"])))
        .collect();

    QuizEngine::new(questions, vec![], 20)
}
