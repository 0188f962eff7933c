use rand::{Rng, seq::SliceRandom};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    common::app_error::AppError,
    question::models::{Question, QuestionDraft},
    quiz::{engine::QuizEngine, models::QuizPhase},
};

pub fn add_question(engine: &mut QuizEngine, draft: QuestionDraft) -> Result<Uuid, AppError> {
    draft.validate()?;

    let question = Question::from_draft(draft);
    let id = question.id;
    engine.questions.push(question);

    if matches!(engine.session.phase, QuizPhase::NotStarted | QuizPhase::Idle) {
        engine.session.current_index = engine.questions.len() - 1;
        engine.session.phase = QuizPhase::Idle;
        engine.session.clear_answer_state();
    }
    engine.reconcile_session();

    info!("Added question {}", id);
    Ok(id)
}

/// Replaces every field but the id, in place. The current index never moves.
pub fn edit_question(
    engine: &mut QuizEngine,
    id: &Uuid,
    draft: QuestionDraft,
) -> Result<(), AppError> {
    draft.validate()?;

    let Some(position) = engine.questions.iter().position(|q| q.id == *id) else {
        return Err(AppError::NotFound(format!(
            "Question with id {} does not exist",
            id
        )));
    };

    engine.questions[position].apply_draft(draft);

    if position == engine.session.current_index {
        let options = &engine.questions[position].options;
        engine.session.selection.retain(|key| options.contains_key(key));
    }
    engine.reconcile_session();

    debug!("Edited question {}", id);
    Ok(())
}

/// Removes a question and re-derives the current index: empty collection
/// resets to the start, an earlier deletion shifts the index down, an
/// out-of-bounds index clamps to the last question, anything else stands.
/// Returns whether quiz continuity was affected (the displayed question
/// disappeared mid-run).
pub fn delete_question(engine: &mut QuizEngine, id: &Uuid) -> Result<bool, AppError> {
    let Some(position) = engine.questions.iter().position(|q| q.id == *id) else {
        return Err(AppError::NotFound(format!(
            "Question with id {} does not exist",
            id
        )));
    };

    let was_current = position == engine.session.current_index;
    engine.questions.remove(position);

    if !engine.questions.is_empty() {
        if position < engine.session.current_index {
            engine.session.current_index -= 1;
        } else if engine.session.current_index >= engine.questions.len() {
            engine.session.current_index = engine.questions.len() - 1;
        }
    }

    let continuity_warning = was_current && engine.session.phase == QuizPhase::Active;
    if was_current {
        engine.session.clear_answer_state();
    }
    if continuity_warning {
        warn!("Deleted the question currently displayed in an active quiz");
    }
    engine.reconcile_session();

    info!("Deleted question {}", id);
    Ok(continuity_warning)
}

/// Fisher-Yates reorder with the thread rng. No-op for fewer than two
/// questions or while a quiz is active.
pub fn shuffle_questions(engine: &mut QuizEngine) -> bool {
    shuffle_questions_with(engine, &mut rand::rng())
}

pub fn shuffle_questions_with<R: Rng + ?Sized>(engine: &mut QuizEngine, rng: &mut R) -> bool {
    if engine.questions.len() < 2 || engine.session.phase == QuizPhase::Active {
        return false;
    }

    engine.questions.shuffle(rng);
    engine.session.current_index = 0;
    engine.session.clear_answer_state();
    if engine.session.phase != QuizPhase::NotStarted {
        engine.session.phase = QuizPhase::Idle;
    }
    engine.reconcile_session();

    debug!("Shuffled {} questions", engine.questions.len());
    true
}

/// Bulk append of an already validated batch (generation result). While
/// browsing, the view moves to the first appended question.
pub fn append_batch(engine: &mut QuizEngine, drafts: Vec<QuestionDraft>) -> Result<usize, AppError> {
    for draft in &drafts {
        draft.validate()?;
    }
    if drafts.is_empty() {
        return Ok(0);
    }

    let first_new = engine.questions.len();
    engine
        .questions
        .extend(drafts.into_iter().map(Question::from_draft));

    if matches!(engine.session.phase, QuizPhase::NotStarted | QuizPhase::Idle) {
        engine.session.current_index = first_new;
        engine.session.phase = QuizPhase::Idle;
        engine.session.clear_answer_state();
    }
    engine.reconcile_session();

    let appended = engine.questions.len() - first_new;
    info!("Appended {} questions", appended);
    Ok(appended)
}

/// Replaces the whole collection (initial load). The session resets and the
/// quiz stays unstarted.
pub fn load_collection(
    engine: &mut QuizEngine,
    drafts: Vec<QuestionDraft>,
) -> Result<usize, AppError> {
    for draft in &drafts {
        draft.validate()?;
    }

    engine.questions = drafts.into_iter().map(Question::from_draft).collect();
    engine.session = Default::default();
    engine.reconcile_session();

    info!("Loaded {} questions", engine.questions.len());
    Ok(engine.questions.len())
}
