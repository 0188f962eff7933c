use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    client::gen_client::QuestionGenClient,
    common::{
        app_error::AppError,
        models::{ConfirmPrompt, Theme},
    },
    config::config::CONFIG,
    question::{
        editor,
        loader::SourceLoader,
        models::{Question, QuestionDraft},
    },
    quiz::{
        engine::QuizEngine,
        models::{
            AdvanceOutcome, DeleteOutcome, QuizPhase, QuizResult, QuizSession, StartOutcome,
            SubmitOutcome,
        },
    },
    store::{StateStore, json_store::JsonFileStore, keys},
};

/// The application state: store port, http client, generation client, loader
/// and the quiz engine. Every user intent enters through here so that each
/// mutation persists the affected keys within the same logical step.
pub struct AppState {
    store: Box<dyn StateStore>,
    client: Client,
    gen_client: QuestionGenClient,
    loader: SourceLoader,
    engine: QuizEngine,
    theme: Theme,
    last_load_error: Option<String>,
}

impl AppState {
    /// Opens the configured JSON store and builds the state over it.
    pub async fn init() -> Result<Self, AppError> {
        let store = JsonFileStore::open(&CONFIG.storage.path)?;
        Self::from_store(Box::new(store)).await
    }

    pub async fn from_store(store: Box<dyn StateStore>) -> Result<Self, AppError> {
        let client = Client::new();
        let gen_client = QuestionGenClient::new(&CONFIG.generator.domain);

        let questions: Vec<Question> = read_or_default(store.as_ref(), keys::QUESTIONS)?;
        let history: Vec<QuizResult> = read_or_default(store.as_ref(), keys::RESULTS)?;
        let theme: Theme = read_or_default(store.as_ref(), keys::THEME)?;

        let engine = QuizEngine::new(questions, history, CONFIG.quiz.history_limit);

        let mut state = Self {
            store,
            client,
            gen_client,
            loader: SourceLoader::new(),
            engine,
            theme,
            last_load_error: None,
        };
        state.run_initial_load().await;

        Ok(state)
    }

    async fn run_initial_load(&mut self) {
        if !self.engine.questions().is_empty() {
            self.loader.mark_attempted();
            return;
        }

        match self.loader.load_initial(&self.client).await {
            Ok(Some(drafts)) => {
                let admitted = editor::load_collection(&mut self.engine, drafts)
                    .and_then(|count| self.persist_questions().map(|_| count));

                match admitted {
                    Ok(count) => info!("Admitted {} questions from the initial dataset", count),
                    Err(e) => {
                        error!("Failed to admit initial dataset: {}", e);
                        self.last_load_error = Some(e.to_string());
                    }
                }
            }
            Ok(None) => {}
            Err(e) => {
                error!("Initial question load failed: {}", e);
                self.last_load_error = Some(e.to_string());
            }
        }
    }

    pub fn session(&self) -> &QuizSession {
        self.engine.session()
    }

    pub fn questions(&self) -> &[Question] {
        self.engine.questions()
    }

    pub fn history(&self) -> &[QuizResult] {
        self.engine.history()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn last_load_error(&self) -> Option<&str> {
        self.last_load_error.as_deref()
    }

    pub fn start_quiz(&mut self) -> StartOutcome {
        self.engine.start()
    }

    pub fn select_option(&mut self, key: &str) -> bool {
        self.engine.select_option(key)
    }

    pub fn submit_answer(&mut self) -> SubmitOutcome {
        self.engine.submit()
    }

    pub fn next_question(&mut self) -> Result<AdvanceOutcome, AppError> {
        let outcome = self.engine.next();
        if matches!(outcome, AdvanceOutcome::Completed(_)) {
            self.persist_results()?;
        }

        Ok(outcome)
    }

    pub fn prev_question(&mut self) -> bool {
        self.engine.prev()
    }

    /// Jumping out of an active run abandons it, so it needs a confirmation.
    pub fn jump_to(&mut self, index: usize, prompt: &dyn ConfirmPrompt) -> bool {
        if self.engine.session().phase == QuizPhase::Active
            && !prompt.confirm("Selecting a question will end the current quiz. Continue?")
        {
            return false;
        }

        self.engine.jump_to(index)
    }

    pub fn shuffle_questions(&mut self) -> Result<bool, AppError> {
        let shuffled = editor::shuffle_questions(&mut self.engine);
        if shuffled {
            self.persist_questions()?;
        }

        Ok(shuffled)
    }

    pub fn add_question(&mut self, draft: QuestionDraft) -> Result<Uuid, AppError> {
        let id = editor::add_question(&mut self.engine, draft)?;
        self.persist_questions()?;

        Ok(id)
    }

    pub fn edit_question(&mut self, id: &Uuid, draft: QuestionDraft) -> Result<(), AppError> {
        editor::edit_question(&mut self.engine, id, draft)?;
        self.persist_questions()
    }

    pub fn delete_question(
        &mut self,
        id: &Uuid,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<DeleteOutcome, AppError> {
        if !prompt.confirm("Are you sure you want to delete this question?") {
            return Ok(DeleteOutcome::Cancelled);
        }

        let continuity_warning = editor::delete_question(&mut self.engine, id)?;
        self.persist_questions()?;

        Ok(DeleteOutcome::Deleted { continuity_warning })
    }

    pub async fn generate_questions(&mut self, topic: &str, count: u8) -> Result<usize, AppError> {
        let drafts = self
            .gen_client
            .generate_questions(&self.client, topic, count)
            .await?;

        let appended = editor::append_batch(&mut self.engine, drafts)?;
        self.persist_questions()?;

        Ok(appended)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        self.theme = self.theme.toggled();
        self.store.set(keys::THEME, serde_json::to_value(self.theme)?)?;

        Ok(self.theme)
    }

    fn persist_questions(&self) -> Result<(), AppError> {
        self.store
            .set(keys::QUESTIONS, serde_json::to_value(self.engine.questions())?)
    }

    fn persist_results(&self) -> Result<(), AppError> {
        self.store
            .set(keys::RESULTS, serde_json::to_value(self.engine.history())?)
    }
}

fn read_or_default<T: DeserializeOwned + Default>(
    store: &dyn StateStore,
    key: &str,
) -> Result<T, AppError> {
    let Some(value) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_value(value) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            warn!("Discarding malformed value under key '{}': {}", key, e);
            Ok(T::default())
        }
    }
}
