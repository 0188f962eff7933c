use rand::seq::IndexedRandom;
use reqwest::Client;
use tracing::{error, info};

use crate::{
    common::app_error::AppError,
    config::config::CONFIG,
    question::{models::QuestionDraft, schema},
};

pub(crate) const BUNDLED_DATASETS: &[&str] = &[
    include_str!("datasets/aws_foundations.json"),
    include_str!("datasets/aws_operations.json"),
];

/// One-shot source of initial questions: a bundled dataset picked at random,
/// or a remote dataset when one is configured. Never runs twice in a session
/// and never overwrites a non-empty collection (the caller only consults it
/// when the collection is empty).
pub struct SourceLoader {
    attempted: bool,
}

impl SourceLoader {
    pub fn new() -> Self {
        Self { attempted: false }
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    pub fn mark_attempted(&mut self) {
        self.attempted = true;
    }

    /// Returns `None` once the single attempt is spent.
    pub async fn load_initial(
        &mut self,
        client: &Client,
    ) -> Result<Option<Vec<QuestionDraft>>, AppError> {
        if self.attempted {
            return Ok(None);
        }
        self.attempted = true;

        let raw = match &CONFIG.loader.dataset_url {
            Some(url) => self.fetch_remote(client, url).await?,
            None => self.pick_bundled()?,
        };

        let drafts = schema::parse_batch(&raw).map_err(|e| {
            error!("Initial dataset failed validation: {}", e);
            AppError::Validation(e)
        })?;

        info!("Loaded {} initial questions", drafts.len());
        Ok(Some(drafts))
    }

    fn pick_bundled(&self) -> Result<String, AppError> {
        let mut rng = rand::rng();
        let Some(raw) = BUNDLED_DATASETS.choose(&mut rng) else {
            return Err(AppError::Internal(
                "No bundled datasets are available".into(),
            ));
        };

        Ok((*raw).to_string())
    }

    async fn fetch_remote(&self, client: &Client, url: &str) -> Result<String, AppError> {
        info!("Fetching initial dataset from: {}", url);
        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Dataset fetch failed: {}", status);
            return Err(AppError::Internal(format!(
                "Dataset fetch failed with status {}",
                status
            )));
        }

        Ok(response.text().await?)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new()
    }
}
