use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{error, info};

use crate::{
    client::gen_client_error::GenClientError,
    config::config::CONFIG,
    question::{models::QuestionDraft, schema},
};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    count: u8,
}

#[derive(Debug, Clone)]
pub struct QuestionGenClient {
    domain: String,
}

impl QuestionGenClient {
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();

        Self { domain }
    }

    pub async fn health_check(&self, client: &Client) -> Result<(), GenClientError> {
        let response = client.get(format!("{}/health", self.domain)).send().await?;
        if !response.status().is_success() {
            error!("Failed health check on question generator");
            return Err(GenClientError::ApiError(
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to reach question generator".into(),
            ));
        }
        info!("Question generator is healthy");

        Ok(())
    }

    /// Asks the generator for `count` questions on `topic`. The response is
    /// accepted only when every record validates; anything else fails the
    /// whole call.
    pub async fn generate_questions(
        &self,
        client: &Client,
        topic: &str,
        count: u8,
    ) -> Result<Vec<QuestionDraft>, GenClientError> {
        if topic.trim().is_empty() {
            return Err(GenClientError::EmptyTopic);
        }
        if count == 0 || count > CONFIG.quiz.generation_max {
            return Err(GenClientError::InvalidCount(count));
        }

        let url = format!("{}/questions/generate", self.domain);
        info!("QuestionGenClient sending request to: {}", url);
        let response = client
            .post(&url)
            .header("content-type", "application/json")
            .json(&GenerateRequest {
                topic: topic.trim(),
                count,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or("No body".into());
        if !status.is_success() {
            error!("QuestionGenClient request failed: {} - {}", status, body);
            return Err(GenClientError::ApiError(status, body));
        }

        let drafts = schema::parse_batch(strip_code_fences(&body))?;
        info!("Generator returned {} questions on '{}'", drafts.len(), topic.trim());

        Ok(drafts)
    }
}

/// Generators tend to wrap their JSON payload in markdown code fences.
pub(crate) fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim()
}
