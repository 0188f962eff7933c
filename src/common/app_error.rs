use crate::{client::gen_client_error::GenClientError, question::schema::ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Lock was poisoned")]
    PoisonError,

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to serialize object: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Question generation failed: {0}")]
    GenClient(#[from] GenClientError),

    #[error("Internal error: {0}")]
    Internal(String),
}
