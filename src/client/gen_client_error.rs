use reqwest::StatusCode;

use crate::question::schema::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum GenClientError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Requested count {0} is out of bounds")]
    InvalidCount(u8),

    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Api error: {0} - {1}")]
    ApiError(StatusCode, String),

    #[error("Generated questions failed validation: {0}")]
    Schema(#[from] ValidationError),
}
