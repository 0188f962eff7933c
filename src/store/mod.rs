use serde_json::Value;

use crate::common::app_error::AppError;

pub mod json_store;
pub mod memory_store;

/// Well-known keys in the persisted store.
pub mod keys {
    pub const QUESTIONS: &str = "quiz_questions";
    pub const THEME: &str = "theme";
    pub const RESULTS: &str = "quiz_results";
}

/// Persistence port: a flat key-value mapping of JSON documents. Missing keys
/// are `None`; implementations treat malformed content as absent.
pub trait StateStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, AppError>;
    fn set(&self, key: &str, value: Value) -> Result<(), AppError>;
}
