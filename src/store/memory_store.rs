use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use serde_json::Value;
use tracing::error;

use crate::{common::app_error::AppError, store::StateStore};

/// In-memory store, shareable across owners. Stands in for the file store in
/// tests and anywhere persistence across restarts is not wanted.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let lock = self.entries.read().map_err(|e| {
            error!("MemoryStore read-lock error: {}", e);
            AppError::PoisonError
        })?;

        Ok(lock.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut lock = self.entries.write().map_err(|e| {
            error!("MemoryStore write-lock error: {}", e);
            AppError::PoisonError
        })?;

        lock.insert(key.to_string(), value);
        Ok(())
    }
}
