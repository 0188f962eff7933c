use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
    sync::RwLock,
};

use serde_json::Value;
use tracing::{error, warn};

use crate::{common::app_error::AppError, store::StateStore};

/// File-backed store: the whole mapping lives in one JSON document that is
/// rewritten on every `set`.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, Value>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding malformed store file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(AppError::Io(e)),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let lock = self.entries.read().map_err(|e| {
            error!("JsonFileStore read-lock error: {}", e);
            AppError::PoisonError
        })?;

        Ok(lock.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut lock = self.entries.write().map_err(|e| {
            error!("JsonFileStore write-lock error: {}", e);
            AppError::PoisonError
        })?;

        lock.insert(key.to_string(), value);
        self.flush(&lock)
    }
}
