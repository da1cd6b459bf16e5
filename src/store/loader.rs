use super::types::UserRecord;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Supplier of the full user dataset.
///
/// Implementations must be idempotent and order-preserving: two consecutive
/// `load` calls against unchanged backing data return identical sequences.
/// The server reloads per request and keeps no cross-request cache.
pub trait RecordStore: Send + Sync {
    fn load(&self) -> Result<Vec<UserRecord>>;
}

/// Reads a JSON array of user records from disk on every call.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<UserRecord>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read dataset {}", self.path.display()))?;
        let records: Vec<UserRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse dataset {}", self.path.display()))?;
        Ok(records)
    }
}

/// Fixture store serving a fixed record sequence from memory.
pub struct InMemoryStore {
    records: Vec<UserRecord>,
}

impl InMemoryStore {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.clone())
    }
}
