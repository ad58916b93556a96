use std::collections::HashMap;
use std::sync::Mutex;

use super::{AdapterError, StorageAdapter};

/// In-memory adapter for tests and demos. Contents vanish at process exit.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the raw stored value, for asserting on persisted state.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl StorageAdapter for MemoryAdapter {
    async fn read(&self, key: &str) -> Result<Option<String>, AdapterError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AdapterError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
