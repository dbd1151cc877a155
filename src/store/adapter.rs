use std::collections::HashMap;

use crate::error::TaskfoldersError;

/// Synchronous key-value string storage the task store saves into.
pub trait PersistenceAdapter {
    fn get(&self, key: &str) -> Result<Option<String>, TaskfoldersError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), TaskfoldersError>;
}

/// In-process storage. Reads and writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TaskfoldersError> {
        if self.fail_reads {
            return Err(TaskfoldersError::persistence(format!(
                "Storage is disabled (reading '{key}')"
            )));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TaskfoldersError> {
        if self.fail_writes {
            return Err(TaskfoldersError::persistence(format!(
                "Storage quota exceeded (writing '{key}')"
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
