// src/db/memory.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{DatabaseBackend, DbError, Result};

#[derive(Clone, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseBackend for MemoryBackend {
    fn get_config_value(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| DbError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn store_config_value(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| DbError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_config_value(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| DbError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }
}
