// src/db/mod.rs
use std::path::Path;

use thiserror::Error;

pub mod file;
pub mod memory;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, DbError>;

// Storage backend trait - string keys to string values
pub trait DatabaseBackend {
    fn get_config_value(&self, key: &str) -> Result<Option<String>>;

    fn store_config_value(&self, key: &str, value: &str) -> Result<()>;

    fn remove_config_value(&self, key: &str) -> Result<()>;
}

#[derive(Clone)]
pub enum DatabaseType {
    File(file::FileBackend),
    Memory(memory::MemoryBackend),
}

// The main store struct that uses the enum pattern instead of trait objects
#[derive(Clone)]
pub struct Database {
    pub backend: DatabaseType,
}

impl Database {
    /// Open a store. `memory:` gives a throwaway in-process store; anything
    /// else is a JSON file path, with an optional `file:` prefix.
    pub fn new(connection_string: &str) -> Result<Self> {
        if connection_string == "memory:" {
            log::debug!("Using in-memory store");
            return Ok(Self {
                backend: DatabaseType::Memory(memory::MemoryBackend::new()),
            });
        }

        let path = connection_string
            .strip_prefix("file:")
            .unwrap_or(connection_string);
        let backend = file::FileBackend::open(Path::new(path))?;
        log::debug!("Using file store at {}", backend.path().display());

        Ok(Self {
            backend: DatabaseType::File(backend),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            backend: DatabaseType::Memory(memory::MemoryBackend::new()),
        }
    }

    pub fn get_config_value(&self, key: &str) -> Result<Option<String>> {
        match &self.backend {
            DatabaseType::File(backend) => backend.get_config_value(key),
            DatabaseType::Memory(backend) => backend.get_config_value(key),
        }
    }

    pub fn store_config_value(&self, key: &str, value: &str) -> Result<()> {
        match &self.backend {
            DatabaseType::File(backend) => backend.store_config_value(key, value),
            DatabaseType::Memory(backend) => backend.store_config_value(key, value),
        }
    }

    pub fn remove_config_value(&self, key: &str) -> Result<()> {
        match &self.backend {
            DatabaseType::File(backend) => backend.remove_config_value(key),
            DatabaseType::Memory(backend) => backend.remove_config_value(key),
        }
    }
}

// Initialize the store
pub fn init_db(connection_string: &str) -> Result<Database> {
    Database::new(connection_string)
}
