// src/db/file.rs
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{DatabaseBackend, Result};
use crate::utils::ensure_parent_dir;

/// Whole-file JSON object of string keys to string values. Every write
/// goes to a uniquely named temp file in the same directory, which is then
/// persisted over the store.
#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn open(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serde_json::to_string_pretty(values)?.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl DatabaseBackend for FileBackend {
    fn get_config_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn store_config_value(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove_config_value(&self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(&dir.path().join("nested/store.json")).unwrap();
        assert_eq!(backend.get_config_value("anything").unwrap(), None);
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn values_persist_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let backend = FileBackend::open(&path).unwrap();
        backend.store_config_value("passwordHistory", "[\"a\"]").unwrap();
        backend.store_config_value("other", "x").unwrap();
        backend.remove_config_value("other").unwrap();

        let reopened = FileBackend::open(&path).unwrap();
        assert_eq!(
            reopened.get_config_value("passwordHistory").unwrap().as_deref(),
            Some("[\"a\"]")
        );
        assert_eq!(reopened.get_config_value("other").unwrap(), None);

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "temp files left behind: {:?}", leftovers);
    }

    #[test]
    fn concurrent_writers_do_not_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let handles: Vec<_> = (0..8)
            .map(|thread| {
                let path = path.clone();
                std::thread::spawn(move || {
                    let backend = FileBackend::open(&path).unwrap();
                    let mut errors = Vec::new();
                    for i in 0..200 {
                        let key = format!("t{}", thread);
                        if let Err(e) = backend.store_config_value(&key, &i.to_string()) {
                            errors.push(e.to_string());
                        }
                    }
                    errors
                })
            })
            .collect();

        let errors: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert!(errors.is_empty(), "{} failed writes, first: {:?}", errors.len(), errors.first());

        // Every write replaced the whole file, so it still parses
        let backend = FileBackend::open(&path).unwrap();
        assert!(backend.get_config_value("t0").is_ok());
        let leftovers = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let backend = FileBackend::open(&path).unwrap();
        assert!(matches!(backend.get_config_value("k"), Err(DbError::JsonError(_))));
    }
}
