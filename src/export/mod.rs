// src/export/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::core::Vault;
use crate::db::DbError;
use crate::utils::ensure_parent_dir;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No passwords to export")]
    NothingToExport,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Store error: {0}")]
    DbError(#[from] DbError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub count: usize,
}

/// One `"{n}. {password}"` line per password, numbered from 1.
pub fn render_numbered(passwords: &[String]) -> String {
    passwords
        .iter()
        .enumerate()
        .map(|(idx, password)| format!("{}. {}", idx + 1, password))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn default_file_name(date: NaiveDate) -> String {
    format!("passwords-{}.txt", date.format("%Y-%m-%d"))
}

/// Write history and favorites to `output`. A directory (or no path at all)
/// gets the dated default file name.
pub fn export_passwords(vault: &Vault, output: Option<&Path>) -> Result<ExportReport> {
    let passwords = vault.all_passwords()?;
    if passwords.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let file_name = default_file_name(Utc::now().date_naive());
    let path = match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    };

    ensure_parent_dir(&path)?;
    fs::write(&path, render_numbered(&passwords))?;
    log::info!("Exported {} passwords to {}", passwords.len(), path.display());

    Ok(ExportReport {
        path,
        count: passwords.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn numbering_starts_at_one() {
        let passwords = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(render_numbered(&passwords), "1. alpha\n2. beta");
        assert_eq!(render_numbered(&[]), "");
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(default_file_name(date), "passwords-2024-03-07.txt");
    }

    #[test]
    fn empty_vault_has_nothing_to_export() {
        let vault = Vault::new(Database::in_memory());
        assert!(matches!(
            export_passwords(&vault, None),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn export_writes_union_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let vault = Vault::new(Database::in_memory());
        vault.record_generated("first").unwrap();
        vault.record_generated("second").unwrap();
        vault.toggle_favorite("first").unwrap();
        vault.toggle_favorite("kept").unwrap();

        let report = export_passwords(&vault, Some(dir.path())).unwrap();
        assert_eq!(report.count, 3);
        assert!(report.path.starts_with(dir.path()));

        let content = fs::read_to_string(&report.path).unwrap();
        assert_eq!(content, "1. second\n2. first\n3. kept");
    }
}
