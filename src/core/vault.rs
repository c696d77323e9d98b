// src/core/vault.rs
use crate::db::{Database, Result};

pub const HISTORY_KEY: &str = "passwordHistory";
pub const FAVORITES_KEY: &str = "favoritePasswords";

/// Most recent passwords kept in history.
pub const HISTORY_LIMIT: usize = 5;
/// Most favorites kept; a toggle on a full list does not add.
pub const FAVORITES_LIMIT: usize = 10;

/// Recently generated and favorited passwords, stored as JSON string lists.
pub struct Vault {
    db: Database,
}

impl Vault {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn history(&self) -> Result<Vec<String>> {
        self.load_list(HISTORY_KEY)
    }

    pub fn favorites(&self) -> Result<Vec<String>> {
        self.load_list(FAVORITES_KEY)
    }

    /// Put `password` at the front of history, dropping any older copy.
    pub fn record_generated(&self, password: &str) -> Result<Vec<String>> {
        let mut history = self.history()?;
        history.retain(|p| p != password);
        history.insert(0, password.to_string());
        history.truncate(HISTORY_LIMIT);

        self.save_list(HISTORY_KEY, &history)?;
        Ok(history)
    }

    pub fn clear_history(&self) -> Result<()> {
        self.db.remove_config_value(HISTORY_KEY)
    }

    /// Flip favorite status and report whether `password` is now a favorite.
    pub fn toggle_favorite(&self, password: &str) -> Result<bool> {
        let mut favorites = self.favorites()?;

        let now_favorite = if favorites.iter().any(|p| p == password) {
            favorites.retain(|p| p != password);
            false
        } else {
            favorites.push(password.to_string());
            favorites.truncate(FAVORITES_LIMIT);
            let added = favorites.iter().any(|p| p == password);
            if !added {
                log::warn!("Favorites full ({} entries), not adding", FAVORITES_LIMIT);
            }
            added
        };

        self.save_list(FAVORITES_KEY, &favorites)?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, password: &str) -> Result<bool> {
        Ok(self.favorites()?.iter().any(|p| p == password))
    }

    /// History followed by favorites, duplicates removed in first-seen order.
    pub fn all_passwords(&self) -> Result<Vec<String>> {
        let mut all: Vec<String> = Vec::new();
        for password in self.history()?.into_iter().chain(self.favorites()?) {
            if !all.contains(&password) {
                all.push(password);
            }
        }
        Ok(all)
    }

    // An unreadable stored list is dropped rather than blocking the caller
    fn load_list(&self, key: &str) -> Result<Vec<String>> {
        let Some(raw) = self.db.get_config_value(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                log::warn!("Ignoring unreadable '{}' entry: {}", key, e);
                Ok(Vec::new())
            }
        }
    }

    fn save_list(&self, key: &str, list: &[String]) -> Result<()> {
        self.db.store_config_value(key, &serde_json::to_string(list)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> Vault {
        Vault::new(Database::in_memory())
    }

    #[test]
    fn history_is_most_recent_first_and_capped() {
        let vault = vault();
        for i in 0..7 {
            vault.record_generated(&format!("pw{}", i)).unwrap();
        }
        assert_eq!(vault.history().unwrap(), vec!["pw6", "pw5", "pw4", "pw3", "pw2"]);
    }

    #[test]
    fn history_moves_duplicates_to_front() {
        let vault = vault();
        vault.record_generated("a").unwrap();
        vault.record_generated("b").unwrap();
        let history = vault.record_generated("a").unwrap();
        assert_eq!(history, vec!["a", "b"]);
    }

    #[test]
    fn clear_history_empties_the_list() {
        let vault = vault();
        vault.record_generated("a").unwrap();
        vault.clear_history().unwrap();
        assert!(vault.history().unwrap().is_empty());
    }

    #[test]
    fn toggle_favorite_adds_then_removes() {
        let vault = vault();
        assert!(vault.toggle_favorite("x").unwrap());
        assert!(vault.is_favorite("x").unwrap());
        assert!(!vault.toggle_favorite("x").unwrap());
        assert!(!vault.is_favorite("x").unwrap());
    }

    #[test]
    fn full_favorites_reject_new_entries() {
        let vault = vault();
        for i in 0..FAVORITES_LIMIT {
            assert!(vault.toggle_favorite(&format!("fav{}", i)).unwrap());
        }
        assert!(!vault.toggle_favorite("overflow").unwrap());

        let favorites = vault.favorites().unwrap();
        assert_eq!(favorites.len(), FAVORITES_LIMIT);
        assert_eq!(favorites[0], "fav0");
        assert!(!favorites.contains(&"overflow".to_string()));
    }

    #[test]
    fn all_passwords_deduplicates_history_then_favorites() {
        let vault = vault();
        vault.record_generated("one").unwrap();
        vault.record_generated("two").unwrap();
        vault.toggle_favorite("one").unwrap();
        vault.toggle_favorite("three").unwrap();
        assert_eq!(vault.all_passwords().unwrap(), vec!["two", "one", "three"]);
    }

    #[test]
    fn unreadable_list_loads_as_empty() {
        let db = Database::in_memory();
        db.store_config_value(HISTORY_KEY, "{broken").unwrap();
        let vault = Vault::new(db);
        assert!(vault.history().unwrap().is_empty());
        assert_eq!(vault.record_generated("fresh").unwrap(), vec!["fresh"]);
    }
}
