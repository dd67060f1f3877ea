//! App Configuration
//!
//! `config.json` in the app config directory. Provides the local identity
//! (the current user) and database/pagination settings. Missing files are
//! created with defaults; missing keys fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::User;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Stable id used as board owner reference
    pub user_id: String,
    pub display_name: String,
    /// Database file name inside the app data directory
    pub db_file: String,
    /// Boards per dashboard page
    pub page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| "local".to_string());
        Self {
            user_id: user.clone(),
            display_name: user,
            db_file: "kanban.db".to_string(),
            page_size: 6,
        }
    }
}

impl AppConfig {
    /// Load `config.json` from `dir`, writing defaults on first run
    pub fn load_or_create(dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create config dir {}: {}", dir.display(), e))?;
        let path = dir.join(CONFIG_FILE);

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            return serde_json::from_str(&content)
                .map_err(|e| format!("Invalid config {}: {}", path.display(), e));
        }

        let config = Self::default();
        config.save(dir)?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<(), String> {
        let path = dir.join(CONFIG_FILE);
        let content = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(&path, content).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    pub fn current_user(&self) -> User {
        User::new(self.user_id.clone(), self.display_name.clone())
    }

    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.db_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_create(dir.path()).unwrap();

        assert!(dir.path().join(CONFIG_FILE).exists());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.db_file, "kanban.db");
        assert!(!config.user_id.is_empty());
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"user_id":"u-42","display_name":"Ana"}"#).unwrap();

        let config = AppConfig::load_or_create(dir.path()).unwrap();

        assert_eq!(config.current_user(), User::new("u-42", "Ana"));
        assert_eq!(config.page_size, 6);
        assert_eq!(config.db_path(Path::new("/data")), PathBuf::from("/data/kanban.db"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(AppConfig::load_or_create(dir.path()).is_err());
    }
}
