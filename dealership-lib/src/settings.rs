//! Shared application settings (current database, recently opened files).
//!
//! Both CLI and GUI read and write `~/.config/car-dealership/settings.toml`,
//! so a database opened in one front end is the default in the other.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Recent-database list is capped at this many entries.
pub const MAX_RECENT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub current: Option<PathBuf>,
    #[serde(default)]
    pub recent: Vec<RecentDatabase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentDatabase {
    pub path: PathBuf,
    pub last_opened: String,
}

impl AppSettings {
    /// Make `path` the current database and move it to the front of the
    /// recent list.
    pub fn remember(&mut self, path: &Path) {
        let recent = &mut self.database.recent;
        recent.retain(|r| r.path != path);
        recent.insert(
            0,
            RecentDatabase {
                path: path.to_path_buf(),
                last_opened: chrono::Utc::now().to_rfc3339(),
            },
        );
        recent.truncate(MAX_RECENT);
        self.database.current = Some(path.to_path_buf());
    }

    /// Drop `path` from the recent list, clearing it as current if it was.
    pub fn forget(&mut self, path: &Path) {
        self.database.recent.retain(|r| r.path != path);
        if self.database.current.as_deref() == Some(path) {
            self.database.current = None;
        }
    }
}

/// Returns `~/.config/car-dealership/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("car-dealership").join("settings.toml")
}

/// Load settings from the default location.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Save settings to the default location.
pub fn save_settings(settings: &AppSettings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve which database to use:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.current`
pub fn resolve_database_path(
    cli_override: Option<PathBuf>,
    settings: &AppSettings,
) -> Option<PathBuf> {
    cli_override.or_else(|| settings.database.current.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_moves_to_front_without_duplicates() {
        let mut settings = AppSettings::default();
        settings.remember(Path::new("/a.db"));
        settings.remember(Path::new("/b.db"));
        settings.remember(Path::new("/a.db"));

        let paths: Vec<_> = settings
            .database
            .recent
            .iter()
            .map(|r| r.path.clone())
            .collect();
        assert_eq!(paths, vec![PathBuf::from("/a.db"), PathBuf::from("/b.db")]);
        assert_eq!(settings.database.current, Some(PathBuf::from("/a.db")));
    }

    #[test]
    fn remember_caps_recent() {
        let mut settings = AppSettings::default();
        for i in 0..15 {
            settings.remember(&PathBuf::from(format!("/cars{}.db", i)));
        }
        assert_eq!(settings.database.recent.len(), MAX_RECENT);
        assert_eq!(settings.database.recent[0].path, PathBuf::from("/cars14.db"));
    }

    #[test]
    fn forget_clears_current() {
        let mut settings = AppSettings::default();
        settings.remember(Path::new("/a.db"));
        settings.forget(Path::new("/a.db"));
        assert!(settings.database.recent.is_empty());
        assert_eq!(settings.database.current, None);
    }

    #[test]
    fn resolve_prefers_override() {
        let mut settings = AppSettings::default();
        assert_eq!(resolve_database_path(None, &settings), None);

        settings.remember(Path::new("/saved.db"));
        assert_eq!(
            resolve_database_path(None, &settings),
            Some(PathBuf::from("/saved.db"))
        );
        assert_eq!(
            resolve_database_path(Some(PathBuf::from("/cli.db")), &settings),
            Some(PathBuf::from("/cli.db"))
        );
    }
}
