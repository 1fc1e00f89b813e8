//! Theme preference persistence.
//!
//! The light/dark flag lives in `preferences.toml`:
//!
//! ```toml
//! theme = "dark"
//! ```
//!
//! Writes go through `toml_edit` so comments and unrelated keys a user put
//! in the file are preserved.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme '{other}', expected 'light' or 'dark'")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PreferencesFile {
    theme: Option<ThemePreference>,
}

/// Reads and writes the theme flag on disk
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stored theme, or `None` when no file or no `theme` key exists
    pub async fn read(&self) -> Result<Option<ThemePreference>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).await?;
        let parsed: PreferencesFile = toml::from_str(&content)?;
        Ok(parsed.theme)
    }

    /// Stored theme with every failure mapped to the default
    pub async fn load(&self) -> ThemePreference {
        match self.read().await {
            Ok(Some(theme)) => {
                debug!("Loaded theme preference: {}", theme);
                theme
            }
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                warn!("Ignoring preferences at {:?}: {}", self.path, e);
                ThemePreference::default()
            }
        }
    }

    /// Persist the theme, keeping anything else in the file intact
    pub async fn save(&self, theme: ThemePreference) -> Result<()> {
        let existing = if fs::try_exists(&self.path).await? {
            fs::read_to_string(&self.path).await?
        } else {
            String::new()
        };

        let mut doc: toml_edit::DocumentMut = existing.parse()?;
        doc["theme"] = toml_edit::value(theme.as_str());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, doc.to_string()).await?;

        info!("Saved theme preference: {}", theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemePreference::Dark.toggle(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggle().toggle(), ThemePreference::Light);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(" Light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert_eq!("DARK".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert!("blue".parse::<ThemePreference>().is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path().join("preferences.toml"));
        assert_eq!(store.read().await.unwrap(), None);
        assert_eq!(store.load().await, ThemePreference::Dark);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(dir.path().join("nested").join("preferences.toml"));
        store.save(ThemePreference::Light).await.unwrap();
        assert_eq!(store.load().await, ThemePreference::Light);
        store.save(ThemePreference::Dark).await.unwrap();
        assert_eq!(store.read().await.unwrap(), Some(ThemePreference::Dark));
    }

    #[tokio::test]
    async fn test_save_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "# my settings\ntheme = \"dark\"\nfont = \"mono\"\n").unwrap();

        let store = PreferenceStore::new(&path);
        store.save(ThemePreference::Light).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# my settings"));
        assert!(content.contains("font = \"mono\""));
        assert!(content.contains("theme = \"light\""));
    }

    #[tokio::test]
    async fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = \"sepia\"\n").unwrap();

        let store = PreferenceStore::new(&path);
        assert!(store.read().await.is_err());
        assert_eq!(store.load().await, ThemePreference::Dark);
    }
}
