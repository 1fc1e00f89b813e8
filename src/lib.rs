//! Folio - scripted portfolio console
//!
//! A terminal rendition of a portfolio's "ask the agent" widget:
//! - A command console with an append-only transcript
//! - A fixed registry of profile commands (`help`, `about`, `skills`, ...)
//! - A light/dark theme preference persisted across runs

pub mod console;
pub mod preferences;
pub mod profile;
pub mod tui;

pub use console::{Console, DisplayState, Entry, EntryKind, Registry, Submission, Transcript};
pub use preferences::{PreferenceStore, ThemePreference};
pub use profile::Profile;

use std::path::PathBuf;

/// Configuration for Folio
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// Directory holding preferences and the TUI log file
    pub config_dir: PathBuf,

    /// Theme to use for this run instead of the stored preference
    pub theme_override: Option<ThemePreference>,

    /// Whether to log at debug level
    pub verbose: bool,
}

impl FolioConfig {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            theme_override: None,
            verbose: false,
        }
    }

    pub fn with_theme_override(mut self, theme: Option<ThemePreference>) -> Self {
        self.theme_override = theme;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Path of the TOML file holding the theme preference
    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join("preferences.toml")
    }

    /// Log destination while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.config_dir.join("folio.log")
    }
}

/// Result type for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the console itself
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse preferences: {0}")]
    PreferenceParse(#[from] toml::de::Error),

    #[error("Failed to edit preferences: {0}")]
    PreferenceEdit(#[from] toml_edit::TomlError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
