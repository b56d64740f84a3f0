use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::i18n::DEFAULT_LANGUAGE_ID;

/// Languages directory used when `LANGUAGES_PATH` is not set.
pub const DEFAULT_LANGUAGES_PATH: &str = "lang";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Languages directory
    languages_path: PathBuf,
    languages_path_explicit: bool,

    // Selected language (Windows LCID)
    current_language_id: i32,
}

impl Config {
    /// Explicit configuration, e.g. from a settings dialog.
    pub fn new(languages_path: impl Into<PathBuf>, current_language_id: i32) -> Self {
        Self {
            languages_path: languages_path.into(),
            languages_path_explicit: true,
            current_language_id,
        }
    }

    /// Configuration whose languages directory is an application default
    /// (e.g. next to the executable) rather than a user choice.
    pub fn with_default_path(languages_path: impl Into<PathBuf>, current_language_id: i32) -> Self {
        Self {
            languages_path: languages_path.into(),
            languages_path_explicit: false,
            current_language_id,
        }
    }

    pub fn from_env() -> Result<Self> {
        let (languages_path, languages_path_explicit) = match std::env::var("LANGUAGES_PATH") {
            Ok(path) if !path.trim().is_empty() => (PathBuf::from(path), true),
            _ => (PathBuf::from(DEFAULT_LANGUAGES_PATH), false),
        };

        let current_language_id = match std::env::var("LANGUAGE_ID") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid LANGUAGE_ID '{}', using {}", raw, DEFAULT_LANGUAGE_ID);
                DEFAULT_LANGUAGE_ID
            }),
            Err(_) => DEFAULT_LANGUAGE_ID,
        };

        Ok(Self {
            languages_path,
            languages_path_explicit,
            current_language_id,
        })
    }

    pub fn languages_path(&self) -> &Path {
        &self.languages_path
    }

    /// Whether the languages directory was chosen by the user rather than
    /// defaulted. A missing explicit directory aborts loading; a missing
    /// default one does not.
    pub fn languages_path_explicit(&self) -> bool {
        self.languages_path_explicit
    }

    pub fn current_language_id(&self) -> i32 {
        self.current_language_id
    }
}
