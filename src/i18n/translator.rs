//! Translator: merged language table plus the selected language.
//!
//! A `Translator` only exists once loading has finished, and it never
//! changes afterwards. Lookups borrow from the table and never fail.

use tracing::{info, warn};

use crate::config::Config;
use crate::i18n::{
    load_directory, load_resources, Language, LanguageTable, LoadError, ResourceSource,
};

/// Language used when the selected one is not loaded (English-US).
pub const DEFAULT_LANGUAGE_ID: i32 = 1033;

#[derive(Debug, Clone)]
pub struct Translator {
    table: LanguageTable,
    selected: i32,
}

impl Translator {
    /// Build a translator from an already populated table.
    pub fn new(table: LanguageTable, selected: i32) -> Self {
        Self { table, selected }
    }

    /// Load embedded packs, then the languages directory, and select the
    /// configured language.
    ///
    /// Directory packs replace embedded packs with the same code. If the
    /// languages directory cannot be read, loading fails when the path was
    /// configured explicitly; for the default path the embedded packs are
    /// used alone.
    pub fn load(resources: &dyn ResourceSource, config: &Config) -> Result<Self, LoadError> {
        let mut table = LanguageTable::new();

        let embedded = load_resources(resources, &mut table);

        let external = match load_directory(config.languages_path(), &mut table) {
            Ok(count) => count,
            Err(e) if !config.languages_path_explicit() => {
                warn!("{}; continuing with embedded languages only", e);
                0
            }
            Err(e) => return Err(e),
        };

        info!(
            "Loaded {} languages ({} embedded, {} from {})",
            table.len(),
            embedded,
            external,
            config.languages_path().display()
        );

        let translator = Self::new(table, config.current_language_id());
        match translator.active_language() {
            Some(lang) if lang.code() == translator.selected => {
                info!("Using language {} ({})", lang.code(), lang.name());
            }
            Some(lang) => {
                warn!(
                    "Language {} is not available, falling back to {} ({})",
                    translator.selected,
                    lang.code(),
                    lang.name()
                );
            }
            None => {
                warn!(
                    "Neither language {} nor {} is available; keys will be shown untranslated",
                    translator.selected, DEFAULT_LANGUAGE_ID
                );
            }
        }

        Ok(translator)
    }

    /// All loaded languages. Callers must not rely on the order.
    pub fn available_languages(&self) -> Vec<&Language> {
        self.table.values().collect()
    }

    /// The configured language code, whether or not it is loaded.
    pub fn selected_language_id(&self) -> i32 {
        self.selected
    }

    pub fn language(&self, code: i32) -> Option<&Language> {
        self.table.get(&code)
    }

    /// The language lookups resolve against: the selected one if loaded,
    /// otherwise the default, otherwise none.
    pub fn active_language(&self) -> Option<&Language> {
        self.table
            .get(&self.selected)
            .or_else(|| self.table.get(&DEFAULT_LANGUAGE_ID))
    }

    /// Translate `key` into the active language.
    ///
    /// Returns `key` itself when no language is active or the key is not
    /// translated, so missing strings show up as their key in the UI.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.active_language()
            .and_then(|lang| lang.get(key))
            .unwrap_or(key)
    }
}
